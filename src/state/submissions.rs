//! In-memory store of accepted enquiries

use super::forms::FormData;
use std::ops::Deref;

/// Snapshot of the form taken when a submit passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission(FormData);

impl Submission {
    pub fn new(data: FormData) -> Self {
        Self(data)
    }
}

impl Deref for Submission {
    type Target = FormData;

    fn deref(&self) -> &FormData {
        &self.0
    }
}

/// Ordered, append-only list of submissions; cleared only as a whole
#[derive(Debug, Clone, Default)]
pub struct SubmissionStore {
    entries: Vec<Submission>,
}

impl SubmissionStore {
    /// Append a snapshot and return its 1-based position
    pub fn record(&mut self, data: FormData) -> usize {
        self.entries.push(Submission::new(data));
        self.entries.len()
    }

    pub fn all(&self) -> &[Submission] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every submission, returning how many were removed
    pub fn clear(&mut self) -> usize {
        let removed = self.entries.len();
        self.entries.clear();
        removed
    }
}
