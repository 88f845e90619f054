//! Logical layout of the submissions document

use crate::state::Submission;

/// Name the document is offered under
pub const EXPORT_FILE_NAME: &str = "All_Submissions.docx";

/// One submission as it appears in the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionBlock {
    /// Bold heading, e.g. `Submission #1`
    pub heading: String,
    /// Body lines in fixed order
    pub lines: Vec<String>,
}

impl SubmissionBlock {
    pub fn from_submission(position: usize, submission: &Submission) -> Self {
        let mut lines = vec![
            format!("Name: {}", submission.name),
            format!("Email: {}", submission.email),
            format!("Mobile: {}", submission.mobile),
            format!(
                "Type: {}",
                submission.kind.map(|k| k.label()).unwrap_or_default()
            ),
        ];

        // Optional lines only appear when something was entered
        if !submission.company_name.is_empty() {
            lines.push(format!("Company: {}", submission.company_name));
        }
        if !submission.capacity.is_empty() {
            lines.push(format!("Capacity (KWP): {}", submission.capacity));
        }
        if !submission.enquiry.is_empty() {
            lines.push(format!("Enquiry: {}", submission.enquiry));
        }

        Self {
            heading: format!("Submission #{position}"),
            lines,
        }
    }
}

/// Blocks for every submission in insertion order, numbered from 1
pub fn document_blocks(submissions: &[Submission]) -> Vec<SubmissionBlock> {
    submissions
        .iter()
        .enumerate()
        .map(|(idx, s)| SubmissionBlock::from_submission(idx + 1, s))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{EnquiryType, FormData};
    use pretty_assertions::assert_eq;

    fn submission(name: &str) -> Submission {
        Submission::new(FormData {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            mobile: "9876543210".to_string(),
            kind: Some(EnquiryType::Residential),
            ..Default::default()
        })
    }

    #[test]
    fn test_required_lines_only() {
        let block = SubmissionBlock::from_submission(1, &submission("Asha"));
        assert_eq!(block.heading, "Submission #1");
        assert_eq!(
            block.lines,
            vec![
                "Name: Asha",
                "Email: asha@example.com",
                "Mobile: 9876543210",
                "Type: Residential",
            ]
        );
    }

    #[test]
    fn test_optional_lines_in_fixed_order() {
        let full = Submission::new(FormData {
            kind: Some(EnquiryType::Industrial),
            company_name: "Sunworks".to_string(),
            capacity: "120".to_string(),
            enquiry: "Rooftop plant for a warehouse".to_string(),
            ..(*submission("Ravi")).clone()
        });
        let block = SubmissionBlock::from_submission(2, &full);
        assert_eq!(
            &block.lines[3..],
            &[
                "Type: Industrial",
                "Company: Sunworks",
                "Capacity (KWP): 120",
                "Enquiry: Rooftop plant for a warehouse",
            ]
        );
    }

    #[test]
    fn test_whitespace_enquiry_still_exported() {
        let spaced = Submission::new(FormData {
            enquiry: " ".to_string(),
            ..(*submission("Ravi")).clone()
        });
        let block = SubmissionBlock::from_submission(1, &spaced);
        assert_eq!(block.lines.last().unwrap(), "Enquiry:  ");
    }

    #[test]
    fn test_company_kept_after_type_change() {
        let changed = Submission::new(FormData {
            kind: Some(EnquiryType::Farms),
            company_name: "Leftover Co".to_string(),
            ..(*submission("Ravi")).clone()
        });
        let block = SubmissionBlock::from_submission(1, &changed);
        assert!(block.lines.contains(&"Company: Leftover Co".to_string()));
    }

    #[test]
    fn test_blocks_numbered_in_insertion_order() {
        let subs = vec![submission("A"), submission("B"), submission("C")];
        let blocks = document_blocks(&subs);
        let headings: Vec<_> = blocks.iter().map(|b| b.heading.as_str()).collect();
        assert_eq!(headings, vec!["Submission #1", "Submission #2", "Submission #3"]);
        assert_eq!(blocks[1].lines[0], "Name: B");
    }

    #[test]
    fn test_no_submissions_no_blocks() {
        assert!(document_blocks(&[]).is_empty());
    }
}
