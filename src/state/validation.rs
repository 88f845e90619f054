//! Field validation for the enquiry form

use super::forms::{FieldName, FormData};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

/// Field name → message; an absent key means the field is valid
pub type ErrorMap = BTreeMap<FieldName, String>;

lazy_static! {
    // ASCII only: `\d` would also accept other Unicode digits
    static ref MOBILE_PATTERN: Regex = Regex::new(r"^[0-9]{10}$").unwrap();
}

/// Optional rules layered on top of the base checks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationRules {
    /// Treat an empty capacity as an error
    pub require_capacity: bool,
}

/// Check every field and collect all failures; rules never short-circuit
pub fn validate(data: &FormData, rules: ValidationRules) -> ErrorMap {
    let mut errors = ErrorMap::new();

    if data.name.trim().is_empty() {
        errors.insert(FieldName::Name, "Name is required".to_string());
    }

    if data.email.trim().is_empty() {
        errors.insert(FieldName::Email, "Email is required".to_string());
    }

    if data.mobile.trim().is_empty() {
        errors.insert(FieldName::Mobile, "Mobile number is required".to_string());
    } else if !MOBILE_PATTERN.is_match(&data.mobile) {
        errors.insert(FieldName::Mobile, "Mobile must be 10 digits".to_string());
    }

    if data.kind.is_none() {
        errors.insert(FieldName::Type, "Please select a type".to_string());
    }

    if data.is_industrial() && data.company_name.trim().is_empty() {
        errors.insert(
            FieldName::CompanyName,
            "Company name is required for Industrial type".to_string(),
        );
    }

    if rules.require_capacity && data.capacity.is_empty() {
        errors.insert(FieldName::Capacity, "Capacity is required".to_string());
    }

    errors
}

/// Keys of the failing fields, comma separated in display order
pub fn failed_fields(errors: &ErrorMap) -> String {
    errors
        .keys()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
