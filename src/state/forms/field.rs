//! Form field descriptors and the enquiry type select

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifies one input on the enquiry form
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldName {
    Name,
    Email,
    Mobile,
    Type,
    CompanyName,
    Capacity,
    Enquiry,
}

impl FieldName {
    /// Every field in display order
    pub const ALL: [FieldName; 7] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Mobile,
        FieldName::Type,
        FieldName::CompanyName,
        FieldName::Capacity,
        FieldName::Enquiry,
    ];

    /// Key used in error maps and serialized form data
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Mobile => "mobile",
            Self::Type => "type",
            Self::CompanyName => "companyName",
            Self::Capacity => "capacity",
            Self::Enquiry => "enquiry",
        }
    }

    /// Label shown on the field border
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Your Name *",
            Self::Email => "Email Address *",
            Self::Mobile => "Phone Number *",
            Self::Type => "Type *",
            Self::CompanyName => "Company Name *",
            Self::Capacity => "Capacity (kW)*",
            Self::Enquiry => "Customer Enquiry",
        }
    }

    /// Text shown while the field is empty and unfocused
    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Type => "Select Type",
            Self::Capacity => "Enter capacity in kW",
            _ => "(empty)",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Self::Enquiry)
    }

    pub fn is_select(&self) -> bool {
        matches!(self, Self::Type)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Kind of premises the enquiry is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnquiryType {
    Commercial,
    Residential,
    Hospital,
    Industrial,
    Hotels,
    Farms,
    Others,
}

impl EnquiryType {
    /// Options in the order the select presents them
    pub const OPTIONS: [EnquiryType; 7] = [
        EnquiryType::Commercial,
        EnquiryType::Residential,
        EnquiryType::Hospital,
        EnquiryType::Industrial,
        EnquiryType::Hotels,
        EnquiryType::Farms,
        EnquiryType::Others,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Commercial => "Commercial",
            Self::Residential => "Residential",
            Self::Hospital => "Hospital",
            Self::Industrial => "Industrial",
            Self::Hotels => "Hotels",
            Self::Farms => "Farms",
            Self::Others => "Others",
        }
    }

    /// Step forward through the select, wrapping through the empty choice
    pub fn cycle_next(current: Option<Self>) -> Option<Self> {
        match current {
            None => Some(Self::OPTIONS[0]),
            Some(kind) => {
                let idx = Self::OPTIONS.iter().position(|o| *o == kind).unwrap_or(0);
                Self::OPTIONS.get(idx + 1).copied()
            }
        }
    }

    /// Step backward through the select, wrapping through the empty choice
    pub fn cycle_prev(current: Option<Self>) -> Option<Self> {
        match current {
            None => Self::OPTIONS.last().copied(),
            Some(kind) => {
                let idx = Self::OPTIONS.iter().position(|o| *o == kind).unwrap_or(0);
                idx.checked_sub(1).map(|i| Self::OPTIONS[i])
            }
        }
    }
}

impl fmt::Display for EnquiryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown enquiry type: {0}")]
pub struct UnknownEnquiryType(pub String);

impl FromStr for EnquiryType {
    type Err = UnknownEnquiryType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::OPTIONS
            .iter()
            .find(|o| o.label() == s)
            .copied()
            .ok_or_else(|| UnknownEnquiryType(s.to_string()))
    }
}
