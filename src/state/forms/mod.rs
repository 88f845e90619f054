//! Form domain layer
//!
//! Field descriptors, the live form values and focus movement.

mod field;
mod form_state;

pub use field::{EnquiryType, FieldName};
pub use form_state::{EnquiryForm, Form, FormButton, FormData};
