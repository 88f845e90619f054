//! Form rendering module
//!
//! - `field_renderer`: single field with inline error
//! - `enquiry_form`: the enquiry form with its action buttons

mod enquiry_form;
mod field_renderer;

pub use enquiry_form::draw as draw_enquiry_form;
