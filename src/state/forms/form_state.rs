//! Enquiry form data and focus handling

use super::field::{EnquiryType, FieldName};
use serde::{Deserialize, Serialize};

/// Trait for focus movement across a form's rows
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Current values of every input on the enquiry form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormData {
    pub name: String,
    pub email: String,
    pub mobile: String,
    #[serde(rename = "type")]
    pub kind: Option<EnquiryType>,
    pub company_name: String,
    pub capacity: String,
    pub enquiry: String,
}

/// Drop everything that is not an ASCII digit
pub fn strip_non_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

impl FormData {
    /// Text value of a field as it is displayed and exported
    pub fn value(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Mobile => &self.mobile,
            FieldName::Type => self.kind.map(|k| k.label()).unwrap_or(""),
            FieldName::CompanyName => &self.company_name,
            FieldName::Capacity => &self.capacity,
            FieldName::Enquiry => &self.enquiry,
        }
    }

    fn text_mut(&mut self, field: FieldName) -> Option<&mut String> {
        match field {
            FieldName::Name => Some(&mut self.name),
            FieldName::Email => Some(&mut self.email),
            FieldName::Mobile => Some(&mut self.mobile),
            FieldName::CompanyName => Some(&mut self.company_name),
            FieldName::Capacity => Some(&mut self.capacity),
            FieldName::Enquiry => Some(&mut self.enquiry),
            FieldName::Type => None,
        }
    }

    /// Replace a field's value with raw input.
    ///
    /// Values are stored verbatim except capacity, which keeps digits only.
    /// Type accepts an option label; anything else selects nothing.
    pub fn set(&mut self, field: FieldName, raw: &str) {
        match field {
            FieldName::Type => self.kind = raw.parse().ok(),
            FieldName::Capacity => self.capacity = strip_non_digits(raw),
            _ => {
                if let Some(text) = self.text_mut(field) {
                    *text = raw.to_string();
                }
            }
        }
    }

    /// Append a typed character to a text field
    pub fn push_char(&mut self, field: FieldName, c: char) {
        if field == FieldName::Capacity && !c.is_ascii_digit() {
            return;
        }
        if let Some(text) = self.text_mut(field) {
            text.push(c);
        }
    }

    /// Remove the last character from a text field
    pub fn pop_char(&mut self, field: FieldName) {
        if let Some(text) = self.text_mut(field) {
            text.pop();
        }
    }

    pub fn is_industrial(&self) -> bool {
        self.kind == Some(EnquiryType::Industrial)
    }
}

/// Buttons on the form's action row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormButton {
    #[default]
    Submit,
    Reset,
}

impl FormButton {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Submit => Self::Reset,
            Self::Reset => Self::Submit,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Submit => "SUBMIT",
            Self::Reset => "RESET",
        }
    }
}

/// Live enquiry form: values plus focus
#[derive(Debug, Clone, Default)]
pub struct EnquiryForm {
    pub data: FormData,
    pub active_field_index: usize,
    pub selected_button: FormButton,
}

impl EnquiryForm {
    /// Fields currently on screen; company name only shows for Industrial
    pub fn visible_fields(&self) -> Vec<FieldName> {
        FieldName::ALL
            .into_iter()
            .filter(|f| *f != FieldName::CompanyName || self.data.is_industrial())
            .collect()
    }

    /// Focused field, or `None` while the button row is focused
    pub fn focused_field(&self) -> Option<FieldName> {
        self.visible_fields().get(self.active_field_index).copied()
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.focused_field().is_none()
    }

    /// Move focus straight to a field if it is visible
    pub fn focus(&mut self, field: FieldName) {
        if let Some(idx) = self.visible_fields().iter().position(|f| *f == field) {
            self.active_field_index = idx;
        }
    }

    /// Type a character into the focused field
    pub fn input_char(&mut self, c: char) {
        match self.focused_field() {
            Some(FieldName::Type) => {
                if c == ' ' {
                    self.cycle_type_next();
                }
            }
            Some(field) => self.data.push_char(field, c),
            None => {}
        }
    }

    pub fn backspace(&mut self) {
        match self.focused_field() {
            Some(FieldName::Type) => self.data.kind = None,
            Some(field) => self.data.pop_char(field),
            None => {}
        }
    }

    pub fn cycle_type_next(&mut self) {
        self.data.kind = EnquiryType::cycle_next(self.data.kind);
    }

    pub fn cycle_type_prev(&mut self) {
        self.data.kind = EnquiryType::cycle_prev(self.data.kind);
    }

    /// Back to the all-empty initial shape
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Form for EnquiryForm {
    fn field_count(&self) -> usize {
        self.visible_fields().len() + 1 // fields + buttons row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.field_count() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod form_data {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_default_is_all_empty() {
            let data = FormData::default();
            for field in FieldName::ALL {
                assert_eq!(data.value(field), "");
            }
        }

        #[test]
        fn test_set_stores_text_verbatim() {
            let mut data = FormData::default();
            data.set(FieldName::Name, "  Asha  ");
            data.set(FieldName::Mobile, "98-765");
            assert_eq!(data.name, "  Asha  ");
            assert_eq!(data.mobile, "98-765");
        }

        #[test]
        fn test_set_capacity_strips_non_digits() {
            let mut data = FormData::default();
            data.set(FieldName::Capacity, "12a3b");
            assert_eq!(data.capacity, "123");
            data.set(FieldName::Capacity, "4.5 kW");
            assert_eq!(data.capacity, "45");
            data.set(FieldName::Capacity, "abc");
            assert_eq!(data.capacity, "");
        }

        #[test]
        fn test_push_char_on_capacity_ignores_non_digits() {
            let mut data = FormData::default();
            for c in "1x2-3 ".chars() {
                data.push_char(FieldName::Capacity, c);
            }
            assert_eq!(data.capacity, "123");
        }

        #[test]
        fn test_capacity_rejects_non_ascii_digits() {
            let mut data = FormData::default();
            data.set(FieldName::Capacity, "१२3");
            assert_eq!(data.capacity, "3");
        }

        #[test]
        fn test_set_type_parses_label() {
            let mut data = FormData::default();
            data.set(FieldName::Type, "Hotels");
            assert_eq!(data.kind, Some(EnquiryType::Hotels));
            data.set(FieldName::Type, "");
            assert_eq!(data.kind, None);
        }

        #[test]
        fn test_pop_char_on_empty_field_is_noop() {
            let mut data = FormData::default();
            data.pop_char(FieldName::Email);
            assert_eq!(data.email, "");
        }

        #[test]
        fn test_serializes_with_form_keys() {
            let mut data = FormData::default();
            data.set(FieldName::Type, "Industrial");
            data.set(FieldName::CompanyName, "Sunworks");
            let json = serde_json::to_value(&data).unwrap();
            assert_eq!(json["type"], "Industrial");
            assert_eq!(json["companyName"], "Sunworks");
        }
    }

    mod enquiry_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_company_hidden_unless_industrial() {
            let mut form = EnquiryForm::default();
            assert!(!form.visible_fields().contains(&FieldName::CompanyName));
            form.data.kind = Some(EnquiryType::Industrial);
            assert!(form.visible_fields().contains(&FieldName::CompanyName));
        }

        #[test]
        fn test_field_count_includes_buttons_row() {
            let mut form = EnquiryForm::default();
            assert_eq!(form.field_count(), 7);
            form.data.kind = Some(EnquiryType::Industrial);
            assert_eq!(form.field_count(), 8);
        }

        #[test]
        fn test_focus_ring_skips_hidden_company() {
            let mut form = EnquiryForm::default();
            form.focus(FieldName::Type);
            form.next_field();
            assert_eq!(form.focused_field(), Some(FieldName::Capacity));
        }

        #[test]
        fn test_focus_ring_visits_company_for_industrial() {
            let mut form = EnquiryForm::default();
            form.data.kind = Some(EnquiryType::Industrial);
            form.focus(FieldName::Type);
            form.next_field();
            assert_eq!(form.focused_field(), Some(FieldName::CompanyName));
        }

        #[test]
        fn test_next_field_wraps_after_buttons() {
            let mut form = EnquiryForm::default();
            form.prev_field();
            assert!(form.is_buttons_row_active());
            form.next_field();
            assert_eq!(form.focused_field(), Some(FieldName::Name));
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = EnquiryForm::default();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, 6);
        }

        #[test]
        fn test_input_char_edits_focused_field() {
            let mut form = EnquiryForm::default();
            form.focus(FieldName::Email);
            for c in "a@b.io".chars() {
                form.input_char(c);
            }
            form.backspace();
            assert_eq!(form.data.email, "a@b.i");
        }

        #[test]
        fn test_space_on_type_cycles_options() {
            let mut form = EnquiryForm::default();
            form.focus(FieldName::Type);
            form.input_char(' ');
            assert_eq!(form.data.kind, Some(EnquiryType::Commercial));
            form.input_char('x');
            assert_eq!(form.data.kind, Some(EnquiryType::Commercial));
            form.backspace();
            assert_eq!(form.data.kind, None);
        }

        #[test]
        fn test_reset_restores_initial_shape() {
            let mut form = EnquiryForm::default();
            form.data.set(FieldName::Name, "Ravi");
            form.data.set(FieldName::Capacity, "50");
            form.active_field_index = 4;
            form.selected_button = FormButton::Reset;
            form.reset();
            assert_eq!(form.data, FormData::default());
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.selected_button, FormButton::Submit);
        }

        #[test]
        fn test_button_toggle() {
            assert_eq!(FormButton::Submit.toggle(), FormButton::Reset);
            assert_eq!(FormButton::Reset.toggle(), FormButton::Submit);
        }
    }
}
