//! Inline landing-page contact form
//!
//! The lightweight variant of the qualification form: no field-level
//! validation, submission always reports success.

use super::catalog::{BudgetRange, ContactMethod, FieldId, ProjectType};
use crate::sink::NotificationSink;

/// Fields of the inline form, in display order
pub const CONTACT_FIELD_ORDER: [FieldId; 7] = [
    FieldId::Name,
    FieldId::Email,
    FieldId::Company,
    FieldId::ProjectType,
    FieldId::Budget,
    FieldId::ContactMethod,
    FieldId::Message,
];

/// Focus index of the Send button
pub const SEND_BUTTON_ROW: usize = CONTACT_FIELD_ORDER.len();

#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub message: String,
    pub project_type: Option<ProjectType>,
    pub budget: Option<BudgetRange>,
    pub contact_method: ContactMethod,
    pub active_field_index: usize,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_field(&self) -> Option<FieldId> {
        CONTACT_FIELD_ORDER.get(self.active_field_index).copied()
    }

    pub fn is_send_button_active(&self) -> bool {
        self.active_field_index == SEND_BUTTON_ROW
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % (SEND_BUTTON_ROW + 1);
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = SEND_BUTTON_ROW;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn push_char(&mut self, c: char) {
        if let Some(field) = self.active_text_field_mut() {
            field.push(c);
        }
    }

    pub fn pop_char(&mut self) {
        if let Some(field) = self.active_text_field_mut() {
            field.pop();
        }
    }

    fn active_text_field_mut(&mut self) -> Option<&mut String> {
        match self.active_field()? {
            FieldId::Name => Some(&mut self.name),
            FieldId::Email => Some(&mut self.email),
            FieldId::Company => Some(&mut self.company),
            FieldId::Message => Some(&mut self.message),
            _ => None,
        }
    }

    /// Submit unconditionally: notify and clear the form. This variant
    /// carries no validation, success is always reported.
    pub fn submit(&mut self, notifier: &mut dyn NotificationSink) {
        notifier.notify("Form submitted!", "We'll get back to you soon.");
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MockNotificationSink;

    #[test]
    fn test_new_starts_on_first_field() {
        let form = ContactForm::new();
        assert_eq!(form.active_field(), Some(FieldId::Name));
        assert_eq!(form.contact_method, ContactMethod::Email);
    }

    #[test]
    fn test_field_cycle_wraps_through_send_button() {
        let mut form = ContactForm::new();
        for _ in 0..=SEND_BUTTON_ROW {
            form.next_field();
        }
        assert_eq!(form.active_field_index, 0);

        form.prev_field();
        assert!(form.is_send_button_active());
    }

    #[test]
    fn test_push_char_edits_active_field() {
        let mut form = ContactForm::new();
        form.push_char('H');
        form.push_char('i');
        assert_eq!(form.name, "Hi");
        form.pop_char();
        assert_eq!(form.name, "H");
    }

    #[test]
    fn test_submit_always_notifies_and_resets() {
        let mut form = ContactForm::new();
        form.push_char('A');
        form.project_type = Some(ProjectType::Other);

        let mut notifier = MockNotificationSink::new();
        notifier
            .expect_notify()
            .times(1)
            .withf(|title, desc| title == "Form submitted!" && desc == "We'll get back to you soon.")
            .return_const(());

        form.submit(&mut notifier);

        assert_eq!(form.name, "");
        assert!(form.project_type.is_none());
    }

    #[test]
    fn test_submit_on_empty_form_still_succeeds() {
        let mut form = ContactForm::new();
        let mut notifier = MockNotificationSink::new();
        notifier.expect_notify().times(1).return_const(());
        form.submit(&mut notifier);
        assert_eq!(form.active_field_index, 0);
    }
}
