//! Qualification form state, validation, and submit lifecycle

use std::collections::{BTreeMap, BTreeSet};
use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use serde::Serialize;

use super::catalog::{BudgetRange, ContactMethod, FieldId, ProjectType, Service};
use crate::sink::{NotificationSink, SubmissionSink};

/// Timeline slider bounds (months)
pub const TIMELINE_MAX: u8 = 24;
pub const TIMELINE_DEFAULT: u8 = 3;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\S+@\S+\.\S+").expect("static email pattern"));

/// Per-field validation messages. Absence of a key means the field is
/// currently valid. Recomputed wholesale on every validation pass.
pub type ValidationErrors = BTreeMap<FieldId, String>;

/// Lifecycle of the expandable form: a "Get Started" button when
/// collapsed, the full form while editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Collapsed,
    Editing,
}

/// Order in which fields receive focus. The buttons row (Cancel/Submit)
/// sits after the last field.
pub const FIELD_ORDER: [FieldId; 12] = [
    FieldId::Name,
    FieldId::Email,
    FieldId::Company,
    FieldId::Website,
    FieldId::ProjectType,
    FieldId::Budget,
    FieldId::Timeline,
    FieldId::StartDate,
    FieldId::Services,
    FieldId::ContactMethod,
    FieldId::Message,
    FieldId::Newsletter,
];

/// Focus index of the buttons row
pub const BUTTONS_ROW: usize = FIELD_ORDER.len();

/// Validated form snapshot handed to the submission sink
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InquirySnapshot {
    pub name: String,
    pub email: String,
    pub company: String,
    pub website: String,
    pub project_type: String,
    pub budget: String,
    pub timeline_months: u8,
    pub start_date: Option<NaiveDate>,
    pub contact_method: String,
    pub message: String,
    pub services: Vec<String>,
    pub newsletter: bool,
}

/// The qualification form: one instance per mounted form, created with
/// defaults on expansion and reset atomically on cancel or accepted submit
#[derive(Debug, Clone)]
pub struct InquiryForm {
    pub phase: FormPhase,
    pub name: String,
    pub email: String,
    pub company: String,
    pub website: String,
    pub message: String,
    pub project_type: Option<ProjectType>,
    pub budget: Option<BudgetRange>,
    pub timeline: u8,
    pub start_date: String,
    pub contact_method: ContactMethod,
    pub services: BTreeSet<Service>,
    pub newsletter: bool,
    errors: ValidationErrors,
    /// Index into [`FIELD_ORDER`], or [`BUTTONS_ROW`]
    pub active_field_index: usize,
    /// Which button is selected on the buttons row (0=Cancel, 1=Submit)
    pub selected_button: usize,
    /// Highlighted entry within the services checklist
    pub service_cursor: usize,
}

impl InquiryForm {
    pub fn new() -> Self {
        Self {
            phase: FormPhase::Collapsed,
            name: String::new(),
            email: String::new(),
            company: String::new(),
            website: String::new(),
            message: String::new(),
            project_type: None,
            budget: None,
            timeline: TIMELINE_DEFAULT,
            start_date: String::new(),
            contact_method: ContactMethod::default(),
            services: BTreeSet::new(),
            newsletter: false,
            errors: ValidationErrors::new(),
            active_field_index: 0,
            selected_button: 1,
            service_cursor: 0,
        }
    }

    /// Restore every field to its documented default and clear errors
    pub fn reset(&mut self) {
        let phase = self.phase;
        *self = Self::new();
        self.phase = phase;
    }

    /// Collapsed -> Editing: mount a fresh form
    pub fn expand(&mut self) {
        *self = Self::new();
        self.phase = FormPhase::Editing;
    }

    /// Editing -> Collapsed without submitting
    pub fn cancel(&mut self) {
        self.reset();
        self.phase = FormPhase::Collapsed;
    }

    pub fn is_editing(&self) -> bool {
        self.phase == FormPhase::Editing
    }

    // --- focus handling -------------------------------------------------

    pub fn active_field(&self) -> Option<FieldId> {
        FIELD_ORDER.get(self.active_field_index).copied()
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == BUTTONS_ROW
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % (BUTTONS_ROW + 1);
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = BUTTONS_ROW;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % 2;
    }

    pub fn prev_button(&mut self) {
        self.next_button();
    }

    // --- field mutations ------------------------------------------------
    //
    // Each mutation touches exactly one field and clears that field's
    // validation entry; no cross-field side effects.

    pub fn set_text(&mut self, id: FieldId, value: impl Into<String>) {
        let value = value.into();
        match id {
            FieldId::Name => self.name = value,
            FieldId::Email => self.email = value,
            FieldId::Company => self.company = value,
            FieldId::Website => self.website = value,
            FieldId::StartDate => self.start_date = value,
            FieldId::Message => self.message = value,
            // Not a free-text field
            _ => return,
        }
        self.errors.remove(&id);
    }

    pub fn set_project_type(&mut self, value: Option<ProjectType>) {
        self.project_type = value;
        self.errors.remove(&FieldId::ProjectType);
    }

    pub fn set_budget(&mut self, value: Option<BudgetRange>) {
        self.budget = value;
        self.errors.remove(&FieldId::Budget);
    }

    pub fn set_contact_method(&mut self, value: ContactMethod) {
        self.contact_method = value;
        self.errors.remove(&FieldId::ContactMethod);
    }

    /// Clamped to [0, TIMELINE_MAX]
    pub fn set_timeline(&mut self, months: u8) {
        self.timeline = months.min(TIMELINE_MAX);
        self.errors.remove(&FieldId::Timeline);
    }

    pub fn set_newsletter(&mut self, subscribed: bool) {
        self.newsletter = subscribed;
        self.errors.remove(&FieldId::Newsletter);
    }

    /// Add or remove a catalog service; no-op if the set already matches
    pub fn toggle_service(&mut self, service: Service, include: bool) {
        if include {
            self.services.insert(service);
        } else {
            self.services.remove(&service);
        }
        self.errors.remove(&FieldId::Services);
    }

    /// Append a character to the active free-text field
    pub fn push_char(&mut self, c: char) {
        let Some(id) = self.active_field() else {
            return;
        };
        if let Some(field) = self.text_field_mut(id) {
            field.push(c);
            self.errors.remove(&id);
        }
    }

    /// Remove the last character from the active free-text field
    pub fn pop_char(&mut self) {
        let Some(id) = self.active_field() else {
            return;
        };
        if let Some(field) = self.text_field_mut(id) {
            field.pop();
            self.errors.remove(&id);
        }
    }

    fn text_field_mut(&mut self, id: FieldId) -> Option<&mut String> {
        match id {
            FieldId::Name => Some(&mut self.name),
            FieldId::Email => Some(&mut self.email),
            FieldId::Company => Some(&mut self.company),
            FieldId::Website => Some(&mut self.website),
            FieldId::StartDate => Some(&mut self.start_date),
            FieldId::Message => Some(&mut self.message),
            _ => None,
        }
    }

    // --- validation -----------------------------------------------------

    /// Recompute the full error map from scratch. Every rule is evaluated;
    /// failures are reported together rather than short-circuiting.
    pub fn validate(&self) -> ValidationErrors {
        let mut errors = ValidationErrors::new();
        if self.name.is_empty() {
            errors.insert(FieldId::Name, "Name is required".to_string());
        }
        if self.email.is_empty() {
            errors.insert(FieldId::Email, "Email is required".to_string());
        } else if !EMAIL_PATTERN.is_match(&self.email) {
            errors.insert(FieldId::Email, "Email is invalid".to_string());
        }
        if self.project_type.is_none() {
            errors.insert(FieldId::ProjectType, "Project type is required".to_string());
        }
        if self.budget.is_none() {
            errors.insert(FieldId::Budget, "Budget range is required".to_string());
        }
        if self.message.is_empty() {
            errors.insert(FieldId::Message, "Project details are required".to_string());
        }
        if self.services.is_empty() {
            errors.insert(
                FieldId::Services,
                "Please select at least one service".to_string(),
            );
        }
        errors
    }

    /// Stored message for a field from the last failed submit, if any
    pub fn error(&self, id: FieldId) -> Option<&str> {
        self.errors.get(&id).map(String::as_str)
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    // --- submission -----------------------------------------------------

    /// Validate and, if clean, hand the snapshot to the submission sink,
    /// notify the user, and collapse back to defaults. On failure the
    /// fields stay untouched and the errors are stored for display.
    ///
    /// Returns true when the submission was accepted.
    pub async fn submit(
        &mut self,
        notifier: &mut dyn NotificationSink,
        sink: &mut dyn SubmissionSink,
    ) -> bool {
        let errors = self.validate();
        if !errors.is_empty() {
            self.errors = errors;
            return false;
        }

        let snapshot = self.snapshot();
        // Sink outcome is out of scope for the form; log and move on
        if let Err(err) = sink.submit(&snapshot).await {
            tracing::warn!("submission sink failed: {err:#}");
        }
        notifier.notify(
            "Form Submitted Successfully",
            "We've received your message and will get back to you soon!",
        );
        self.reset();
        self.phase = FormPhase::Collapsed;
        true
    }

    /// Current field values in their serialized shape
    pub fn snapshot(&self) -> InquirySnapshot {
        InquirySnapshot {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            website: self.website.clone(),
            project_type: self
                .project_type
                .map(|p| p.wire().to_string())
                .unwrap_or_default(),
            budget: self.budget.map(|b| b.wire().to_string()).unwrap_or_default(),
            timeline_months: self.timeline,
            start_date: NaiveDate::parse_from_str(&self.start_date, "%Y-%m-%d").ok(),
            contact_method: self.contact_method.wire().to_string(),
            message: self.message.clone(),
            services: self.services.iter().map(|s| s.label().to_string()).collect(),
            newsletter: self.newsletter,
        }
    }
}

impl Default for InquiryForm {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{MockNotificationSink, MockSubmissionSink};
    use pretty_assertions::assert_eq;

    fn filled_form() -> InquiryForm {
        let mut form = InquiryForm::new();
        form.phase = FormPhase::Editing;
        form.set_text(FieldId::Name, "Ada");
        form.set_text(FieldId::Email, "ada@x.com");
        form.set_project_type(Some(ProjectType::WebDevelopment));
        form.set_budget(Some(BudgetRange::From10kTo25k));
        form.set_text(FieldId::Message, "Build a site");
        form.toggle_service(Service::UiUxDesign, true);
        form
    }

    fn accepting_sinks() -> (MockNotificationSink, MockSubmissionSink) {
        let mut notifier = MockNotificationSink::new();
        notifier.expect_notify().times(1).return_const(());
        let mut sink = MockSubmissionSink::new();
        sink.expect_submit().times(1).returning(|_| Ok(()));
        (notifier, sink)
    }

    mod defaults {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_has_documented_defaults() {
            let form = InquiryForm::new();
            assert_eq!(form.phase, FormPhase::Collapsed);
            assert_eq!(form.name, "");
            assert_eq!(form.timeline, TIMELINE_DEFAULT);
            assert_eq!(form.contact_method, ContactMethod::Email);
            assert!(form.services.is_empty());
            assert!(!form.newsletter);
            assert!(!form.has_errors());
        }

        #[test]
        fn test_expand_transitions_to_editing_with_fresh_fields() {
            let mut form = filled_form();
            form.expand();
            assert_eq!(form.phase, FormPhase::Editing);
            assert_eq!(form.name, "");
            assert_eq!(form.timeline, TIMELINE_DEFAULT);
        }

        #[test]
        fn test_cancel_collapses_and_resets() {
            let mut form = filled_form();
            form.cancel();
            assert_eq!(form.phase, FormPhase::Collapsed);
            assert_eq!(form.name, "");
            assert!(form.services.is_empty());
        }
    }

    mod validation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_form_reports_all_six_failures() {
            let errors = InquiryForm::new().validate();
            assert_eq!(errors.len(), 6);
            assert_eq!(errors[&FieldId::Name], "Name is required");
            assert_eq!(errors[&FieldId::Email], "Email is required");
            assert_eq!(errors[&FieldId::ProjectType], "Project type is required");
            assert_eq!(errors[&FieldId::Budget], "Budget range is required");
            assert_eq!(errors[&FieldId::Message], "Project details are required");
            assert_eq!(
                errors[&FieldId::Services],
                "Please select at least one service"
            );
        }

        #[test]
        fn test_malformed_email_is_invalid_not_required() {
            let mut form = InquiryForm::new();
            form.set_text(FieldId::Email, "not-an-email");
            assert_eq!(form.validate()[&FieldId::Email], "Email is invalid");
        }

        #[test]
        fn test_email_without_dot_after_at_is_invalid() {
            let mut form = InquiryForm::new();
            form.set_text(FieldId::Email, "ada@example");
            assert_eq!(form.validate()[&FieldId::Email], "Email is invalid");
        }

        #[test]
        fn test_wellformed_email_passes() {
            let mut form = InquiryForm::new();
            form.set_text(FieldId::Email, "ada@x.com");
            assert!(!form.validate().contains_key(&FieldId::Email));
        }

        #[test]
        fn test_optional_fields_are_never_rejected() {
            let errors = filled_form().validate();
            assert!(errors.is_empty());
            for id in [
                FieldId::Company,
                FieldId::Website,
                FieldId::StartDate,
                FieldId::ContactMethod,
                FieldId::Timeline,
                FieldId::Newsletter,
            ] {
                assert!(!errors.contains_key(&id));
            }
        }

        #[test]
        fn test_mutation_clears_only_that_fields_error() {
            let mut form = InquiryForm::new();
            let (mut notifier, mut sink) = (MockNotificationSink::new(), MockSubmissionSink::new());
            assert!(!tokio_test::block_on(form.submit(&mut notifier, &mut sink)));
            assert!(form.error(FieldId::Name).is_some());
            assert!(form.error(FieldId::Email).is_some());

            form.push_char('A');
            assert!(form.error(FieldId::Name).is_none());
            assert!(form.error(FieldId::Email).is_some());
        }
    }

    mod services {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_toggle_round_trip_restores_original_set() {
            let mut form = InquiryForm::new();
            form.toggle_service(Service::BackendDevelopment, true);
            let before = form.services.clone();

            form.toggle_service(Service::DevOps, true);
            form.toggle_service(Service::DevOps, false);

            assert_eq!(form.services, before);
        }

        #[test]
        fn test_toggle_on_twice_keeps_single_entry() {
            let mut form = InquiryForm::new();
            form.toggle_service(Service::DevOps, true);
            form.toggle_service(Service::DevOps, true);
            assert_eq!(form.services.len(), 1);
            assert!(form.services.contains(&Service::DevOps));
        }

        #[test]
        fn test_toggle_off_absent_service_is_noop() {
            let mut form = InquiryForm::new();
            form.toggle_service(Service::DevOps, false);
            assert!(form.services.is_empty());
        }
    }

    mod timeline {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_set_timeline_clamps_to_max() {
            let mut form = InquiryForm::new();
            form.set_timeline(200);
            assert_eq!(form.timeline, TIMELINE_MAX);
        }

        #[test]
        fn test_in_range_values_pass_through() {
            let mut form = InquiryForm::new();
            for months in 0..=TIMELINE_MAX {
                form.set_timeline(months);
                assert_eq!(form.timeline, months);
            }
        }
    }

    mod focus {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_field_wraps_past_buttons_row() {
            let mut form = InquiryForm::new();
            for _ in 0..=BUTTONS_ROW {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_from_start_lands_on_buttons() {
            let mut form = InquiryForm::new();
            form.prev_field();
            assert!(form.is_buttons_row_active());
            assert!(form.active_field().is_none());
        }

        #[test]
        fn test_push_char_on_buttons_row_is_noop() {
            let mut form = InquiryForm::new();
            form.active_field_index = BUTTONS_ROW;
            form.push_char('x');
            assert_eq!(form.name, "");
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_rejected_submit_keeps_fields_and_stays_editing() {
            let mut form = InquiryForm::new();
            form.expand();
            form.set_text(FieldId::Name, "Ada");

            let mut notifier = MockNotificationSink::new();
            let mut sink = MockSubmissionSink::new();
            let accepted = tokio_test::block_on(form.submit(&mut notifier, &mut sink));

            assert!(!accepted);
            assert_eq!(form.phase, FormPhase::Editing);
            assert_eq!(form.name, "Ada");
            assert_eq!(form.validate().len(), 5);
            assert!(form.has_errors());
        }

        #[test]
        fn test_accepted_submit_notifies_once_resets_and_collapses() {
            let mut form = filled_form();
            let (mut notifier, mut sink) = accepting_sinks();

            let accepted = tokio_test::block_on(form.submit(&mut notifier, &mut sink));

            assert!(accepted);
            assert_eq!(form.phase, FormPhase::Collapsed);
            assert_eq!(form.name, "");
            assert_eq!(form.timeline, TIMELINE_DEFAULT);
            assert!(form.services.is_empty());
            assert!(!form.has_errors());
        }

        #[test]
        fn test_accepted_submit_passes_snapshot_to_sink() {
            let mut form = filled_form();
            let mut notifier = MockNotificationSink::new();
            notifier.expect_notify().times(1).return_const(());
            let mut sink = MockSubmissionSink::new();
            sink.expect_submit()
                .times(1)
                .withf(|snapshot| {
                    snapshot.name == "Ada"
                        && snapshot.email == "ada@x.com"
                        && snapshot.project_type == "web-development"
                        && snapshot.budget == "10k-25k"
                        && snapshot.services == vec!["UI/UX Design".to_string()]
                })
                .returning(|_| Ok(()));

            assert!(tokio_test::block_on(form.submit(&mut notifier, &mut sink)));
        }

        #[test]
        fn test_sink_failure_still_counts_as_success() {
            let mut form = filled_form();
            let mut notifier = MockNotificationSink::new();
            notifier.expect_notify().times(1).return_const(());
            let mut sink = MockSubmissionSink::new();
            sink.expect_submit()
                .times(1)
                .returning(|_| Err(anyhow::anyhow!("wire down")));

            assert!(tokio_test::block_on(form.submit(&mut notifier, &mut sink)));
            assert_eq!(form.phase, FormPhase::Collapsed);
        }
    }

    mod snapshot {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_start_date_parses_iso_input() {
            let mut form = filled_form();
            form.set_text(FieldId::StartDate, "2026-09-01");
            let snapshot = form.snapshot();
            assert_eq!(
                snapshot.start_date,
                NaiveDate::from_ymd_opt(2026, 9, 1)
            );
        }

        #[test]
        fn test_unparseable_start_date_becomes_none() {
            let mut form = filled_form();
            form.set_text(FieldId::StartDate, "next spring");
            assert_eq!(form.snapshot().start_date, None);
        }

        #[test]
        fn test_snapshot_serializes_to_json() {
            let snapshot = filled_form().snapshot();
            let json = serde_json::to_string(&snapshot).unwrap();
            assert!(json.contains("\"web-development\""));
            assert!(json.contains("\"timeline_months\":3"));
        }
    }
}
