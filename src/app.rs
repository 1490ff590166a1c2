//! Application core and keyboard handling

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::config::TuiConfig;
use crate::platform::SHORTCUT_MODIFIER;
use crate::sink::{LoggingSubmissionSink, SubmissionSink, ToastNotifier};
use crate::state::{AppState, FieldId, Service, SplashState, View};

/// Two Ctrl+C presses within this window quit the app
const QUIT_CHORD_WINDOW: Duration = Duration::from_millis(1000);

/// Main application
pub struct App {
    pub state: AppState,
    pub notifier: ToastNotifier,
    submission: Box<dyn SubmissionSink>,
    pub splash_state: Option<SplashState>,
    /// Feedback shown in the status bar after a clipboard copy
    pub copy_message: Option<String>,
    /// View to land on once the splash finishes
    start_view: View,
    last_ctrl_c: Option<Instant>,
    quit: bool,
}

impl App {
    pub fn new(config: &TuiConfig) -> Self {
        let start_view = config
            .start_view
            .as_deref()
            .and_then(parse_view)
            .unwrap_or_default();
        let skip_splash = config.skip_splash.unwrap_or(false);

        let mut app = Self {
            state: AppState::default(),
            notifier: ToastNotifier::default(),
            submission: Box::new(LoggingSubmissionSink),
            splash_state: None,
            copy_message: None,
            start_view,
            last_ctrl_c: None,
            quit: false,
        };

        if skip_splash {
            app.state.current_view = start_view;
        } else {
            app.state.current_view = View::Splash;
            app.splash_state = Some(SplashState::new());
        }
        app
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Advance the splash animation; swap to the start view when done
    pub fn update_splash(&mut self, terminal_height: u16) {
        let Some(splash) = self.splash_state.as_mut() else {
            return;
        };
        splash.update(terminal_height);
        if splash.is_complete() {
            self.splash_state = None;
            self.state.current_view = self.start_view;
        }
    }

    // --- navigation -----------------------------------------------------

    pub fn navigate(&mut self, view: View) {
        if self.state.current_view == view {
            return;
        }
        let previous = self.state.current_view;
        if previous != View::Splash {
            self.state.view_history.push(previous);
        }
        self.state.current_view = view;
        self.state.scroll_offset = 0;
        self.copy_message = None;
    }

    pub fn go_back(&mut self) {
        let target = self.state.view_history.pop().unwrap_or(View::Home);
        self.state.current_view = target;
        self.state.scroll_offset = 0;
        self.copy_message = None;
    }

    /// Highest useful scroll offset for the current view
    fn max_scroll(&self) -> u16 {
        match self.state.current_view {
            View::About => 16,
            View::Expertise => 12,
            View::Services => 18,
            View::Portfolio => 18,
            View::Testimonials => 24,
            _ => 0,
        }
    }

    /// Mouse-wheel scrolling; forms manage their own focus so the wheel
    /// only moves content views
    pub fn scroll_content_up(&mut self) {
        if !self.state.current_view.is_form_view() {
            self.state.scroll_up();
        }
    }

    pub fn scroll_content_down(&mut self) {
        if !self.state.current_view.is_form_view() {
            let max = self.max_scroll();
            self.state.scroll_down(max);
        }
    }

    // --- clipboard ------------------------------------------------------

    pub fn copy_to_clipboard(&mut self, text: &str, what: &str) {
        match arboard::Clipboard::new().and_then(|mut c| c.set_text(text.to_string())) {
            Ok(()) => self.copy_message = Some(format!("Copied {what}")),
            Err(err) => {
                tracing::warn!("clipboard copy failed: {err}");
                self.copy_message = Some("Copy failed".to_string());
            }
        }
    }

    // --- keyboard -------------------------------------------------------

    pub async fn handle_key(&mut self, key: KeyEvent) {
        // Any key dismisses a showing toast but still gets processed
        self.notifier.dismiss();

        // Double Ctrl+C quits from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            let now = Instant::now();
            if self
                .last_ctrl_c
                .is_some_and(|last| now.duration_since(last) < QUIT_CHORD_WINDOW)
            {
                self.quit = true;
            }
            self.last_ctrl_c = Some(now);
            return;
        }
        self.last_ctrl_c = None;

        if self.state.current_view == View::Splash {
            if let Some(splash) = self.splash_state.as_mut() {
                splash.skip();
            }
            return;
        }

        match self.state.current_view {
            View::GetStarted => self.handle_get_started_key(key).await,
            View::Contact => self.handle_contact_key(key),
            _ => self.handle_content_key(key),
        }
    }

    /// Keys for the static content sections
    fn handle_content_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c @ '1'..='8') => {
                let idx = c as usize - '1' as usize;
                self.navigate(View::SIDEBAR[idx]);
            }
            KeyCode::Char('g') => self.navigate(View::GetStarted),
            KeyCode::Char('c') => self.navigate(View::Contact),
            KeyCode::Char('j') | KeyCode::Down => {
                let max = self.max_scroll();
                self.state.scroll_down(max);
            }
            KeyCode::Char('k') | KeyCode::Up => self.state.scroll_up(),
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    /// Keys for the inline contact form
    fn handle_contact_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(SHORTCUT_MODIFIER) {
            match key.code {
                KeyCode::Char('s') => {
                    self.state.contact.submit(&mut self.notifier);
                    return;
                }
                KeyCode::Char('y') => {
                    self.copy_to_clipboard(crate::content::CONTACT_EMAIL, "email address");
                    return;
                }
                _ => {}
            }
        }

        let active = self.state.contact.active_field();
        match key.code {
            KeyCode::Esc => self.go_back(),
            KeyCode::Tab | KeyCode::Down => self.state.contact.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.contact.prev_field(),
            KeyCode::Enter => {
                if self.state.contact.is_send_button_active() {
                    self.state.contact.submit(&mut self.notifier);
                } else if active == Some(FieldId::Message) {
                    self.state.contact.push_char('\n');
                } else {
                    self.state.contact.next_field();
                }
            }
            KeyCode::Left | KeyCode::Right => {
                let forward = key.code == KeyCode::Right;
                match active {
                    Some(FieldId::ProjectType) => {
                        self.state.contact.project_type =
                            Some(cycle(self.state.contact.project_type, forward));
                    }
                    Some(FieldId::Budget) => {
                        self.state.contact.budget =
                            Some(cycle_budget(self.state.contact.budget, forward));
                    }
                    Some(FieldId::ContactMethod) => self.state.contact.contact_method.toggle(),
                    _ => {}
                }
            }
            KeyCode::Char(' ') if active == Some(FieldId::ContactMethod) => {
                self.state.contact.contact_method.toggle();
            }
            KeyCode::Backspace => self.state.contact.pop_char(),
            KeyCode::Char(c) => self.state.contact.push_char(c),
            _ => {}
        }
    }

    /// Keys for the qualification form, collapsed or editing
    async fn handle_get_started_key(&mut self, key: KeyEvent) {
        if !self.state.inquiry.is_editing() {
            match key.code {
                KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('g') => {
                    self.state.inquiry.expand();
                }
                KeyCode::Esc => self.go_back(),
                KeyCode::Char(c @ '1'..='8') => {
                    let idx = c as usize - '1' as usize;
                    self.navigate(View::SIDEBAR[idx]);
                }
                _ => {}
            }
            return;
        }

        if key.modifiers.contains(SHORTCUT_MODIFIER) && key.code == KeyCode::Char('s') {
            self.submit_inquiry().await;
            return;
        }

        let active = self.state.inquiry.active_field();
        match key.code {
            KeyCode::Esc => self.state.inquiry.cancel(),
            KeyCode::Tab => self.state.inquiry.next_field(),
            KeyCode::BackTab => self.state.inquiry.prev_field(),
            KeyCode::Down => {
                // Within the services checklist the cursor moves first
                if active == Some(FieldId::Services)
                    && self.state.inquiry.service_cursor + 1 < Service::ALL.len()
                {
                    self.state.inquiry.service_cursor += 1;
                } else {
                    self.state.inquiry.next_field();
                }
            }
            KeyCode::Up => {
                if active == Some(FieldId::Services) && self.state.inquiry.service_cursor > 0 {
                    self.state.inquiry.service_cursor -= 1;
                } else {
                    self.state.inquiry.prev_field();
                }
            }
            KeyCode::Enter => {
                if self.state.inquiry.is_buttons_row_active() {
                    if self.state.inquiry.selected_button == 0 {
                        self.state.inquiry.cancel();
                    } else {
                        self.submit_inquiry().await;
                    }
                } else if active == Some(FieldId::Message) {
                    self.state.inquiry.push_char('\n');
                } else {
                    self.state.inquiry.next_field();
                }
            }
            KeyCode::Left | KeyCode::Right => {
                let forward = key.code == KeyCode::Right;
                if self.state.inquiry.is_buttons_row_active() {
                    self.state.inquiry.next_button();
                    return;
                }
                match active {
                    Some(FieldId::ProjectType) => {
                        let next = cycle(self.state.inquiry.project_type, forward);
                        self.state.inquiry.set_project_type(Some(next));
                    }
                    Some(FieldId::Budget) => {
                        let next = cycle_budget(self.state.inquiry.budget, forward);
                        self.state.inquiry.set_budget(Some(next));
                    }
                    Some(FieldId::ContactMethod) => {
                        let mut method = self.state.inquiry.contact_method;
                        method.toggle();
                        self.state.inquiry.set_contact_method(method);
                    }
                    Some(FieldId::Timeline) => {
                        let months = self.state.inquiry.timeline;
                        let next = if forward {
                            months.saturating_add(1)
                        } else {
                            months.saturating_sub(1)
                        };
                        self.state.inquiry.set_timeline(next);
                    }
                    _ => {}
                }
            }
            KeyCode::Char(' ') => match active {
                Some(FieldId::Services) => {
                    let service = Service::ALL[self.state.inquiry.service_cursor];
                    let include = !self.state.inquiry.services.contains(&service);
                    self.state.inquiry.toggle_service(service, include);
                }
                Some(FieldId::Newsletter) => {
                    let next = !self.state.inquiry.newsletter;
                    self.state.inquiry.set_newsletter(next);
                }
                Some(FieldId::ContactMethod) => {
                    let mut method = self.state.inquiry.contact_method;
                    method.toggle();
                    self.state.inquiry.set_contact_method(method);
                }
                _ => self.state.inquiry.push_char(' '),
            },
            KeyCode::Backspace => self.state.inquiry.pop_char(),
            KeyCode::Char(c) => self.state.inquiry.push_char(c),
            _ => {}
        }
    }

    async fn submit_inquiry(&mut self) {
        self.state
            .inquiry
            .submit(&mut self.notifier, self.submission.as_mut())
            .await;
    }
}

fn parse_view(name: &str) -> Option<View> {
    match name.to_ascii_lowercase().as_str() {
        "home" => Some(View::Home),
        "about" => Some(View::About),
        "expertise" => Some(View::Expertise),
        "services" => Some(View::Services),
        "portfolio" => Some(View::Portfolio),
        "testimonials" => Some(View::Testimonials),
        "contact" => Some(View::Contact),
        "get-started" | "getstarted" => Some(View::GetStarted),
        _ => None,
    }
}

fn cycle(current: Option<crate::state::ProjectType>, forward: bool) -> crate::state::ProjectType {
    use crate::state::ProjectType;
    match current {
        Some(p) if forward => p.next(),
        Some(p) => p.prev(),
        None if forward => ProjectType::ALL[0],
        None => ProjectType::ALL[ProjectType::ALL.len() - 1],
    }
}

fn cycle_budget(
    current: Option<crate::state::BudgetRange>,
    forward: bool,
) -> crate::state::BudgetRange {
    use crate::state::BudgetRange;
    match current {
        Some(b) if forward => b.next(),
        Some(b) => b.prev(),
        None if forward => BudgetRange::ALL[0],
        None => BudgetRange::ALL[BudgetRange::ALL.len() - 1],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{FormPhase, ProjectType};
    use tokio_test::block_on;

    fn app() -> App {
        App::new(&TuiConfig {
            skip_splash: Some(true),
            start_view: None,
        })
    }

    fn press(app: &mut App, code: KeyCode) {
        block_on(app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn press_with(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
        block_on(app.handle_key(KeyEvent::new(code, modifiers)));
    }

    #[test]
    fn test_skip_splash_starts_on_home() {
        let app = app();
        assert_eq!(app.state.current_view, View::Home);
        assert!(app.splash_state.is_none());
    }

    #[test]
    fn test_start_view_from_config() {
        let app = App::new(&TuiConfig {
            skip_splash: Some(true),
            start_view: Some("contact".to_string()),
        });
        assert_eq!(app.state.current_view, View::Contact);
    }

    #[test]
    fn test_splash_shown_by_default() {
        let app = App::new(&TuiConfig::default());
        assert_eq!(app.state.current_view, View::Splash);
        assert!(app.splash_state.is_some());
    }

    #[test]
    fn test_key_during_splash_skips_it() {
        let mut app = App::new(&TuiConfig::default());
        press(&mut app, KeyCode::Char('x'));
        app.update_splash(24);
        assert_eq!(app.state.current_view, View::Home);
        assert!(app.splash_state.is_none());
    }

    #[test]
    fn test_number_keys_jump_to_sections() {
        let mut app = app();
        press(&mut app, KeyCode::Char('5'));
        assert_eq!(app.state.current_view, View::Portfolio);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.state.current_view, View::Home);
    }

    #[test]
    fn test_esc_walks_back_through_history() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.current_view, View::About);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.state.current_view, View::Home);
    }

    #[test]
    fn test_double_ctrl_c_quits() {
        let mut app = app();
        press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!app.should_quit());
        press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit());
    }

    #[test]
    fn test_other_key_breaks_quit_chord() {
        let mut app = app();
        press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        press(&mut app, KeyCode::Char('j'));
        press_with(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_scroll_clamps_at_view_limit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        for _ in 0..100 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.state.scroll_offset, 16);
        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.state.scroll_offset, 15);
    }

    #[test]
    fn test_navigation_resets_scroll() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('j'));
        assert_eq!(app.state.scroll_offset, 1);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.state.scroll_offset, 0);
    }

    mod get_started {
        use super::*;

        fn editing_app() -> App {
            let mut app = app();
            press(&mut app, KeyCode::Char('g'));
            press(&mut app, KeyCode::Enter);
            assert!(app.state.inquiry.is_editing());
            app
        }

        #[test]
        fn test_enter_expands_collapsed_form() {
            let mut app = app();
            press(&mut app, KeyCode::Char('g'));
            assert_eq!(app.state.current_view, View::GetStarted);
            assert_eq!(app.state.inquiry.phase, FormPhase::Collapsed);
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.inquiry.phase, FormPhase::Editing);
        }

        #[test]
        fn test_typing_fills_the_active_field() {
            let mut app = editing_app();
            press(&mut app, KeyCode::Char('A'));
            press(&mut app, KeyCode::Char('d'));
            press(&mut app, KeyCode::Char('a'));
            assert_eq!(app.state.inquiry.name, "Ada");
            press(&mut app, KeyCode::Backspace);
            assert_eq!(app.state.inquiry.name, "Ad");
        }

        #[test]
        fn test_right_arrow_cycles_project_type() {
            let mut app = editing_app();
            for _ in 0..4 {
                press(&mut app, KeyCode::Tab);
            }
            assert_eq!(
                app.state.inquiry.active_field(),
                Some(FieldId::ProjectType)
            );
            press(&mut app, KeyCode::Right);
            assert_eq!(
                app.state.inquiry.project_type,
                Some(ProjectType::WebDevelopment)
            );
            press(&mut app, KeyCode::Right);
            assert_eq!(app.state.inquiry.project_type, Some(ProjectType::MobileApp));
        }

        #[test]
        fn test_space_toggles_service_under_cursor() {
            let mut app = editing_app();
            for _ in 0..8 {
                press(&mut app, KeyCode::Tab);
            }
            assert_eq!(app.state.inquiry.active_field(), Some(FieldId::Services));
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Char(' '));
            assert!(app.state.inquiry.services.contains(&Service::ALL[1]));
            press(&mut app, KeyCode::Char(' '));
            assert!(app.state.inquiry.services.is_empty());
        }

        #[test]
        fn test_esc_cancels_editing_back_to_collapsed() {
            let mut app = editing_app();
            press(&mut app, KeyCode::Char('x'));
            press(&mut app, KeyCode::Esc);
            assert_eq!(app.state.inquiry.phase, FormPhase::Collapsed);
            assert_eq!(app.state.inquiry.name, "");
        }

        #[test]
        fn test_submit_shortcut_with_empty_form_stores_errors() {
            let mut app = editing_app();
            press_with(&mut app, KeyCode::Char('s'), SHORTCUT_MODIFIER);
            assert!(app.state.inquiry.has_errors());
            assert!(app.state.inquiry.is_editing());
            assert!(app.notifier.active().is_none());
        }
    }

    mod contact {
        use super::*;
        use crate::state::{ContactMethod, SEND_BUTTON_ROW};

        fn contact_app() -> App {
            let mut app = app();
            press(&mut app, KeyCode::Char('c'));
            assert_eq!(app.state.current_view, View::Contact);
            app
        }

        #[test]
        fn test_enter_on_send_button_submits_and_toasts() {
            let mut app = contact_app();
            for _ in 0..=SEND_BUTTON_ROW - 1 {
                press(&mut app, KeyCode::Tab);
            }
            assert!(app.state.contact.is_send_button_active());
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.notifier.active().unwrap().title, "Form submitted!");
        }

        #[test]
        fn test_space_toggles_contact_method() {
            let mut app = contact_app();
            for _ in 0..5 {
                press(&mut app, KeyCode::Tab);
            }
            assert_eq!(
                app.state.contact.active_field(),
                Some(FieldId::ContactMethod)
            );
            press(&mut app, KeyCode::Char(' '));
            assert_eq!(app.state.contact.contact_method, ContactMethod::Phone);
        }

        #[test]
        fn test_typing_y_stays_in_text_field() {
            let mut app = contact_app();
            press(&mut app, KeyCode::Char('y'));
            assert_eq!(app.state.contact.name, "y");
        }
    }
}
