//! Application state definitions

use super::{ContactForm, InquiryForm};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Splash screen with logo animation
    Splash,
    #[default]
    Home,
    About,
    Expertise,
    Services,
    Portfolio,
    Testimonials,
    Contact,
    GetStarted,
}

impl View {
    /// Views reachable from the sidebar, in order
    pub const SIDEBAR: [Self; 8] = [
        Self::Home,
        Self::About,
        Self::Expertise,
        Self::Services,
        Self::Portfolio,
        Self::Testimonials,
        Self::Contact,
        Self::GetStarted,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Splash => "Splash",
            Self::Home => "Home",
            Self::About => "About",
            Self::Expertise => "Expertise",
            Self::Services => "Services",
            Self::Portfolio => "Portfolio",
            Self::Testimonials => "Testimonials",
            Self::Contact => "Contact",
            Self::GetStarted => "Get Started",
        }
    }

    /// Whether the view hosts text input
    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::Contact | Self::GetStarted)
    }

    pub fn sidebar_index(&self) -> Option<usize> {
        Self::SIDEBAR.iter().position(|v| v == self)
    }
}

/// Top-level mutable state shared across views
#[derive(Debug, Default)]
pub struct AppState {
    pub current_view: View,
    /// Views visited, most recent last; Esc walks back through these
    pub view_history: Vec<View>,
    /// Scroll position of the current content view
    pub scroll_offset: u16,
    /// Lead-qualification form (Get Started)
    pub inquiry: InquiryForm,
    /// Inline landing contact form
    pub contact: ContactForm,
}

impl AppState {
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    pub fn scroll_down(&mut self, max: u16) {
        self.scroll_offset = (self.scroll_offset + 1).min(max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod view {
        use super::*;

        #[test]
        fn test_default_is_home() {
            assert_eq!(View::default(), View::Home);
        }

        #[test]
        fn test_sidebar_index_matches_order() {
            for (idx, view) in View::SIDEBAR.iter().enumerate() {
                assert_eq!(view.sidebar_index(), Some(idx));
            }
        }

        #[test]
        fn test_splash_is_not_in_sidebar() {
            assert_eq!(View::Splash.sidebar_index(), None);
        }

        #[test]
        fn test_form_views() {
            assert!(View::Contact.is_form_view());
            assert!(View::GetStarted.is_form_view());
            assert!(!View::Home.is_form_view());
        }
    }

    mod scrolling {
        use super::*;

        #[test]
        fn test_scroll_up_saturates_at_zero() {
            let mut state = AppState::default();
            state.scroll_up();
            assert_eq!(state.scroll_offset, 0);
        }

        #[test]
        fn test_scroll_down_clamps_to_max() {
            let mut state = AppState::default();
            for _ in 0..10 {
                state.scroll_down(4);
            }
            assert_eq!(state.scroll_offset, 4);
        }
    }
}
