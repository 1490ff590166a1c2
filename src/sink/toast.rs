//! Toast-backed notification sink

use std::time::{Duration, Instant};

use super::NotificationSink;

/// A single notification shown as an overlay until it expires
#[derive(Debug, Clone)]
pub struct Toast {
    pub title: String,
    pub description: String,
    created_at: Instant,
}

impl Toast {
    /// How long a toast stays on screen
    const LIFETIME: Duration = Duration::from_millis(4000);

    fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= Self::LIFETIME
    }
}

/// Production [`NotificationSink`]: holds the most recent toast for the UI
/// to render. A new notification replaces whatever is currently showing.
#[derive(Debug, Default)]
pub struct ToastNotifier {
    active: Option<Toast>,
}

impl ToastNotifier {
    pub fn active(&self) -> Option<&Toast> {
        self.active.as_ref()
    }

    /// Drop the toast once its lifetime has passed.
    /// Called from the event loop each tick.
    pub fn update(&mut self) {
        if self.active.as_ref().is_some_and(Toast::is_expired) {
            self.active = None;
        }
    }

    /// Dismiss the current toast immediately (user pressed a key)
    pub fn dismiss(&mut self) {
        self.active = None;
    }
}

impl NotificationSink for ToastNotifier {
    fn notify(&mut self, title: &str, description: &str) {
        self.active = Some(Toast::new(title, description));
    }
}
