//! Trait abstractions for the notification and submission collaborators,
//! enabling mocking in tests

use anyhow::Result;
use async_trait::async_trait;

use crate::state::InquirySnapshot;

/// Fire-and-forget user notification (rendered as a toast overlay).
/// The caller never consults a return value.
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    fn notify(&mut self, title: &str, description: &str);
}

/// Destination for a validated inquiry.
///
/// This is the seam where a real backend submission would plug in. The
/// core's contract ends at handing over the snapshot; whatever the sink
/// does with it (and whether it fails) is out of scope for the form.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    async fn submit(&mut self, inquiry: &InquirySnapshot) -> Result<()>;
}
