//! Logging submission sink

use anyhow::Result;
use async_trait::async_trait;

use super::SubmissionSink;
use crate::state::InquirySnapshot;

/// Default [`SubmissionSink`]: records the validated inquiry in the
/// application log. There is no backend yet, so a logged snapshot is the
/// whole submission.
#[derive(Debug, Default)]
pub struct LoggingSubmissionSink;

#[async_trait]
impl SubmissionSink for LoggingSubmissionSink {
    async fn submit(&mut self, inquiry: &InquirySnapshot) -> Result<()> {
        let payload = serde_json::to_string(inquiry)?;
        tracing::info!(target: "studio_tui::submission", %payload, "inquiry submitted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::InquiryForm;

    #[test]
    fn test_submit_succeeds_for_any_snapshot() {
        let snapshot = InquiryForm::new().snapshot();
        let mut sink = LoggingSubmissionSink;
        let result = tokio_test::block_on(sink.submit(&snapshot));
        assert!(result.is_ok());
    }
}
