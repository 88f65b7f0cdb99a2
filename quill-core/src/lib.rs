pub mod pipeline;
pub mod state;

use std::time::Duration;

use quill_utils::time::ClockFormat;
use quill_webhook::WebhookClient;

pub use pipeline::{DEFAULT_REPLY_DELAY, SubmissionPipeline};
pub use state::{Effect, Event, SessionState, reduce};

pub type Error = anyhow::Error;

/// Settings shared by the interactive session.
#[derive(Clone, Debug)]
pub struct Data {
    pub webhook: WebhookClient,
    pub reply_delay: Duration,
    pub progress_interval: Duration,
    pub clock: ClockFormat,
}

impl Data {
    pub fn pipeline(&self) -> SubmissionPipeline<WebhookClient> {
        SubmissionPipeline::new(self.webhook.clone())
            .with_reply_delay(self.reply_delay)
            .with_clock(self.clock)
    }
}
