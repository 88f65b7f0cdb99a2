use std::time::Duration;

use quill_utils::time::{ClockFormat, now_clock};
use quill_webhook::Webhook;
use quill_webhook::reply::reply_from_body;
use tracing::{info, warn};

use crate::state::{Effect, Event, SessionState};

/// Hold applied to successful replies before they are shown.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(3200);

/// Drives one message from the input field to an assistant entry.
#[derive(Clone, Debug)]
pub struct SubmissionPipeline<W> {
    webhook: W,
    reply_delay: Duration,
    clock: ClockFormat,
}

impl<W: Webhook> SubmissionPipeline<W> {
    pub fn new(webhook: W) -> Self {
        Self {
            webhook,
            reply_delay: Duration::ZERO,
            clock: ClockFormat::default(),
        }
    }

    pub fn with_reply_delay(mut self, reply_delay: Duration) -> Self {
        self.reply_delay = reply_delay;
        self
    }

    pub fn with_clock(mut self, clock: ClockFormat) -> Self {
        self.clock = clock;
        self
    }

    pub fn clock(&self) -> ClockFormat {
        self.clock
    }

    /// Send `message` and turn the outcome into the event that completes it.
    ///
    /// Never fails: transport errors become [`Event::RequestFailed`].
    pub async fn resolve(&self, message: &str) -> Event {
        match self.webhook.send(message).await {
            Ok(body) => {
                let text = reply_from_body(&body);
                info!(reply_chars = text.chars().count(), "webhook reply received");

                if !self.reply_delay.is_zero() {
                    tokio::time::sleep(self.reply_delay).await;
                }

                Event::ReplyReceived {
                    text,
                    at: now_clock(self.clock),
                }
            }
            Err(err) => {
                warn!(?err, "webhook request failed");
                Event::RequestFailed {
                    message: Some(err.to_string()),
                    at: now_clock(self.clock),
                }
            }
        }
    }

    /// Run the full lifecycle for `text` against `state`.
    ///
    /// Returns `false` without touching the transcript when `text` is blank.
    pub async fn submit(&self, state: &mut SessionState, text: &str) -> bool {
        state.apply(Event::InputChanged(text.to_owned()));

        let Some(Effect::SendMessage(message)) = state.apply(Event::Submit {
            at: now_clock(self.clock),
        }) else {
            return false;
        };

        let completion = self.resolve(&message).await;
        state.apply(completion);
        true
    }
}
