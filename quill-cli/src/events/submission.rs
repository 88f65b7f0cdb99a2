use quill_core::{Event, SubmissionPipeline};
use quill_webhook::Webhook;
use tokio::sync::mpsc;
use tracing::debug;

/// Resolve `message` in the background and post the completion back to the session loop.
///
/// Completions are delivered in the order requests finish, not the order they were sent.
pub fn spawn_submission<W>(
    pipeline: SubmissionPipeline<W>,
    message: String,
    events: mpsc::UnboundedSender<Event>,
) where
    W: Webhook + 'static,
{
    tokio::spawn(async move {
        let event = pipeline.resolve(&message).await;
        if events.send(event).is_err() {
            debug!("session closed before the reply arrived");
        }
    });
}
