use std::io::Write;
use std::time::Duration;

use anyhow::Context as _;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::mpsc;
use tracing::{error, info, warn};

use quill_commands::CommandOutput;
use quill_core::{Effect, Event, SessionState, SubmissionPipeline};
use quill_utils::progress::ProgressPhase;
use quill_utils::render::{WELCOME_SUBTITLE, WELCOME_TITLE, entry_line};
use quill_utils::time::now_clock;
use quill_webhook::Webhook;

use crate::events::progress::ProgressView;
use crate::events::submission::spawn_submission;

/// Run one chat session until `/quit`, or until `input` ends and every pending reply has arrived.
///
/// This loop is the only place events are applied to the state. The final state is returned and
/// then discarded by the caller.
pub async fn run_session<R, O, W>(
    progress_interval: Duration,
    pipeline: SubmissionPipeline<W>,
    input: R,
    out: &mut O,
) -> anyhow::Result<SessionState>
where
    R: AsyncBufRead + Unpin,
    O: Write,
    W: Webhook + Clone + 'static,
{
    let (events_tx, mut events_rx) = mpsc::unbounded_channel::<Event>();
    let mut lines = input.lines();
    let mut state = SessionState::new();
    let mut progress = ProgressView::default();
    let mut input_closed = false;

    writeln!(out, "{WELCOME_TITLE}\n{WELCOME_SUBTITLE}").context("failed to write output")?;

    loop {
        if input_closed && !state.is_awaiting_reply() {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if !input_closed => {
                let Some(line) = line.context("failed to read input")? else {
                    input_closed = true;
                    continue;
                };

                if let Some(result) = quill_commands::dispatch(&line, &state) {
                    match result {
                        Ok(CommandOutput::Text(text)) => {
                            writeln!(out, "{text}").context("failed to write output")?;
                        }
                        Ok(CommandOutput::Quit) => break,
                        Err(err) => error!(?err, "command failed"),
                    }
                    continue;
                }

                state.apply(Event::InputChanged(line));
                if let Some(Effect::SendMessage(message)) = state.apply(Event::Submit {
                    at: now_clock(pipeline.clock()),
                }) {
                    if let Some(entry) = state.transcript().last() {
                        writeln!(out, "{}", entry_line(entry)).context("failed to write output")?;
                    }
                    let phase = progress.begin(progress_interval);
                    write_phase(out, phase)?;
                    spawn_submission(pipeline.clone(), message, events_tx.clone());
                }
            }
            Some(event) = events_rx.recv() => {
                state.apply(event);
                if let Some(entry) = state.transcript().last() {
                    writeln!(out, "{}", entry_line(entry)).context("failed to write output")?;
                }
                if !state.is_awaiting_reply() {
                    progress.end();
                }
            }
            phase = progress.next_phase() => write_phase(out, phase)?,
        }
    }

    progress.end();
    if state.is_awaiting_reply() {
        warn!(
            pending = state.in_flight(),
            "session ended with replies still pending"
        );
    }
    info!(entries = state.transcript().len(), "Chat session closed.");
    Ok(state)
}

fn write_phase<O: Write>(out: &mut O, phase: ProgressPhase) -> anyhow::Result<()> {
    writeln!(out, "  {}", phase.label()).context("failed to write output")
}
