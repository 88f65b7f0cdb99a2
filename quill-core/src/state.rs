//! Session state as explicit `(state, event) -> state'` transitions.
//!
//! The transcript inside [`SessionState`] is only ever appended to, and only
//! from [`reduce`]. Timestamps arrive on the events so the transition stays pure.

use quill_transcript::{ChatEntry, Transcript};
use quill_webhook::reply::error_text;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    transcript: Transcript,
    pending_input: String,
    in_flight: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    InputChanged(String),
    Submit { at: String },
    ReplyReceived { text: String, at: String },
    RequestFailed { message: Option<String>, at: String },
}

/// Work the caller must perform after a transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    SendMessage(String),
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn pending_input(&self) -> &str {
        &self.pending_input
    }

    /// Number of submissions still waiting for a reply.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.in_flight > 0
    }

    /// Apply `event` in place and return the resulting effect, if any.
    pub fn apply(&mut self, event: Event) -> Option<Effect> {
        let (next, effect) = reduce(std::mem::take(self), event);
        *self = next;
        effect
    }
}

pub fn reduce(mut state: SessionState, event: Event) -> (SessionState, Option<Effect>) {
    match event {
        Event::InputChanged(text) => {
            state.pending_input = text;
            (state, None)
        }
        Event::Submit { at } => {
            if state.pending_input.trim().is_empty() {
                return (state, None);
            }

            let message = std::mem::take(&mut state.pending_input);
            state.transcript.push(ChatEntry::user(message.clone(), at));
            state.in_flight += 1;
            (state, Some(Effect::SendMessage(message)))
        }
        Event::ReplyReceived { text, at } => {
            state.transcript.push(ChatEntry::assistant(text, at));
            state.in_flight = state.in_flight.saturating_sub(1);
            (state, None)
        }
        Event::RequestFailed { message, at } => {
            state
                .transcript
                .push(ChatEntry::assistant(error_text(message.as_deref()), at));
            state.in_flight = state.in_flight.saturating_sub(1);
            (state, None)
        }
    }
}
