use std::fmt::Write as _;

use quill_transcript::{ChatEntry, Role};

use crate::formatting::{escape_html, format_message};

pub const WELCOME_TITLE: &str = "Welcome! I'm your AI assistant.";
pub const WELCOME_SUBTITLE: &str = "Ask me anything - I'm here to help!";

/// Id prefix for code blocks inside the assistant entry at `index`.
pub fn entry_id_prefix(index: usize) -> String {
    format!("code-{index}")
}

fn entry_markup(index: usize, entry: &ChatEntry) -> String {
    let (class, body) = match entry.role() {
        Role::User => ("user-message", escape_html(entry.text())),
        Role::Assistant => (
            "ai-message",
            format_message(entry.text(), &entry_id_prefix(index)),
        ),
    };

    format!(
        "<div class=\"chat-message {class}\"><div class=\"message-content\">{body}\
<div class=\"message-time\">{time}</div></div></div>",
        time = escape_html(entry.timestamp()),
    )
}

/// One entry as a plain-text line: `[time] Speaker: text`.
pub fn entry_line(entry: &ChatEntry) -> String {
    format!(
        "[{}] {}: {}",
        entry.timestamp(),
        entry.role().label(),
        entry.text()
    )
}

/// Render the transcript as a chat history list, oldest first.
pub fn transcript_html<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = &'a ChatEntry>,
{
    let mut out = String::from("<div class=\"chat-history\">");
    let mut rendered_any = false;

    for (index, entry) in entries.into_iter().enumerate() {
        out.push_str(&entry_markup(index, entry));
        rendered_any = true;
    }

    if !rendered_any {
        let _ = write!(
            out,
            "<div class=\"welcome-message\"><div>{}</div><div>{}</div></div>",
            escape_html(WELCOME_TITLE),
            escape_html(WELCOME_SUBTITLE),
        );
    }

    out.push_str("</div>");
    out
}
