use quill_core::SessionState;
use quill_utils::render::entry_line;

use crate::{CommandMeta, CommandOutput};

pub const META: CommandMeta = CommandMeta {
    name: "history",
    desc: "Prints the transcript as plain text.",
    category: "session",
    usage: "/history",
};

pub fn history(state: &SessionState) -> CommandOutput {
    let transcript = state.transcript();
    if transcript.is_empty() {
        return CommandOutput::Text("No messages yet.".to_owned());
    }

    let lines: Vec<String> = transcript.iter().map(entry_line).collect();

    CommandOutput::Text(lines.join("\n"))
}
