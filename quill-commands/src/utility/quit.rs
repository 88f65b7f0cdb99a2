use crate::{CommandMeta, CommandOutput};

pub const META: CommandMeta = CommandMeta {
    name: "quit",
    desc: "Ends the chat session. The transcript is discarded.",
    category: "utility",
    usage: "/quit",
};

pub fn quit() -> CommandOutput {
    CommandOutput::Quit
}
