pub mod session;
pub mod utility;

use quill_core::{Error, SessionState};
use quill_utils::COMMAND_PREFIX;
use tracing::debug;

pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::help::META,
    utility::quit::META,
    session::history::META,
    session::render::META,
    session::dump::META,
];

/// What the terminal loop should do with a command result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutput {
    Text(String),
    Quit,
}

/// Split `/name args` into `("name", "args")`. Plain chat lines return `None`.
pub fn parse(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim().strip_prefix(COMMAND_PREFIX)?;
    let (name, args) = match rest.split_once(char::is_whitespace) {
        Some((name, args)) => (name, args.trim()),
        None => (rest, ""),
    };

    if name.is_empty() { None } else { Some((name, args)) }
}

pub fn run(name: &str, args: &str, state: &SessionState) -> Result<CommandOutput, Error> {
    debug!(command = name, "running local command");

    match name.to_ascii_lowercase().as_str() {
        "help" => Ok(utility::help::help(args)),
        "quit" | "exit" => Ok(utility::quit::quit()),
        "history" => Ok(session::history::history(state)),
        "render" => Ok(session::render::render(state)),
        "dump" => session::dump::dump(state),
        other => Ok(CommandOutput::Text(format!(
            "Unknown command `{COMMAND_PREFIX}{other}`. Try `{COMMAND_PREFIX}help`."
        ))),
    }
}

/// Run `line` when it is a command; `None` means it should be sent as chat.
pub fn dispatch(line: &str, state: &SessionState) -> Option<Result<CommandOutput, Error>> {
    let (name, args) = parse(line)?;
    Some(run(name, args, state))
}

#[cfg(test)]
mod tests {
    use quill_core::SessionState;

    use super::{COMMANDS, CommandOutput, dispatch, parse};

    #[test]
    fn parses_command_lines() {
        assert_eq!(parse("/help"), Some(("help", "")));
        assert_eq!(parse("  /help  session "), Some(("help", "session")));
        assert_eq!(parse("hello /help"), None);
        assert_eq!(parse("/"), None);
        assert_eq!(parse("plain text"), None);
    }

    #[test]
    fn chat_lines_are_not_dispatched() {
        assert!(dispatch("what is rust?", &SessionState::new()).is_none());
    }

    #[test]
    fn unknown_commands_point_to_help() {
        let output = dispatch("/nope", &SessionState::new())
            .expect("is a command")
            .expect("runs");
        assert_eq!(
            output,
            CommandOutput::Text("Unknown command `/nope`. Try `/help`.".to_owned())
        );
    }

    #[test]
    fn quit_and_exit_end_the_session() {
        let state = SessionState::new();
        for line in ["/quit", "/exit", "/QUIT"] {
            let output = dispatch(line, &state).expect("command").expect("runs");
            assert_eq!(output, CommandOutput::Quit);
        }
    }

    #[test]
    fn command_names_are_unique() {
        let mut names: Vec<&str> = COMMANDS.iter().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), COMMANDS.len());
    }
}
