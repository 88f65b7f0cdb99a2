use anyhow::Context as _;
use quill_core::{Error, SessionState};

use crate::{CommandMeta, CommandOutput};

pub const META: CommandMeta = CommandMeta {
    name: "dump",
    desc: "Prints the transcript as JSON.",
    category: "session",
    usage: "/dump",
};

pub fn dump(state: &SessionState) -> Result<CommandOutput, Error> {
    let json = serde_json::to_string_pretty(state.transcript().entries())
        .context("failed to serialize transcript")?;
    Ok(CommandOutput::Text(json))
}

#[cfg(test)]
mod tests {
    use quill_core::{Event, SessionState};

    use super::dump;
    use crate::CommandOutput;

    #[test]
    fn dumps_entries_as_json_array() {
        let mut state = SessionState::new();
        state.apply(Event::InputChanged("ping".to_owned()));
        state.apply(Event::Submit {
            at: "07:30".to_owned(),
        });

        let CommandOutput::Text(json) = dump(&state).expect("serializes") else {
            panic!("dump never quits");
        };
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(
            value,
            serde_json::json!([{ "role": "user", "text": "ping", "timestamp": "07:30" }])
        );
    }
}
