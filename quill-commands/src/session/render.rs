use quill_core::SessionState;
use quill_utils::render::transcript_html;

use crate::{CommandMeta, CommandOutput};

pub const META: CommandMeta = CommandMeta {
    name: "render",
    desc: "Prints the transcript as HTML markup.",
    category: "session",
    usage: "/render",
};

pub fn render(state: &SessionState) -> CommandOutput {
    CommandOutput::Text(transcript_html(state.transcript()))
}

#[cfg(test)]
mod tests {
    use quill_core::{Event, SessionState};

    use super::render;
    use crate::CommandOutput;

    #[test]
    fn renders_assistant_markup() {
        let mut state = SessionState::new();
        state.apply(Event::InputChanged("q".to_owned()));
        state.apply(Event::Submit {
            at: "10:00".to_owned(),
        });
        state.apply(Event::ReplyReceived {
            text: "use `cargo`".to_owned(),
            at: "10:01".to_owned(),
        });

        let CommandOutput::Text(html) = render(&state) else {
            panic!("render never quits");
        };
        assert!(html.contains("<code class=\"inline-code\">cargo</code>"));
        assert!(html.starts_with("<div class=\"chat-history\">"));
    }
}
