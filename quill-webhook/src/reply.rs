//! Turning a webhook response body into the text shown to the user.
//!
//! The endpoint may emit several newline-delimited JSON fragments (progress
//! logs, partial results). Only the last non-empty line carries the reply.

use serde_json::{Map, Value};
use tracing::debug;

pub const NO_RESPONSE_TEXT: &str = "No response from AI.";
pub const GENERIC_ERROR_TEXT: &str = "Error occurred.";

/// Parse the last non-empty line of `body` as JSON, or an empty object if that fails.
pub fn parse_last_line(body: &str) -> Value {
    let Some(line) = body.lines().rev().find(|line| !line.is_empty()) else {
        return Value::Object(Map::new());
    };

    match serde_json::from_str(line) {
        Ok(value) => value,
        Err(source) => {
            debug!(?source, "webhook reply is not valid JSON; treating as empty");
            Value::Object(Map::new())
        }
    }
}

/// Pick the reply text: `ai_response`, then `response`, then the fallback text.
pub fn extract_reply(payload: &Value) -> String {
    ["ai_response", "response"]
        .iter()
        .find_map(|field| payload.get(field).and_then(Value::as_str))
        .map(str::to_owned)
        .unwrap_or_else(|| NO_RESPONSE_TEXT.to_owned())
}

/// Shortcut for `extract_reply(&parse_last_line(body))`.
pub fn reply_from_body(body: &str) -> String {
    extract_reply(&parse_last_line(body))
}

/// Text of the assistant entry recorded for a failed submission.
pub fn error_text(message: Option<&str>) -> String {
    match message.map(str::trim).filter(|message| !message.is_empty()) {
        Some(message) => format!("Error: {message}"),
        None => GENERIC_ERROR_TEXT.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::{
        GENERIC_ERROR_TEXT, NO_RESPONSE_TEXT, error_text, extract_reply, parse_last_line,
        reply_from_body,
    };

    #[test]
    fn uses_last_line_of_multi_line_body() {
        let body = "{\"status\":\"partial\"}\n{\"ai_response\":\"hello\"}";
        assert_eq!(reply_from_body(body), "hello");
    }

    #[test]
    fn skips_trailing_blank_lines() {
        let body = "{\"response\":\"first\"}\n{\"response\":\"last\"}\n\n";
        assert_eq!(reply_from_body(body), "last");
    }

    #[test]
    fn invalid_json_falls_back_to_default_reply() {
        assert_eq!(parse_last_line("not json\nstill not json"), json!({}));
        assert_eq!(reply_from_body("not json\nstill not json"), NO_RESPONSE_TEXT);
    }

    #[test]
    fn empty_body_is_empty_object() {
        assert_eq!(parse_last_line(""), json!({}));
        assert_eq!(parse_last_line("\n\n"), json!({}));
        assert_eq!(reply_from_body(""), NO_RESPONSE_TEXT);
    }

    #[test]
    fn only_the_last_line_is_considered() {
        // An earlier valid line does not rescue an invalid final line.
        let body = "{\"ai_response\":\"early\"}\n{broken";
        assert_eq!(reply_from_body(body), NO_RESPONSE_TEXT);
    }

    #[test]
    fn ai_response_wins_over_response() {
        let payload = json!({ "response": "plain", "ai_response": "preferred" });
        assert_eq!(extract_reply(&payload), "preferred");
    }

    #[test]
    fn non_string_fields_are_ignored() {
        assert_eq!(
            extract_reply(&json!({ "ai_response": 42, "response": "fallback" })),
            "fallback"
        );
        assert_eq!(
            extract_reply(&json!({ "ai_response": null, "response": ["x"] })),
            NO_RESPONSE_TEXT
        );
        assert_eq!(extract_reply(&json!(["ai_response"])), NO_RESPONSE_TEXT);
        assert_eq!(extract_reply(&json!("bare string")), NO_RESPONSE_TEXT);
    }

    #[test]
    fn empty_string_reply_is_kept() {
        assert_eq!(extract_reply(&json!({ "ai_response": "" })), "");
    }

    #[test]
    fn error_text_prefixes_message() {
        assert_eq!(error_text(Some("timeout")), "Error: timeout");
        assert_eq!(error_text(Some("   ")), GENERIC_ERROR_TEXT);
        assert_eq!(error_text(None), GENERIC_ERROR_TEXT);
    }
}
