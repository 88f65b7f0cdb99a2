/// Chat message to markup conversion.
pub mod formatting;
/// Single source of truth for the local command prefix.
pub const COMMAND_PREFIX: char = '/';
/// Decorative progress phases shown while a reply is pending.
pub mod progress;
/// Transcript to HTML rendering.
pub mod render;
/// Shared time helpers.
pub mod time;
