pub mod model;
pub mod transcript;

pub use model::chat_entry::{ChatEntry, Role};
pub use transcript::Transcript;
