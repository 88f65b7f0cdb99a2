pub mod progress;
pub mod submission;
