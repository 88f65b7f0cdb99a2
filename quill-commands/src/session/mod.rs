pub mod dump;
pub mod history;
pub mod render;
