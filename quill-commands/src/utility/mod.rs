pub mod help;
pub mod quit;
