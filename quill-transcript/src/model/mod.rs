pub mod chat_entry;
