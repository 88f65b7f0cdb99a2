pub mod client;
pub mod reply;

pub use client::{DEFAULT_WEBHOOK_URL, Webhook, WebhookClient};
