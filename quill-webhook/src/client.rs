use std::env;
use std::future::Future;

use anyhow::Context as _;
use serde::Serialize;
use tracing::{debug, warn};

/// Endpoint used when `WEBHOOK_URL` is unset or blank.
pub const DEFAULT_WEBHOOK_URL: &str = "http://localhost:5678/webhook/bot";

/// Anything that can deliver one chat message and hand back the raw reply body.
pub trait Webhook: Send + Sync {
    fn send(&self, message: &str) -> impl Future<Output = anyhow::Result<String>> + Send;
}

#[derive(Serialize)]
struct OutboundMessage<'a> {
    message: &'a str,
}

#[derive(Clone, Debug)]
pub struct WebhookClient {
    client: reqwest::Client,
    url: String,
}

impl WebhookClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }

    pub fn from_env() -> Self {
        let url = env::var("WEBHOOK_URL")
            .ok()
            .map(|value| value.trim().to_owned())
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| DEFAULT_WEBHOOK_URL.to_owned());

        Self::new(url)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Webhook for WebhookClient {
    async fn send(&self, message: &str) -> anyhow::Result<String> {
        debug!(url = %self.url, chars = message.chars().count(), "posting chat message");

        let response = self
            .client
            .post(&self.url)
            .json(&OutboundMessage { message })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(url = %self.url, %status, "webhook returned a non-success status");
            anyhow::bail!("webhook responded with status {status}");
        }

        response
            .text()
            .await
            .context("failed to read webhook response body")
    }
}

#[cfg(test)]
mod tests {
    use super::{DEFAULT_WEBHOOK_URL, OutboundMessage, WebhookClient};

    #[test]
    fn outbound_body_has_single_message_field() {
        let body = serde_json::to_value(OutboundMessage { message: "hi there" })
            .expect("serializes");
        assert_eq!(body, serde_json::json!({ "message": "hi there" }));
    }

    #[test]
    fn new_keeps_url_verbatim() {
        let client = WebhookClient::new("http://example.test/hook");
        assert_eq!(client.url(), "http://example.test/hook");
        assert_ne!(client.url(), DEFAULT_WEBHOOK_URL);
    }
}
