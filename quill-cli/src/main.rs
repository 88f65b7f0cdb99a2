mod events;
mod session;

use std::env;
use std::time::Duration;

use tokio::io::BufReader;
use tracing::info;
use tracing_subscriber::Layer;
use tracing_subscriber::filter::filter_fn;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use rustls::crypto::ring::default_provider;

use quill_core::{DEFAULT_REPLY_DELAY, Data};
use quill_utils::progress::DEFAULT_PROGRESS_INTERVAL;
use quill_utils::time::ClockFormat;
use quill_webhook::WebhookClient;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(filter_fn(|metadata| {
            let target = metadata.target();

            let within_info_level = *metadata.level() <= tracing::Level::INFO;
            if !within_info_level {
                return false;
            }

            !(target.starts_with("hyper") || target.starts_with("reqwest::connect"))
        }));

    tracing_subscriber::registry().with(fmt_layer).init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();

    let data = load_data();
    info!(
        webhook_url = %data.webhook.url(),
        reply_delay = ?data.reply_delay,
        progress_interval = ?data.progress_interval,
        "Chat session configured."
    );

    session::run_session(
        data.progress_interval,
        data.pipeline(),
        BufReader::new(tokio::io::stdin()),
        &mut std::io::stdout(),
    )
    .await?;
    Ok(())
}

fn load_data() -> Data {
    let reply_delay_ms = env_u64("REPLY_DELAY_MS", duration_millis(DEFAULT_REPLY_DELAY));
    let progress_interval_ms = env_u64(
        "PROGRESS_INTERVAL_MS",
        duration_millis(DEFAULT_PROGRESS_INTERVAL),
    );

    Data {
        webhook: WebhookClient::from_env(),
        reply_delay: Duration::from_millis(reply_delay_ms),
        progress_interval: Duration::from_millis(progress_interval_ms),
        clock: ClockFormat::from_24h(env_bool("CLOCK_24H", true)),
    }
}

fn duration_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

fn env_bool(key: &str, default: bool) -> bool {
    match env::var(key) {
        Ok(value) => matches!(
            value.trim().to_ascii_lowercase().as_str(),
            "1" | "true" | "yes" | "on"
        ),
        Err(_) => default,
    }
}

fn env_u64(key: &str, default: u64) -> u64 {
    match env::var(key) {
        Ok(value) => value.trim().parse::<u64>().unwrap_or(default),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::duration_millis;

    #[test]
    fn duration_millis_saturates_instead_of_truncating() {
        assert_eq!(duration_millis(Duration::from_millis(3200)), 3200);
        assert_eq!(duration_millis(Duration::MAX), u64::MAX);
    }
}
