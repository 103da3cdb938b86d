use anyhow::{Context, Result};
use reqwest::Client;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::sleep;

use crate::config::settings::ApiSettings;

/// Spaces consecutive requests by a fixed delay.
///
/// The first request goes out immediately; every later one waits its turn,
/// including requests fired concurrently.
struct RequestSpacer {
    delay: Duration,
    request_count: usize,
}

impl RequestSpacer {
    fn new(delay_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            request_count: 0,
        }
    }

    async fn wait(&mut self) {
        if self.request_count > 0 {
            sleep(self.delay).await;
        }
        self.request_count += 1;
    }
}

/// HTTP client with built-in request spacing.
///
/// `get` takes `&self`, so services can issue fetches through `tokio::join!`
/// while the shared spacer keeps the request rate polite.
pub struct RateLimitedClient {
    client: Client,
    spacer: Mutex<RequestSpacer>,
}

impl RateLimitedClient {
    pub fn new(user_agent: &str, timeout_secs: u64, rate_limit_ms: u64) -> Result<Self> {
        let client = Self::build_client(user_agent, timeout_secs)?;

        Ok(Self {
            client,
            spacer: Mutex::new(RequestSpacer::new(rate_limit_ms)),
        })
    }

    pub fn from_settings(settings: &ApiSettings) -> Result<Self> {
        Self::new(
            settings.user_agent,
            settings.timeout_secs,
            settings.rate_limit_ms,
        )
    }

    pub async fn get(&self, url: &str) -> Result<reqwest::Response> {
        self.spacer.lock().await.wait().await;
        self.send_get_request(url).await
    }

    fn build_client(user_agent: &str, timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .user_agent(user_agent)
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    async fn send_get_request(&self, url: &str) -> Result<reqwest::Response> {
        self.client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {url}"))
    }
}
