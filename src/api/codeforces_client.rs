use crate::api::response::ApiResponse;
use crate::config::settings::ApiSettings;
use crate::domain::models::{Problem, ProblemsetPayload, RatingChange, Submission, UserInfo};
use crate::http::RateLimitedClient;
use anyhow::{Context, Result};
use log::info;
use serde::de::DeserializeOwned;
use urlencoding::encode;

/// Codeforces API client
pub struct CodeforcesClient {
    base_url: String,
    client: RateLimitedClient,
}

impl CodeforcesClient {
    /// Create a new Codeforces API client
    pub fn new(settings: &ApiSettings) -> Result<Self> {
        let client = RateLimitedClient::from_settings(settings)?;
        Ok(Self {
            base_url: settings.base_url.to_string(),
            client,
        })
    }

    /// Fetch a user's public profile
    pub async fn user_info(&self, handle: &str) -> Result<UserInfo> {
        let url = self.build_method_url("user.info", "handles", handle);
        info!("Fetching profile for {}", handle);

        let users: Vec<UserInfo> = self.get_api(&url).await?;
        users
            .into_iter()
            .next()
            .with_context(|| format!("API returned no profile for handle {}", handle))
    }

    /// Fetch a user's rating history, oldest contest first
    pub async fn user_rating(&self, handle: &str) -> Result<Vec<RatingChange>> {
        let url = self.build_method_url("user.rating", "handle", handle);
        info!("Fetching rating history for {}", handle);

        self.get_api(&url).await
    }

    /// Fetch a user's submissions, most recent first
    pub async fn user_status(&self, handle: &str) -> Result<Vec<Submission>> {
        let url = self.build_method_url("user.status", "handle", handle);
        info!("Fetching submissions for {}", handle);

        self.get_api(&url).await
    }

    /// Fetch the full problemset catalog
    pub async fn problemset_problems(&self) -> Result<Vec<Problem>> {
        let url = format!("{}/problemset.problems", self.base_url);
        info!("Fetching problemset catalog");

        let payload: ProblemsetPayload = self.get_api(&url).await?;
        Ok(payload.problems)
    }

    // --- Helper Methods ---

    fn build_method_url(&self, method: &str, param: &str, handle: &str) -> String {
        format!("{}/{}?{}={}", self.base_url, method, param, encode(handle))
    }

    /// Runs a GET against the API and unwraps the response envelope.
    ///
    /// The body is parsed even on non-2xx responses because the API reports
    /// errors as a FAILED envelope with an HTTP 400, and its comment is far
    /// more useful than the bare status code.
    async fn get_api<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self.client.get(url).await?;
        let status = response.status();
        let body = response
            .text()
            .await
            .context("Failed to read API response body")?;

        let envelope: ApiResponse<T> = serde_json::from_str(&body)
            .with_context(|| format!("Unexpected API response (HTTP {})", status))?;
        envelope.into_result()
    }
}
