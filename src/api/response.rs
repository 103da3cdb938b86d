use anyhow::{Result, bail};
use serde::Deserialize;

/// Envelope every Codeforces API call returns.
///
/// `status` is either `"OK"` with a `result`, or `"FAILED"` with a
/// human-readable `comment` saying what went wrong (unknown handle, bad
/// parameter).
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub status: String,
    pub comment: Option<String>,
    pub result: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Unwraps the envelope, surfacing the API's comment on failure.
    pub fn into_result(self) -> Result<T> {
        if self.status == "OK" {
            if let Some(result) = self.result {
                return Ok(result);
            }
            bail!("API response has status OK but carries no result");
        }

        match self.comment {
            Some(comment) => bail!("Codeforces API request failed: {comment}"),
            None => bail!("Codeforces API request failed with status {}", self.status),
        }
    }
}
