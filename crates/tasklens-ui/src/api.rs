use serde::de::DeserializeOwned;
use tasklens_core::api::{AnalyzeRequest, AnalyzeResponse, SuggestResponse};
use thiserror::Error;

/// Scoring backend root. The hosted instance lives elsewhere; local
/// development runs the backend on this port.
pub const API_BASE: &str = "http://127.0.0.1:8000/api/tasks";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Non-success status. The display string is the raw response body,
    /// which is surfaced to the user verbatim.
    #[error("{body}")]
    Server { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Network error: could not decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

pub async fn analyze(request: &AnalyzeRequest) -> Result<AnalyzeResponse, ApiError> {
    post_json("/analyze/", request).await
}

pub async fn suggest(request: &AnalyzeRequest) -> Result<SuggestResponse, ApiError> {
    post_json("/suggest/", request).await
}

async fn post_json<R>(path: &str, request: &AnalyzeRequest) -> Result<R, ApiError>
where
    R: DeserializeOwned,
{
    let url = format!("{API_BASE}{path}");
    let response = reqwest::Client::new()
        .post(&url)
        .json(request)
        .send()
        .await?;

    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(ApiError::Server {
            status: status.as_u16(),
            body,
        });
    }

    Ok(serde_json::from_str(&body)?)
}
