//! Thin JSON GET wrapper.
//!
//! One request, no retries. Non-200 responses are mapped to typed errors so
//! callers can decide whether to degrade or abort.

use reqwest::StatusCode;

use crate::error::{HolicalError, HolicalResult};

const USER_AGENT: &str = concat!("holical/", env!("CARGO_PKG_VERSION"));

pub fn http_client() -> HolicalResult<reqwest::Client> {
    Ok(reqwest::Client::builder().user_agent(USER_AGENT).build()?)
}

/// GET `endpoint` and return the parsed JSON body.
pub async fn get_json(
    client: &reqwest::Client,
    endpoint: &str,
) -> HolicalResult<serde_json::Value> {
    if endpoint.trim().is_empty() {
        return Err(HolicalError::InvalidRequest(
            "Unable to fetch data: no endpoint given".into(),
        ));
    }

    let response = client.get(endpoint).send().await?;
    let status = response.status();
    tracing::debug!(endpoint, status = status.as_u16(), "GET");

    check_status(status, endpoint)?;

    let body = response.bytes().await?;
    serde_json::from_slice(&body)
        .map_err(|e| HolicalError::Parse(format!("Invalid JSON from {endpoint}: {e}")))
}

fn check_status(status: StatusCode, endpoint: &str) -> HolicalResult<()> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::NOT_FOUND => Err(HolicalError::NotFound {
            endpoint: endpoint.to_string(),
        }),
        StatusCode::INTERNAL_SERVER_ERROR => Err(HolicalError::ServerError {
            endpoint: endpoint.to_string(),
        }),
        other => Err(HolicalError::UnexpectedStatus {
            status: other.as_u16(),
            endpoint: endpoint.to_string(),
        }),
    }
}
