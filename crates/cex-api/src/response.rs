//! Shared handling of service responses

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Decode a successful response body, or classify the failure by status.
///
/// `resource` names what was requested; it is carried by `NotFound` so the
/// log line says which lookup failed.
pub(crate) async fn handle_response<T: DeserializeOwned>(
    response: reqwest::Response,
    resource: &str,
) -> Result<T, ApiError> {
    let status = response.status();

    if status.is_success() {
        let body = response.json::<T>().await?;
        return Ok(body);
    }

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(resource.to_string()));
    }

    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Status {
        status: status.as_u16(),
        body,
    })
}
