//! Response status handling for the completion endpoint.

use crate::error::CompletionError;

/// Pass a successful response through; turn anything else into
/// [`CompletionError::Api`] carrying the upstream body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, CompletionError> {
    let status = resp.status();
    if !status.is_success() {
        let message = resp.text().await.unwrap_or_default();
        tracing::warn!(status = status.as_u16(), "completion API returned an error");
        return Err(CompletionError::Api {
            status: status.as_u16(),
            message,
        });
    }
    Ok(resp)
}
