//! External microservice proxy endpoint

use axum::extract::State;
use tracing::{info, warn};

use crate::{error::ApiError, state::AppState};

/// Response body of `/microservice` when the upstream answered
pub const MICROSERVICE_BODY: &str = "External service!";

/// Call the configured external service.
///
/// Any upstream answer counts as reachable; only transport failures
/// (connection refused, timeout) become a `503`.
pub async fn microservice(State(state): State<AppState>) -> Result<&'static str, ApiError> {
    let response = state
        .http_client
        .get(&*state.microservice_url)
        .send()
        .await
        .map_err(|e| {
            warn!(url = %state.microservice_url, error = %e, "External service unreachable");
            ApiError::from(e)
        })?;

    info!(
        url = %state.microservice_url,
        status = %response.status(),
        "External service responded"
    );

    Ok(MICROSERVICE_BODY)
}
