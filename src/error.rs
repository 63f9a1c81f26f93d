//! API error taxonomy and response mapping.
//!
//! Three cases, all handled per-request and none fatal to the process:
//! - invalid input date -> 400 with an informative fixed message
//! - no matching calendar entry -> 404
//! - upstream/transport failure -> 500; full detail is logged server-side,
//!   only a generic message is sent to the caller

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::calendar::CalendarError;

pub const INVALID_DATE_MSG: &str = "Invalid date format. Please use YYYY-MM-DD.";
pub const NO_MATCH_MSG: &str = "No matching date found in the Hijri calendar.";
pub const UPSTREAM_MSG: &str = "Failed to fetch data from the Aladhan API.";

/// Error returned by the lookup handler.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The `date` query parameter did not parse as a `YYYY-MM-DD` date.
    #[error("invalid date format")]
    InvalidDate,

    /// The upstream month calendar had no entry for the requested date.
    #[error("no matching date in the Hijri calendar")]
    NoMatchingDate,

    /// The upstream call failed; the cause is logged, not exposed.
    #[error(transparent)]
    Upstream(#[from] CalendarError),
}

/// JSON error body: `{ "error": "..." }`.
#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidDate => (StatusCode::BAD_REQUEST, INVALID_DATE_MSG),
            ApiError::NoMatchingDate => (StatusCode::NOT_FOUND, NO_MATCH_MSG),
            ApiError::Upstream(cause) => {
                tracing::error!(error = %cause, "Upstream calendar request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, UPSTREAM_MSG)
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn invalid_date_maps_to_400_with_fixed_message() {
        let response = ApiError::InvalidDate.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": INVALID_DATE_MSG })
        );
    }

    #[tokio::test]
    async fn no_match_maps_to_404() {
        let response = ApiError::NoMatchingDate.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({ "error": NO_MATCH_MSG })
        );
    }

    #[tokio::test]
    async fn upstream_failure_maps_to_500_without_detail() {
        let error = ApiError::Upstream(CalendarError::Status(reqwest::StatusCode::BAD_GATEWAY));
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": UPSTREAM_MSG }));
    }
}
