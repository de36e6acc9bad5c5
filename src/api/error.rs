use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::models::AddQuestionResponse;
use crate::store::StoreError;

/// A store failure on its way back to an HTTP client.
///
/// Input problems are reported verbatim. Anything else is logged in full and
/// the client only sees a generic message.
#[derive(Debug)]
pub struct ApiError(StoreError);

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            e if e.is_client_error() => {
                tracing::warn!("Validation error: {}", e);
                (StatusCode::BAD_REQUEST, e.to_string())
            }
            StoreError::EmptyStore => {
                tracing::warn!("Random question requested from an empty store");
                (StatusCode::NOT_FOUND, self.0.to_string())
            }
            e => {
                tracing::error!("Internal error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, Json(AddQuestionResponse::failed(message))).into_response()
    }
}
