//! Translation of domain errors into HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use shared::ErrorResponse;
use tracing::error;

use crate::domain::PetError;

impl PetError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            PetError::NotFound(_) => StatusCode::NOT_FOUND,
            PetError::Validation(_) => StatusCode::BAD_REQUEST,
            PetError::IdentifierConflict(_) => StatusCode::CONFLICT,
            // An unresolved version conflict surfaces as a server error; the client may retry
            PetError::ConcurrencyConflict(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PetError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PetError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match &self {
            PetError::Storage(e) => {
                error!("Storage failure: {:#}", e);
                "Internal storage error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
