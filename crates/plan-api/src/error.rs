use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use plan_providers::ProviderError;
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Failure of an API handler, rendered as `{ "error": ... }` with a status code.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl From<ProviderError> for ApiError {
    fn from(e: ProviderError) -> Self {
        let status = match &e {
            ProviderError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
            ProviderError::UnknownServer(_) => StatusCode::NOT_FOUND,
            ProviderError::Io { .. } | ProviderError::Parse { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: e.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(ErrorResponse {
                error: self.message,
            }),
        )
            .into_response()
    }
}
