use crate::application::app_error::AppError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    #[schema(example = "Pagination page validation error")]
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::PaginationError | AppError::InvalidFilter { .. } => {
                (StatusCode::BAD_REQUEST, Some(self.to_string()))
            }
            AppError::InvalidId(_) => (StatusCode::BAD_REQUEST, None),
            AppError::MalformedSort(_) => (StatusCode::INTERNAL_SERVER_ERROR, Some(self.to_string())),
            AppError::DatabaseError(_) | AppError::InvalidRecord(_) => (StatusCode::INTERNAL_SERVER_ERROR, None),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::warn!(error = %self, "Request rejected");
        }

        let message = match message {
            Some(msg) => msg,
            None => status.canonical_reason().unwrap_or("Unknown error").to_string(),
        };

        let body = Json(ErrorResponse {
            success: false,
            error: message,
        });

        (status, body).into_response()
    }
}
