use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::services::EnrollmentError;

/// Everything a JSON route can fail with. Rendered as `{"detail": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("email query parameter is required")]
    MissingEmail,
    #[error(transparent)]
    Enrollment(#[from] EnrollmentError),
    #[error("{}", .0.body_text())]
    InvalidPath(#[from] PathRejection),
    #[error("{}", .0.body_text())]
    InvalidQuery(#[from] QueryRejection),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingEmail => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Enrollment(EnrollmentError::NotFound) => StatusCode::NOT_FOUND,
            ApiError::Enrollment(
                EnrollmentError::AlreadyRegistered | EnrollmentError::NotRegistered,
            ) => StatusCode::BAD_REQUEST,
            ApiError::InvalidPath(rejection) => rejection.status(),
            ApiError::InvalidQuery(rejection) => rejection.status(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(serde_json::json!({ "detail": self.to_string() }))).into_response()
    }
}
