use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Request failures surfaced to the client. Every variant renders as a JSON
/// body `{"detail": "..."}` so the frontend can show the message verbatim.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Activity not found")]
    ActivityNotFound,

    #[error("{email} is already signed up for {activity}")]
    AlreadySignedUp { activity: String, email: String },

    #[error("{email} is not signed up for {activity}")]
    NotSignedUp { activity: String, email: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::ActivityNotFound => StatusCode::NOT_FOUND,
            AppError::AlreadySignedUp { .. } | AppError::NotSignedUp { .. } => {
                StatusCode::BAD_REQUEST
            }
        };

        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}
