use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    InvalidCredentials,
    EmailTaken,
    AlreadySubscribed,
    Unauthorized,
    NotFound,
    BadRequest(String),
    ValidationError(String),
    InternalError(String),
}

/// Convert our custom errors to HTTP responses
///
/// `IntoResponse` trait: Axum calls this to convert errors to responses
/// This is how we control what users see when errors occur
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::InvalidCredentials => {
                (StatusCode::UNAUTHORIZED, "Incorrect email or password".into())
            }
            ApiError::EmailTaken => (StatusCode::CONFLICT, "Email already registered".into()),
            ApiError::AlreadySubscribed => {
                (StatusCode::CONFLICT, "Email already subscribed".into())
            }
            ApiError::Unauthorized => {
                (StatusCode::UNAUTHORIZED, "Could not validate credentials".into())
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Post not found".into()),
            ApiError::BadRequest(msg) | ApiError::ValidationError(msg) => {
                (StatusCode::BAD_REQUEST, msg)
            }
            ApiError::InternalError(msg) => {
                error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".into(),
                )
            }
        };

        (
            status,
            Json(serde_json::json!({
              "error": message
            })),
        )
            .into_response()
    }
}
