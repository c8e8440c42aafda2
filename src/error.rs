use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::warn;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid API key")]
    Unauthorized,

    #[error("Invalid query parameters: {0}")]
    InvalidQuery(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::Unauthorized => {
                warn!("Rejected request with invalid or missing API key");
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            AppError::InvalidQuery(msg) => {
                warn!("Invalid query parameters: {}", msg);
                (StatusCode::BAD_REQUEST, msg.clone())
            }
        };

        let body = Json(json!({
            "error": error_message,
            "status": status.as_u16(),
        }));

        let mut response = (status, body).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response.headers_mut().insert(
                header::WWW_AUTHENTICATE,
                header::HeaderValue::from_static("API-Key"),
            );
        }
        response
    }
}

/// Result type alias for application errors
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_response_carries_challenge_header() {
        let response = AppError::Unauthorized.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "API-Key"
        );
    }

    #[test]
    fn invalid_query_maps_to_bad_request() {
        let response = AppError::InvalidQuery("limit must be an integer".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
