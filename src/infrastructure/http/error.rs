//! HTTP Error Handling
//!
//! 失败响应同样使用 {errno, error, data} 包装，errno 与 HTTP 状态码一致

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;

/// 统一错误响应格式
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub errno: i32,
    pub error: String,
    pub data: Option<()>,
}

impl ErrorResponse {
    pub fn new(errno: i32, error: impl Into<String>) -> Self {
        Self {
            errno,
            error: error.into(),
            data: None,
        }
    }
}

/// 错误码定义
pub mod errno {
    pub const BAD_REQUEST: i32 = 400;
    pub const NOT_FOUND: i32 = 404;
    pub const UNPROCESSABLE_ENTITY: i32 = 422;
    pub const INTERNAL_ERROR: i32 = 500;
    pub const SERVICE_UNAVAILABLE: i32 = 503;
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    Unprocessable(String),
    Internal(String),
    ServiceUnavailable(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Unprocessable(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn message(&self) -> &str {
        match self {
            ApiError::BadRequest(msg)
            | ApiError::NotFound(msg)
            | ApiError::Unprocessable(msg)
            | ApiError::Internal(msg)
            | ApiError::ServiceUnavailable(msg) => msg,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = status.as_u16() as i32;

        match &self {
            ApiError::BadRequest(msg) => {
                tracing::warn!(errno = errno::BAD_REQUEST, error = %msg, "Bad request");
            }
            ApiError::NotFound(msg) => {
                tracing::warn!(errno = errno::NOT_FOUND, error = %msg, "Resource not found");
            }
            ApiError::Unprocessable(msg) => {
                tracing::warn!(errno = errno::UNPROCESSABLE_ENTITY, error = %msg, "Unprocessable request");
            }
            ApiError::Internal(msg) => {
                tracing::error!(errno = errno::INTERNAL_ERROR, error = %msg, "Internal server error");
            }
            ApiError::ServiceUnavailable(msg) => {
                tracing::error!(errno = errno::SERVICE_UNAVAILABLE, error = %msg, "Service unavailable");
            }
        }

        (status, Json(ErrorResponse::new(code, self.message()))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        let message = e.to_string();
        match e {
            ApplicationError::InvalidIdentifier { .. } => ApiError::BadRequest(message),
            ApplicationError::InvalidRange(_) => ApiError::BadRequest(message),
            ApplicationError::NotFound { .. } => ApiError::NotFound(message),
            ApplicationError::ValidationError(_) => ApiError::Unprocessable(message),
            ApplicationError::StoreUnavailable(_) => ApiError::ServiceUnavailable(message),
            ApplicationError::RepositoryError(_) => ApiError::Internal(message),
            ApplicationError::InternalError(_) => ApiError::Internal(message),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();
        match rejection.status() {
            StatusCode::UNPROCESSABLE_ENTITY => ApiError::Unprocessable(message),
            _ => ApiError::BadRequest(message),
        }
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_error_status_mapping() {
        let cases = [
            (
                ApplicationError::InvalidIdentifier { resource_type: "project", id: "x".into() },
                StatusCode::BAD_REQUEST,
            ),
            (ApplicationError::InvalidRange("4".into()), StatusCode::BAD_REQUEST),
            (ApplicationError::not_found("Project", "x"), StatusCode::NOT_FOUND),
            (ApplicationError::ValidationError("count".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (ApplicationError::StoreUnavailable("closed".into()), StatusCode::SERVICE_UNAVAILABLE),
            (ApplicationError::RepositoryError("bad row".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status(), expected);
        }
    }

    #[tokio::test]
    async fn test_error_body_carries_errno() {
        let response = ApiError::NotFound("Project not found: x".into()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["errno"], 404);
        assert_eq!(json["error"], "Project not found: x");
        assert!(json["data"].is_null());
    }
}
