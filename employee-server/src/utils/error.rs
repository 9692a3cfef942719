//! 统一错误处理
//!
//! 提供应用级错误类型：
//! - [`AppError`] - 应用错误枚举，由 service 层返回，在 HTTP 边界按种类转换
//!
//! # 状态码
//!
//! | 变体 | 状态码 |
//! |------|--------|
//! | Validation | 400 |
//! | NoFieldsToUpdate | 400 |
//! | NotFound | 404 |
//! | Conflict | 409 |
//! | Database / Timeout / Internal | 500 |
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("Employee 7369 not found"))
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use shared::ApiResponse;
use tracing::error;

use crate::db::repository::RepoError;

/// 应用错误枚举
///
/// Closed set of failure kinds. The HTTP status is chosen by variant, never
/// by message text.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 请求错误 (4xx) ==========
    #[error("Validation failed: {0}")]
    /// 验证失败 (400)
    Validation(String),

    #[error("No fields to update")]
    /// 更新请求为空 (400)
    NoFieldsToUpdate,

    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    #[error("Resource already exists: {0}")]
    /// 资源冲突 (409)
    Conflict(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),

    #[error("Operation timed out: {0}")]
    /// 超时 (500)
    Timeout(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl AppError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn timeout(msg: impl Into<String>) -> Self {
        Self::Timeout(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// HTTP status for this error kind
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::NoFieldsToUpdate => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Conflict(_) => StatusCode::CONFLICT,
            AppError::Database(_) | AppError::Timeout(_) | AppError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let (message, detail) = match &self {
            AppError::Validation(msg) => ("Invalid data", msg.clone()),
            AppError::NoFieldsToUpdate => ("No fields to update", self.to_string()),
            AppError::NotFound(msg) => ("Employee not found", msg.clone()),
            AppError::Conflict(msg) => ("Employee already exists", msg.clone()),

            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
                ("Database error", msg.clone())
            }
            AppError::Timeout(msg) => {
                error!(target: "internal", error = %msg, "Operation deadline exceeded");
                ("Request timed out", msg.clone())
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                ("Internal server error", msg.clone())
            }
        };

        let body = Json(ApiResponse::<()>::error(message, detail));
        (status, body).into_response()
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::Validation(e.body_text())
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_by_kind() {
        assert_eq!(AppError::validation("x").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::NoFieldsToUpdate.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::not_found("x").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(AppError::conflict("x").status_code(), StatusCode::CONFLICT);
        assert_eq!(
            AppError::database("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::timeout("x").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_repo_error_conversion() {
        let err: AppError = RepoError::Duplicate("empno 7369".into()).into();
        assert!(matches!(err, AppError::Conflict(_)));

        let err: AppError = RepoError::Database("boom".into()).into();
        assert!(matches!(err, AppError::Database(_)));
    }
}
