//! API Response types
//!
//! Standardized response envelope for every employee endpoint

use serde::{Deserialize, Serialize};

/// Unified API response structure
///
/// All employee API responses follow this format:
/// ```json
/// {
///     "success": true,
///     "message": "Employees retrieved successfully",
///     "data": [ ... ],
///     "count": 14
/// }
/// ```
///
/// `count` is only present on list responses, `error` only on failures.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    /// Human-readable message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error detail (failures only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
            error: None,
            count: None,
        }
    }

    /// Create a successful response without payload
    pub fn ok_empty(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: None,
            error: None,
            count: None,
        }
    }

    /// Create an error response
    pub fn error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
            error: Some(error.into()),
            count: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Create a list response, `count` is the number of items
    pub fn list(items: Vec<T>, message: impl Into<String>) -> Self {
        let count = items.len();
        Self {
            success: true,
            message: message.into(),
            data: Some(items),
            error: None,
            count: Some(count),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_sets_count() {
        let resp = ApiResponse::list(vec![1, 2, 3], "ok");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["count"], 3);
        assert_eq!(value["success"], true);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_error_omits_data_and_count() {
        let resp = ApiResponse::<()>::error("Employee not found", "no employee with empno 1");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "no employee with empno 1");
        assert!(value.get("data").is_none());
        assert!(value.get("count").is_none());
    }

    #[test]
    fn test_ok_empty_has_only_message() {
        let resp = ApiResponse::<()>::ok_empty("Employee deleted successfully");
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"success": true, "message": "Employee deleted successfully"})
        );
    }
}
