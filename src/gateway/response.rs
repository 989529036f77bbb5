//! API response envelope and pagination types.
//!
//! All endpoints answer `{ success, message?, data?, errors? }`; list
//! endpoints wrap their payload in `{ items, pagination }`.

use axum::Json;
use axum::http::StatusCode;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::ApiError;

/// Unified API response wrapper.
#[derive(Debug, Serialize, ToSchema)]
pub struct ApiResponse<T> {
    /// True on the success path; error responses set this to false.
    #[schema(example = true)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Success response with data.
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    /// Success response with data and a human-readable message.
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// Success response carrying only a message (deletes, logout).
    pub fn message_only(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: None,
        }
    }
}

/// Handler result: a status + enveloped body, or an [`ApiError`] the
/// boundary maps to its status code.
pub type ApiResult<T> = Result<(StatusCode, Json<ApiResponse<T>>), ApiError>;

pub fn ok<T>(data: T) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::success(data))))
}

pub fn ok_message<T>(data: T, message: impl Into<String>) -> ApiResult<T> {
    Ok((StatusCode::OK, Json(ApiResponse::with_message(data, message))))
}

pub fn created<T>(data: T, message: impl Into<String>) -> ApiResult<T> {
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(data, message)),
    ))
}

/// Pagination metadata for list endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct Pagination {
    #[schema(example = 42)]
    pub total: i64,
    #[schema(example = 1)]
    pub page: i64,
    #[schema(example = 10)]
    pub limit: i64,
    #[schema(example = 5)]
    pub pages: i64,
}

impl Pagination {
    pub fn new(total: i64, page: i64, limit: i64) -> Self {
        let pages = if limit > 0 {
            (total + limit - 1) / limit
        } else {
            0
        };
        Self {
            total,
            page,
            limit,
            pages,
        }
    }
}

/// A page of items plus its pagination metadata.
#[derive(Debug, Serialize, ToSchema)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, total: i64, page: i64, limit: i64) -> Self {
        Self {
            items,
            pagination: Pagination::new(total, page, limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pagination_page_count() {
        assert_eq!(Pagination::new(0, 1, 10).pages, 0);
        assert_eq!(Pagination::new(1, 1, 10).pages, 1);
        assert_eq!(Pagination::new(10, 1, 10).pages, 1);
        assert_eq!(Pagination::new(11, 1, 10).pages, 2);
        assert_eq!(Pagination::new(95, 1, 10).pages, 10);
    }

    #[test]
    fn test_envelope_shape() {
        let resp = ApiResponse::with_message(7, "done");
        let json = serde_json::to_value(&resp).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "done");
        assert_eq!(json["data"], 7);

        let msg_only = ApiResponse::message_only("gone");
        let json = serde_json::to_value(&msg_only).unwrap();
        assert!(json.get("data").is_none());
    }
}
