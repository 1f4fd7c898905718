use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use service::errors::StoreError;

/// Wire shape of every error response: a short status text plus an optional
/// application code and detail message. `code` and `error` are omitted from
/// the JSON when unset.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A fully classified request failure, ready to render.
///
/// Exactly one of these is produced per failed request; handlers either build
/// one directly (validation) or let `From<StoreError>` do the classification.
#[derive(Debug)]
pub struct ApiError {
    pub http_status: StatusCode,
    pub status_text: &'static str,
    pub app_code: Option<i64>,
    pub error_text: Option<String>,
}

impl ApiError {
    pub fn invalid_request(detail: impl Into<String>) -> Self {
        Self {
            http_status: StatusCode::BAD_REQUEST,
            status_text: "Invalid request.",
            app_code: None,
            error_text: Some(detail.into()),
        }
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self {
            http_status: StatusCode::NOT_FOUND,
            status_text: "Not found.",
            app_code: None,
            error_text: Some(detail.into()),
        }
    }

    /// Opaque 500. The underlying cause is logged where it occurs, never
    /// echoed to the caller.
    pub fn internal() -> Self {
        Self {
            http_status: StatusCode::INTERNAL_SERVER_ERROR,
            status_text: "Internal server error.",
            app_code: None,
            error_text: None,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::UserNotFound => ApiError::not_found(err.to_string()),
            StoreError::Io(_) | StoreError::Decode(_) | StoreError::Encode(_) => {
                ApiError::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: self.status_text,
            code: self.app_code,
            error: self.error_text,
        };
        (self.http_status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_texts_match_wire_contract() {
        assert_eq!(ApiError::invalid_request("x").status_text, "Invalid request.");
        assert_eq!(ApiError::not_found("x").status_text, "Not found.");
        assert_eq!(ApiError::internal().status_text, "Internal server error.");
    }

    #[test]
    fn not_found_store_error_maps_to_404() {
        let api: ApiError = StoreError::UserNotFound.into();
        assert_eq!(api.http_status, StatusCode::NOT_FOUND);
        assert_eq!(api.status_text, "Not found.");
        assert_eq!(api.error_text.as_deref(), Some("user_not_found"));
    }

    #[test]
    fn io_store_error_maps_to_opaque_500() {
        let io = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
        let api: ApiError = StoreError::Io(io).into();
        assert_eq!(api.http_status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(api.error_text.is_none(), "internal detail must not leak");
    }

    #[test]
    fn body_omits_unset_fields() {
        let body = ErrorBody { status: "Internal server error.", code: None, error: None };
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json, serde_json::json!({"status": "Internal server error."}));
    }

    #[test]
    fn body_carries_detail_when_present() {
        let api = ApiError::invalid_request("display_name is required");
        let body = ErrorBody {
            status: api.status_text,
            code: api.app_code,
            error: api.error_text,
        };
        let json = serde_json::to_value(&body).expect("serialize");
        assert_eq!(json["status"], "Invalid request.");
        assert_eq!(json["error"], "display_name is required");
    }
}
