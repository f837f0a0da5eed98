// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;
use tracing::error;

use crate::shared::api::encode_json;
use crate::upload::application::domain::entities::UploadResult;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

#[derive(Serialize, Clone)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        })
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        HttpResponse::build(status).json(ApiResponse::<()> {
            success: false,
            data: None,
            error: Some(ApiError {
                code: code.to_string(),
                message: message.to_string(),
            }),
        })
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }
}

/// Responses in the shape the upload widget reads: `{"success": true}` or
/// `{"error": "..."}`.
///
/// Rejections are still `200 OK`; the widget inspects the body, not the status.
pub struct UploadResponse;

impl UploadResponse {
    pub fn json(result: &UploadResult) -> HttpResponse {
        HttpResponse::Ok().json(result)
    }

    /// Same body as [`UploadResponse::json`], HTML-escaped and sent as
    /// `text/html` so a hidden iframe can hand it back to the widget intact.
    pub fn iframe(result: &UploadResult) -> HttpResponse {
        match serde_json::to_string(result) {
            Ok(json) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(encode_json(&json)),
            Err(e) => {
                error!(error = %e, "Could not serialize upload result");
                Self::fault("An unexpected error occurred")
            }
        }
    }

    /// Request-level failure with no recovery path.
    pub fn fault(message: &str) -> HttpResponse {
        HttpResponse::InternalServerError().json(UploadResult::failure(message))
    }
}
