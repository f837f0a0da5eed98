// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,
    /// Error details
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Error code for programmatic handling
    #[schema(example = "VALIDATION_ERROR")]
    pub code: String,

    /// Human-readable error message
    #[schema(example = "Query deserialize error: invalid digit found in string")]
    pub message: String,
}

/// Body returned to the upload widget. Exactly one field is present.
#[derive(Serialize, ToSchema)]
pub struct UploadResultBody {
    /// Present and true when the file was stored
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = true)]
    pub success: Option<bool>,

    /// Present when the upload was rejected; shown to the user as-is
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "File is too large")]
    pub error: Option<String>,
}
