mod encode;
mod query_config;
mod response;

pub use encode::encode_json;
pub use query_config::custom_query_config;
pub use response::{ApiError, ApiResponse, UploadResponse};
