use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse, UploadResultBody};
use utoipa::OpenApi;

use crate::upload::adapter::incoming::web::routes::ServerSettingsResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Upload Backend API",
        version = "1.0.0",
        description = "Server endpoint for the browser file upload widget",
        contact(
            name = "API Support",
            email = "support@example.com"
        )
    ),
    paths(
        // Health
        crate::health::health,
        crate::health::readiness,

        // Upload endpoints
        crate::upload::adapter::incoming::web::routes::upload_file::upload_file_handler,
        crate::upload::adapter::incoming::web::routes::check_settings::check_settings_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<ServerSettingsResponse>,
            ErrorResponse,
            ErrorDetail,

            // Upload DTOs
            UploadResultBody,
            ServerSettingsResponse
        )
    ),
    tags(
        (name = "health", description = "Liveness and readiness probes"),
        (name = "upload", description = "File upload endpoints"),
    )
)]
pub struct ApiDoc;
