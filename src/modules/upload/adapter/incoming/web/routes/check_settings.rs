use actix_web::{get, web, Responder};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::schemas::SuccessResponse;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Request / Response DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct CheckSettingsQuery {
    /// Size limit to check, in bytes. Defaults to the configured limit.
    pub size_limit: Option<u64>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerSettingsResponse {
    #[schema(example = 10485760)]
    pub size_limit: u64,
    #[schema(example = true)]
    pub ok: bool,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Check server upload limits
///
/// Reports whether the server-wide limits allow uploads of `sizeLimit` bytes.
#[utoipa::path(
    get,
    path = "/api/upload/settings",
    tag = "upload",
    params(CheckSettingsQuery),
    responses(
        (
            status = 200,
            description = "Limits compared",
            body = inline(SuccessResponse<ServerSettingsResponse>),
            example = json!({
                "success": true,
                "data": { "sizeLimit": 10485760, "ok": true }
            })
        ),
        (status = 400, description = "Invalid sizeLimit", body = crate::api::schemas::ErrorResponse)
    )
)]
#[get("/api/upload/settings")]
pub async fn check_settings_handler(
    query: web::Query<CheckSettingsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let size_limit = query
        .size_limit
        .unwrap_or(data.upload_policy.size_limit);
    let ok = data.upload.check_server_settings.execute(size_limit);

    ApiResponse::success(ServerSettingsResponse { size_limit, ok })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};
    use serde_json::Value;

    use crate::shared::api::custom_query_config;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;

    #[actix_web::test]
    async fn test_defaults_to_policy_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        let app_state = TestAppStateBuilder::new(dir.path())
            .with_server_limits("16M", "16M")
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(check_settings_handler)).await;

        let req = test::TestRequest::get().uri("/api/upload/settings").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["sizeLimit"], 10_485_760);
        assert_eq!(body["data"]["ok"], true);
    }

    #[actix_web::test]
    async fn test_reports_insufficient_limits() {
        let dir = tempfile::tempdir().unwrap();
        let app_state = TestAppStateBuilder::new(dir.path())
            .with_server_limits("8M", "2M")
            .build();

        let app = test::init_service(App::new().app_data(app_state).service(check_settings_handler)).await;

        let req = test::TestRequest::get()
            .uri("/api/upload/settings?sizeLimit=4194304")
            .to_request();
        let resp = test::call_service(&app, req).await;

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["sizeLimit"], 4_194_304);
        assert_eq!(body["data"]["ok"], false);
    }

    #[actix_web::test]
    async fn test_invalid_size_limit_is_bad_request() {
        let dir = tempfile::tempdir().unwrap();
        let app_state = TestAppStateBuilder::new(dir.path()).build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_query_config())
                .service(check_settings_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/api/upload/settings?sizeLimit=huge")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}
