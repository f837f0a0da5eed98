// src/modules/upload/adapter/incoming/web/routes/upload_file.rs

use actix_multipart::form::{tempfile::TempFile, MultipartForm};
use actix_web::{post, web, FromRequest, HttpRequest, HttpResponse};
use tracing::warn;

use crate::api::schemas::UploadResultBody;
use crate::shared::api::UploadResponse;
use crate::upload::adapter::incoming::web::request_context::{
    RequestContext, Transport, UploadSource,
};
use crate::upload::application::ports::incoming::use_cases::HandleUploadCommand;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Multipart Form
// ──────────────────────────────────────────────────────────
//

#[derive(MultipartForm)]
pub struct UploadForm {
    pub qqfile: Option<TempFile>,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

/// Receive a file from the upload widget
///
/// Accepts either the raw file as the request body with its name in the
/// `qqfile` query parameter, or a multipart form with a `qqfile` file field.
#[utoipa::path(
    post,
    path = "/api/upload",
    tag = "upload",
    params(
        ("qqfile" = Option<String>, Query, description = "File name, for raw-body uploads")
    ),
    request_body(
        content = Vec<u8>,
        content_type = "application/octet-stream",
        description = "Raw file bytes, or a multipart form with a `qqfile` field"
    ),
    responses(
        (
            status = 200,
            description = "Upload handled; `success` or `error` tells which way",
            body = UploadResultBody,
            example = json!({ "success": true })
        ),
        (
            status = 500,
            description = "Upload length could not be determined",
            body = UploadResultBody,
            example = json!({ "error": "Getting content length is not supported." })
        )
    )
)]
#[post("/api/upload")]
pub async fn upload_file_handler(
    req: HttpRequest,
    payload: web::Payload,
    data: web::Data<AppState>,
) -> HttpResponse {
    let mut payload = payload.into_inner();
    let mut context = RequestContext::from_request(&req);
    let transport = context.transport();

    if context.wants_multipart_form() {
        match MultipartForm::<UploadForm>::from_request(&req, &mut payload).await {
            Ok(form) => context = context.with_multipart_file(form.into_inner().qqfile),
            Err(e) => warn!(error = %e, "Could not read multipart upload form"),
        }
    }

    let command = HandleUploadCommand::from_policy(&data.upload_policy);
    let mut source = context.into_source(payload);
    let file = source.as_mut().map(UploadSource::as_uploaded_file);

    match data.upload.handle_upload.execute(command, file).await {
        Ok(result) => match transport {
            Transport::Xhr => UploadResponse::json(&result),
            Transport::Iframe => UploadResponse::iframe(&result),
        },
        Err(fault) => UploadResponse::fault(&fault.to_string()),
    }
}
