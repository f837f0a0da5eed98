pub mod handle_upload_service;
pub mod server_settings_service;

pub use handle_upload_service::HandleUploadService;
pub use server_settings_service::ServerSettingsService;
