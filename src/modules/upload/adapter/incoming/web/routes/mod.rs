pub mod check_settings;
pub mod upload_file;

pub use check_settings::{check_settings_handler, CheckSettingsQuery, ServerSettingsResponse};
pub use upload_file::{upload_file_handler, UploadForm};
