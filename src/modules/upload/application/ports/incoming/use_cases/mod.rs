mod check_server_settings;
mod handle_upload;

pub use check_server_settings::CheckServerSettingsUseCase;
pub use handle_upload::{
    HandleUploadCommand, HandleUploadCommandBuilder, HandleUploadCommandError,
    HandleUploadUseCase, UploadFault, UploadRejection,
};
