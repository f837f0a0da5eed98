use std::sync::Arc;

use crate::upload::application::ports::incoming::use_cases::{
    CheckServerSettingsUseCase, HandleUploadUseCase,
};

#[derive(Clone)]
pub struct UploadUseCases {
    pub handle_upload: Arc<dyn HandleUploadUseCase + Send + Sync>,
    pub check_server_settings: Arc<dyn CheckServerSettingsUseCase + Send + Sync>,
}
