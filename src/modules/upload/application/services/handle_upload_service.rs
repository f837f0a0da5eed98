use async_trait::async_trait;
use rand::Rng;
use std::collections::BTreeSet;
use std::path::PathBuf;
use tracing::{error, info, warn};

use crate::upload::application::{
    domain::entities::{UploadFileName, UploadResult},
    ports::{
        incoming::use_cases::{
            HandleUploadCommand, HandleUploadUseCase, UploadFault, UploadRejection,
        },
        outgoing::{FileStore, ServerLimits, UploadedFile},
    },
    services::server_settings_service::ServerSettingsService,
};

#[derive(Debug, thiserror::Error)]
enum HandleUploadError {
    #[error(transparent)]
    Rejected(#[from] UploadRejection),

    #[error(transparent)]
    Fault(#[from] UploadFault),
}

#[derive(Debug, Clone)]
pub struct HandleUploadService<L, S>
where
    L: ServerLimits,
    S: FileStore,
{
    settings: ServerSettingsService<L>,
    file_store: S,
}

impl<L, S> HandleUploadService<L, S>
where
    L: ServerLimits,
    S: FileStore,
{
    pub fn new(settings: ServerSettingsService<L>, file_store: S) -> Self {
        Self {
            settings,
            file_store,
        }
    }

    async fn store(
        &self,
        command: &HandleUploadCommand,
        file: Option<&mut dyn UploadedFile>,
    ) -> Result<PathBuf, HandleUploadError> {
        let allowed_extensions: BTreeSet<String> = command
            .allowed_extensions()
            .iter()
            .map(|ext| ext.to_lowercase())
            .collect();
        let size_limit = command.size_limit();
        let dir = command.upload_directory();

        if !self.settings.check(size_limit) {
            return Err(UploadRejection::ServerSettings { size_limit }.into());
        }

        if !self.file_store.is_writable(dir).await {
            return Err(UploadRejection::DirectoryNotWritable.into());
        }

        let file = file.ok_or(UploadRejection::NoFile)?;

        let size = file.size().map_err(UploadFault::from)?;
        if size == 0 {
            return Err(UploadRejection::EmptyFile.into());
        }
        if size > size_limit {
            return Err(UploadRejection::FileTooLarge.into());
        }

        let mut name = UploadFileName::parse(file.name()).ok_or(UploadRejection::InvalidFileName)?;

        if !allowed_extensions.is_empty()
            && !allowed_extensions.contains(&name.extension_lowercase())
        {
            return Err(UploadRejection::InvalidExtension {
                allowed: allowed_extensions.into_iter().collect(),
            }
            .into());
        }

        // Check-then-save is not atomic; concurrent uploads of the same name
        // can still pick the same candidate.
        if !command.replace_old_file() {
            while self.file_store.exists(&dir.join(name.file_name())).await {
                name.push_suffix(rand::thread_rng().gen_range(10..=99));
            }
        }

        let destination = dir.join(name.file_name());
        if file.save(&destination).await {
            Ok(destination)
        } else {
            Err(UploadRejection::SaveFailed.into())
        }
    }
}

#[async_trait(?Send)]
impl<L, S> HandleUploadUseCase for HandleUploadService<L, S>
where
    L: ServerLimits,
    S: FileStore,
{
    async fn execute(
        &self,
        command: HandleUploadCommand,
        file: Option<&mut dyn UploadedFile>,
    ) -> Result<UploadResult, UploadFault> {
        match self.store(&command, file).await {
            Ok(path) => {
                info!(path = %path.display(), "Upload saved");
                Ok(UploadResult::Success)
            }
            Err(HandleUploadError::Rejected(rejection)) => {
                warn!(
                    dir = %command.upload_directory().display(),
                    reason = %rejection,
                    "Upload rejected"
                );
                Ok(rejection.into())
            }
            Err(HandleUploadError::Fault(fault)) => {
                error!(error = %fault, "Upload aborted");
                Err(fault)
            }
        }
    }
}
