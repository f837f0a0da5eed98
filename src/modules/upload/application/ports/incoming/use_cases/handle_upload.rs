use async_trait::async_trait;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use crate::upload::application::{
    domain::{entities::UploadResult, policies::upload_policy::UploadPolicy},
    ports::outgoing::{UnsupportedLengthError, UploadedFile},
};

//
// ──────────────────────────────────────────────────────────
// Handle Upload Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandleUploadCommand {
    upload_directory: PathBuf,
    replace_old_file: bool,
    allowed_extensions: BTreeSet<String>,
    size_limit: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandleUploadCommandError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl HandleUploadCommand {
    pub fn builder() -> HandleUploadCommandBuilder {
        HandleUploadCommandBuilder::default()
    }

    pub fn from_policy(policy: &UploadPolicy) -> Self {
        Self {
            upload_directory: policy.upload_directory.clone(),
            replace_old_file: policy.replace_old_file,
            allowed_extensions: policy.allowed_extensions.clone(),
            size_limit: policy.size_limit,
        }
    }

    pub fn upload_directory(&self) -> &Path {
        &self.upload_directory
    }

    pub fn replace_old_file(&self) -> bool {
        self.replace_old_file
    }

    /// Allowed extensions as configured; case is not normalized here.
    pub fn allowed_extensions(&self) -> &BTreeSet<String> {
        &self.allowed_extensions
    }

    pub fn size_limit(&self) -> u64 {
        self.size_limit
    }
}

#[derive(Default)]
pub struct HandleUploadCommandBuilder {
    upload_directory: Option<PathBuf>,
    replace_old_file: bool,
    allowed_extensions: BTreeSet<String>,
    size_limit: Option<u64>,
}

impl HandleUploadCommandBuilder {
    pub fn upload_directory(mut self, dir: impl Into<PathBuf>) -> Self {
        self.upload_directory = Some(dir.into());
        self
    }

    pub fn replace_old_file(mut self, replace: bool) -> Self {
        self.replace_old_file = replace;
        self
    }

    pub fn allowed_extensions<I, S>(mut self, extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allowed_extensions = extensions.into_iter().map(Into::into).collect();
        self
    }

    pub fn size_limit(mut self, bytes: u64) -> Self {
        self.size_limit = Some(bytes);
        self
    }

    pub fn build(self) -> Result<HandleUploadCommand, HandleUploadCommandError> {
        let upload_directory = self
            .upload_directory
            .ok_or(HandleUploadCommandError::MissingField("upload_directory"))?;

        Ok(HandleUploadCommand {
            upload_directory,
            replace_old_file: self.replace_old_file,
            allowed_extensions: self.allowed_extensions,
            size_limit: self.size_limit.unwrap_or(UploadPolicy::DEFAULT_SIZE_LIMIT),
        })
    }
}

//
// ──────────────────────────────────────────────────────────
// Use Case Errors
// ──────────────────────────────────────────────────────────
//

/// Every recoverable reason an upload is turned down. The `Display` text is
/// what the client sees.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadRejection {
    #[error("Check server settings to allow uploads up to {size_limit}")]
    ServerSettings { size_limit: u64 },

    #[error("Server error. Upload directory isn't writable.")]
    DirectoryNotWritable,

    #[error("No files were uploaded.")]
    NoFile,

    #[error("File is empty")]
    EmptyFile,

    #[error("File is too large")]
    FileTooLarge,

    #[error("File name is invalid.")]
    InvalidFileName,

    #[error("File has an invalid extension, it should be one of {}.", .allowed.join(", "))]
    InvalidExtension { allowed: Vec<String> },

    #[error("Could not save uploaded file. The upload was cancelled, or server error encountered")]
    SaveFailed,
}

impl From<UploadRejection> for UploadResult {
    fn from(rejection: UploadRejection) -> Self {
        UploadResult::failure(rejection.to_string())
    }
}

/// Conditions that abort the request instead of producing an [`UploadResult`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadFault {
    #[error(transparent)]
    UnsupportedLength(#[from] UnsupportedLengthError),
}

//
// ──────────────────────────────────────────────────────────
// Use Case Trait
// ──────────────────────────────────────────────────────────
//

#[async_trait(?Send)]
pub trait HandleUploadUseCase {
    /// Validates and stores the upload carried by `file`, if any.
    async fn execute(
        &self,
        command: HandleUploadCommand,
        file: Option<&mut dyn UploadedFile>,
    ) -> Result<UploadResult, UploadFault>;
}
