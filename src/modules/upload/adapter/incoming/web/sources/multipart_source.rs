use actix_multipart::form::tempfile::TempFile;
use async_trait::async_trait;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, error};

use super::commit::commit;
use crate::upload::application::ports::outgoing::{UnsupportedLengthError, UploadedFile};

/// Upload sent as the `qqfile` field of a multipart form (iframe transport).
///
/// actix-multipart has already spooled the field to a temp file; saving
/// commits a copy of it to its destination.
pub struct MultipartSource {
    file: Option<NamedTempFile>,
    name: String,
    size: u64,
}

impl MultipartSource {
    pub fn new(file: NamedTempFile, name: String, size: u64) -> Self {
        Self {
            file: Some(file),
            name,
            size,
        }
    }

    pub fn from_temp_file(temp: TempFile) -> Self {
        Self::new(
            temp.file,
            temp.file_name.unwrap_or_default(),
            temp.size as u64,
        )
    }
}

#[async_trait(?Send)]
impl UploadedFile for MultipartSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> Result<u64, UnsupportedLengthError> {
        Ok(self.size)
    }

    async fn save(&mut self, path: &Path) -> bool {
        let Some(file) = self.file.take() else {
            debug!(name = %self.name, "Multipart upload already committed");
            return false;
        };

        // The spooled file is dropped, and so deleted, once committed.
        match commit(file.path(), path).await {
            Ok(()) => true,
            Err(e) => {
                error!(path = %path.display(), error = %e, "Could not commit multipart upload");
                false
            }
        }
    }
}
