use actix_web::web::Bytes;
use async_trait::async_trait;
use futures::{Stream, StreamExt};
use std::fmt::Display;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{error, warn};

use super::commit::commit;
use crate::upload::application::ports::outgoing::{UnsupportedLengthError, UploadedFile};

/// Upload sent as the raw request body (XMLHttpRequest transport).
///
/// The filename comes from the `qqfile` query parameter and the size from the
/// declared `Content-Length`.
pub struct StreamSource<S> {
    name: String,
    content_length: Option<u64>,
    body: S,
}

impl<S> StreamSource<S> {
    pub fn new(name: String, content_length: Option<u64>, body: S) -> Self {
        Self {
            name,
            content_length,
            body,
        }
    }
}

impl<S, E> StreamSource<S>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: Display,
{
    /// Drains the body into a scratch file, returning it with the number of
    /// bytes actually received.
    async fn buffer_body(&mut self) -> Option<(NamedTempFile, u64)> {
        let mut scratch = match NamedTempFile::new() {
            Ok(file) => file,
            Err(e) => {
                error!(error = %e, "Could not create scratch file");
                return None;
            }
        };

        let mut received: u64 = 0;
        while let Some(chunk) = self.body.next().await {
            let chunk = match chunk {
                Ok(chunk) => chunk,
                Err(e) => {
                    warn!(name = %self.name, error = %e, "Upload body interrupted");
                    return None;
                }
            };
            if let Err(e) = scratch.write_all(&chunk) {
                error!(error = %e, "Could not write scratch file");
                return None;
            }
            received += chunk.len() as u64;
        }

        if let Err(e) = scratch.flush() {
            error!(error = %e, "Could not flush scratch file");
            return None;
        }

        Some((scratch, received))
    }
}

#[async_trait(?Send)]
impl<S, E> UploadedFile for StreamSource<S>
where
    S: Stream<Item = Result<Bytes, E>> + Unpin,
    E: Display,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> Result<u64, UnsupportedLengthError> {
        self.content_length.ok_or(UnsupportedLengthError)
    }

    async fn save(&mut self, path: &Path) -> bool {
        let Ok(declared) = self.size() else {
            return false;
        };

        let Some((scratch, received)) = self.buffer_body().await else {
            return false;
        };

        if received != declared {
            warn!(
                name = %self.name,
                declared,
                received,
                "Upload body does not match declared length"
            );
            return false;
        }

        match commit(scratch.path(), path).await {
            Ok(()) => true,
            Err(e) => {
                error!(path = %path.display(), error = %e, "Could not commit upload to destination");
                false
            }
        }
    }
}
