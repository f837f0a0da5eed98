use async_trait::async_trait;
use std::path::Path;

/// Raised by a source that cannot tell how many bytes the client is sending.
///
/// There is no recovery path for this; callers treat it as a request-level
/// fault instead of a rejected upload.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Getting content length is not supported.")]
pub struct UnsupportedLengthError;

/// Port for the file carried by the current request.
///
/// One implementation exists per transport. Sources are built once per request
/// and hold the request body, so they are neither `Send` nor reusable.
#[async_trait(?Send)]
pub trait UploadedFile {
    /// Filename as supplied by the client. Untrusted.
    fn name(&self) -> &str;

    /// Size of the upload in bytes.
    fn size(&self) -> Result<u64, UnsupportedLengthError>;

    /// Writes the upload to `path`. Returns `false` on any failure, in which
    /// case nothing has been written to `path`.
    async fn save(&mut self, path: &Path) -> bool;
}
