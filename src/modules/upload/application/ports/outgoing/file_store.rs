use async_trait::async_trait;
use std::path::Path;

/// Port for the filesystem checks the upload handler needs before saving.
#[async_trait]
pub trait FileStore: Send + Sync {
    /// Whether the process can create files inside `dir`.
    async fn is_writable(&self, dir: &Path) -> bool;

    /// Whether anything already exists at `path`.
    async fn exists(&self, path: &Path) -> bool;
}
