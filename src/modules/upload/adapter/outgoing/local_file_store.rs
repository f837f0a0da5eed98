use async_trait::async_trait;
use std::path::Path;
use tracing::debug;

use crate::upload::application::ports::outgoing::FileStore;

/// [`FileStore`] backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileStore;

#[async_trait]
impl FileStore for LocalFileStore {
    async fn is_writable(&self, dir: &Path) -> bool {
        // Probe with an anonymous file; it is unlinked on drop.
        let dir = dir.to_path_buf();
        let probe = tokio::task::spawn_blocking(move || {
            dir.is_dir() && tempfile::tempfile_in(&dir).is_ok()
        })
        .await;

        match probe {
            Ok(writable) => writable,
            Err(e) => {
                debug!(error = %e, "Writability probe did not complete");
                false
            }
        }
    }

    async fn exists(&self, path: &Path) -> bool {
        tokio::fs::metadata(path).await.is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[tokio::test]
    async fn temp_dir_is_writable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(LocalFileStore.is_writable(dir.path()).await);
    }

    #[tokio::test]
    async fn probe_leaves_no_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        LocalFileStore.is_writable(dir.path()).await;
        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn missing_dir_is_not_writable() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!LocalFileStore.is_writable(&dir.path().join("nope")).await);
    }

    #[tokio::test]
    async fn regular_file_is_not_a_writable_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("file.txt");
        fs::write(&file, b"x").unwrap();
        assert!(!LocalFileStore.is_writable(&file).await);
    }

    #[tokio::test]
    async fn exists_reflects_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("photo.png");
        assert!(!LocalFileStore.exists(&file).await);

        fs::write(&file, b"png").unwrap();
        assert!(LocalFileStore.exists(&file).await);
    }
}
