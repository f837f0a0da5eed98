use async_trait::async_trait;
use std::path::{Path, PathBuf};

use crate::upload::application::ports::outgoing::{
    ServerLimits, UnsupportedLengthError, UploadedFile,
};

//
// ──────────────────────────────────────────────────────────
// Server limits
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct StaticServerLimits {
    post_max_size: String,
    upload_max_filesize: String,
}

impl StaticServerLimits {
    pub fn new(post_max_size: &str, upload_max_filesize: &str) -> Self {
        Self {
            post_max_size: post_max_size.to_string(),
            upload_max_filesize: upload_max_filesize.to_string(),
        }
    }
}

impl ServerLimits for StaticServerLimits {
    fn post_max_size(&self) -> String {
        self.post_max_size.clone()
    }

    fn upload_max_filesize(&self) -> String {
        self.upload_max_filesize.clone()
    }
}

//
// ──────────────────────────────────────────────────────────
// Uploaded file
// ──────────────────────────────────────────────────────────
//

/// Upload held in memory. Records where it was saved.
pub struct InMemoryUpload {
    name: String,
    contents: Vec<u8>,
    fail_save: bool,
    length_known: bool,
    saved_to: Option<PathBuf>,
}

impl InMemoryUpload {
    pub fn new(name: &str, contents: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            contents,
            fail_save: false,
            length_known: true,
            saved_to: None,
        }
    }

    pub fn failing_save(mut self) -> Self {
        self.fail_save = true;
        self
    }

    pub fn without_length(mut self) -> Self {
        self.length_known = false;
        self
    }

    pub fn was_saved(&self) -> bool {
        self.saved_to.is_some()
    }

    pub fn saved_to(&self) -> Option<&Path> {
        self.saved_to.as_deref()
    }
}

#[async_trait(?Send)]
impl UploadedFile for InMemoryUpload {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> Result<u64, UnsupportedLengthError> {
        if self.length_known {
            Ok(self.contents.len() as u64)
        } else {
            Err(UnsupportedLengthError)
        }
    }

    async fn save(&mut self, path: &Path) -> bool {
        if self.fail_save {
            return false;
        }
        match tokio::fs::write(path, &self.contents).await {
            Ok(()) => {
                self.saved_to = Some(path.to_path_buf());
                true
            }
            Err(_) => false,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Request bodies
// ──────────────────────────────────────────────────────────
//

/// Single-file `multipart/form-data` body.
pub fn multipart_body(boundary: &str, field: &str, filename: &str, contents: &[u8]) -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{boundary}\r\n").as_bytes());
    body.extend_from_slice(
        format!("Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n")
            .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{boundary}--\r\n").as_bytes());
    body
}

/// Mode bits a freshly created file gets in `dir` under the current umask.
#[cfg(unix)]
pub fn default_file_mode(dir: &Path) -> u32 {
    use std::os::unix::fs::PermissionsExt;

    let reference = dir.join(".mode-reference");
    let mode = std::fs::File::create(&reference)
        .and_then(|file| file.metadata())
        .map(|meta| meta.permissions().mode() & 0o777)
        .unwrap();
    std::fs::remove_file(&reference).unwrap();
    mode
}
