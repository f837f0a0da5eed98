use serde::{Serialize, Serializer};
use std::fmt;
use std::path::Path;

/// Outcome of a single upload attempt, as relayed to the upload widget.
///
/// Serializes to `{"success": true}` or `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadResult {
    Success,
    Failure { message: String },
}

impl UploadResult {
    pub fn failure(message: impl Into<String>) -> Self {
        UploadResult::Failure {
            message: message.into(),
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            UploadResult::Success => None,
            UploadResult::Failure { message } => Some(message),
        }
    }
}

#[derive(Serialize)]
#[serde(untagged)]
enum UploadResultWire<'a> {
    Success { success: bool },
    Failure { error: &'a str },
}

impl Serialize for UploadResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self.message() {
            None => UploadResultWire::Success { success: true },
            Some(error) => UploadResultWire::Failure { error },
        };
        wire.serialize(serializer)
    }
}

/// Client-supplied filename split into the stem and the extension that end up
/// on disk.
///
/// Directory components of the raw name are dropped. The extension is the text
/// after the last `.` with its case preserved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFileName {
    stem: String,
    extension: String,
}

impl UploadFileName {
    /// Returns `None` when the raw name has no usable basename.
    pub fn parse(raw: &str) -> Option<Self> {
        let base = Path::new(raw).file_name()?.to_str()?;
        if base.chars().any(|c| c.is_control()) {
            return None;
        }

        let (stem, extension) = match base.rsplit_once('.') {
            Some((stem, ext)) => (stem, ext),
            None => (base, ""),
        };

        Some(Self {
            stem: stem.to_string(),
            extension: extension.to_string(),
        })
    }

    pub fn extension_lowercase(&self) -> String {
        self.extension.to_lowercase()
    }

    /// Appends `suffix` to the stem, e.g. `photo.png` -> `photo42.png`.
    pub fn push_suffix(&mut self, suffix: impl fmt::Display) {
        self.stem.push_str(&suffix.to_string());
    }

    pub fn file_name(&self) -> String {
        if self.extension.is_empty() {
            self.stem.clone()
        } else {
            format!("{}.{}", self.stem, self.extension)
        }
    }
}

impl fmt::Display for UploadFileName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.file_name())
    }
}
