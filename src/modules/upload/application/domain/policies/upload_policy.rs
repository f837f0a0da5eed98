use std::collections::BTreeSet;
use std::path::PathBuf;

use crate::upload::application::domain::byte_size::{ByteSize, ByteSizeError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PolicyError {
    #[error("Invalid upload size limit: {0}")]
    InvalidSizeLimit(#[from] ByteSizeError),

    #[error("Invalid boolean value for {name}: {value}")]
    InvalidFlag { name: &'static str, value: String },
}

/// Deployment-wide arguments for the upload handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadPolicy {
    pub upload_directory: PathBuf,
    pub replace_old_file: bool,
    pub allowed_extensions: BTreeSet<String>,
    pub size_limit: u64,
}

impl UploadPolicy {
    pub const DEFAULT_UPLOAD_DIRECTORY: &'static str = "uploads/";
    pub const DEFAULT_SIZE_LIMIT: u64 = 10 * 1024 * 1024; // 10MB

    /// Load policy from env vars, falling back to defaults for unset ones.
    ///
    /// - `UPLOAD_DIRECTORY`
    /// - `UPLOAD_REPLACE_OLD_FILE` (`true`/`false`, `1`/`0`, `yes`/`no`)
    /// - `UPLOAD_ALLOWED_EXTENSIONS` (comma separated, empty = any)
    /// - `UPLOAD_SIZE_LIMIT` (`10485760`, `10M`, ...)
    pub fn from_env() -> Result<Self, PolicyError> {
        let upload_directory = non_empty_var("UPLOAD_DIRECTORY")
            .unwrap_or_else(|| Self::DEFAULT_UPLOAD_DIRECTORY.to_string());

        let replace_old_file = match non_empty_var("UPLOAD_REPLACE_OLD_FILE") {
            Some(value) => parse_flag("UPLOAD_REPLACE_OLD_FILE", &value)?,
            None => false,
        };

        let allowed_extensions = non_empty_var("UPLOAD_ALLOWED_EXTENSIONS")
            .map(|value| parse_extensions(&value))
            .unwrap_or_default();

        let size_limit = match non_empty_var("UPLOAD_SIZE_LIMIT") {
            Some(value) => value.parse::<ByteSize>()?.as_u64(),
            None => Self::DEFAULT_SIZE_LIMIT,
        };

        Ok(Self {
            upload_directory: PathBuf::from(upload_directory),
            replace_old_file,
            allowed_extensions,
            size_limit,
        })
    }

    /// Handy for unit tests or custom wiring (no env reads).
    pub fn new(upload_directory: impl Into<PathBuf>) -> Self {
        Self {
            upload_directory: upload_directory.into(),
            replace_old_file: false,
            allowed_extensions: BTreeSet::new(),
            size_limit: Self::DEFAULT_SIZE_LIMIT,
        }
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.trim().is_empty())
}

fn parse_flag(name: &'static str, value: &str) -> Result<bool, PolicyError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        _ => Err(PolicyError::InvalidFlag {
            name,
            value: value.to_string(),
        }),
    }
}

fn parse_extensions(value: &str) -> BTreeSet<String> {
    value
        .split(',')
        .map(|ext| ext.trim().trim_start_matches('.'))
        .filter(|ext| !ext.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::btreeset;

    #[test]
    fn new_uses_defaults() {
        let policy = UploadPolicy::new("/tmp/uploads/");
        assert_eq!(policy.upload_directory, PathBuf::from("/tmp/uploads/"));
        assert!(!policy.replace_old_file);
        assert!(policy.allowed_extensions.is_empty());
        assert_eq!(policy.size_limit, 10_485_760);
    }

    #[test]
    fn extensions_are_split_and_trimmed() {
        assert_eq!(
            parse_extensions("jpg, PNG,.gif,,"),
            btreeset! {"jpg".to_string(), "PNG".to_string(), "gif".to_string()}
        );
        assert!(parse_extensions(" , ").is_empty());
    }

    #[test]
    fn flags_accept_common_spellings() {
        assert_eq!(parse_flag("X", "TRUE"), Ok(true));
        assert_eq!(parse_flag("X", "1"), Ok(true));
        assert_eq!(parse_flag("X", "no"), Ok(false));
        assert_eq!(
            parse_flag("X", "maybe"),
            Err(PolicyError::InvalidFlag {
                name: "X",
                value: "maybe".to_string()
            })
        );
    }
}
