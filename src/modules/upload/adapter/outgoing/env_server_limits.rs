use tracing::warn;

use crate::upload::application::domain::byte_size::ByteSize;
use crate::upload::application::ports::outgoing::ServerLimits;

/// [`ServerLimits`] read from environment variables on every call.
///
/// Unset or blank variables fall back to [`EnvServerLimits::DEFAULT_LIMIT`].
#[derive(Debug, Clone)]
pub struct EnvServerLimits {
    post_max_size_var: &'static str,
    upload_max_filesize_var: &'static str,
}

impl EnvServerLimits {
    pub const POST_MAX_SIZE_VAR: &'static str = "UPLOAD_POST_MAX_SIZE";
    pub const UPLOAD_MAX_FILESIZE_VAR: &'static str = "UPLOAD_MAX_FILESIZE";
    pub const DEFAULT_LIMIT: &'static str = "16M";

    pub fn from_env() -> Self {
        Self::with_vars(Self::POST_MAX_SIZE_VAR, Self::UPLOAD_MAX_FILESIZE_VAR)
    }

    pub fn with_vars(post_max_size_var: &'static str, upload_max_filesize_var: &'static str) -> Self {
        Self {
            post_max_size_var,
            upload_max_filesize_var,
        }
    }

    /// Current post limit in bytes; an unparsable value falls back to
    /// [`EnvServerLimits::DEFAULT_LIMIT`].
    pub fn post_max_size_bytes(&self) -> u64 {
        let raw = self.post_max_size();
        match raw.parse::<ByteSize>() {
            Ok(size) => size.as_u64(),
            Err(e) => {
                warn!(value = %raw, error = %e, "Unparsable post limit, using default");
                16 * ByteSize::MIB
            }
        }
    }

    fn read(var: &str) -> String {
        std::env::var(var)
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_LIMIT.to_string())
    }
}

impl ServerLimits for EnvServerLimits {
    fn post_max_size(&self) -> String {
        Self::read(self.post_max_size_var)
    }

    fn upload_max_filesize(&self) -> String {
        Self::read(self.upload_max_filesize_var)
    }
}
