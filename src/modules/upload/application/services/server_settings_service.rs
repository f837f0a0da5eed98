use tracing::warn;

use crate::upload::application::{
    domain::byte_size::ByteSize,
    ports::{incoming::use_cases::CheckServerSettingsUseCase, outgoing::ServerLimits},
};

#[derive(Debug, Clone)]
pub struct ServerSettingsService<L>
where
    L: ServerLimits,
{
    limits: L,
}

impl<L> ServerSettingsService<L>
where
    L: ServerLimits,
{
    pub fn new(limits: L) -> Self {
        Self { limits }
    }

    pub fn check(&self, size_limit: u64) -> bool {
        let post_size = to_bytes("post_max_size", &self.limits.post_max_size());
        let upload_size = to_bytes("upload_max_filesize", &self.limits.upload_max_filesize());

        !(post_size < size_limit || upload_size < size_limit)
    }
}

// An unreadable limit counts as zero so the check fails closed.
fn to_bytes(limit: &'static str, raw: &str) -> u64 {
    match raw.parse::<ByteSize>() {
        Ok(size) => size.as_u64(),
        Err(e) => {
            warn!(limit, value = raw, error = %e, "Unparsable server upload limit");
            0
        }
    }
}

impl<L> CheckServerSettingsUseCase for ServerSettingsService<L>
where
    L: ServerLimits,
{
    fn execute(&self, size_limit: u64) -> bool {
        self.check(size_limit)
    }
}
