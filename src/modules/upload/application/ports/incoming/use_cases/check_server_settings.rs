/// Pre-flight check of the server-wide limits against an upload size limit.
///
/// Pure read of the environment; usable without a pending upload.
pub trait CheckServerSettingsUseCase {
    /// `true` when both server limits are at least `size_limit` bytes.
    fn execute(&self, size_limit: u64) -> bool;
}
