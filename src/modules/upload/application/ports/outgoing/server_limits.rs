/// Port for the server-wide upload limits the hosting environment enforces.
///
/// Values are human size strings (`"8M"`, `"2G"`, `"1048576"`) and are read on
/// every call, never cached.
pub trait ServerLimits: Send + Sync {
    /// Largest request body the server accepts.
    fn post_max_size(&self) -> String;

    /// Largest single uploaded file the server accepts.
    fn upload_max_filesize(&self) -> String;
}
