pub mod file_store;
pub mod server_limits;
pub mod uploaded_file;

pub use file_store::FileStore;
pub use server_limits::ServerLimits;
pub use uploaded_file::{UnsupportedLengthError, UploadedFile};
