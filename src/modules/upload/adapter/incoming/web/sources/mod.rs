mod commit;
mod multipart_source;
mod stream_source;

pub use multipart_source::MultipartSource;
pub use stream_source::StreamSource;
