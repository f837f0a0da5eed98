pub mod byte_size;
pub mod entities;
pub mod policies;
