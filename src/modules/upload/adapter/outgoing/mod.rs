pub mod env_server_limits;
pub mod local_file_store;
