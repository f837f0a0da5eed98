pub mod request_context;
pub mod routes;
pub mod sources;
