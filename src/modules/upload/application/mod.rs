pub mod domain;
pub mod ports;
pub mod services;
pub mod upload_use_cases;
