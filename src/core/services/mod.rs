pub mod credentials_service;
pub mod host_key_service;
