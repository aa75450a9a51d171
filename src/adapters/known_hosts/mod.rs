pub mod file_provider;
pub mod null_provider;
pub mod single_provider;
pub mod stream_provider;
