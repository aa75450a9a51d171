pub mod audit_helpers;
pub mod hosts;
pub mod list;
pub mod log;
pub mod status;
pub mod store;
pub mod verify;
