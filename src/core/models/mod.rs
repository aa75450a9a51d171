pub mod audit_entry;
pub mod credentials;
pub mod host_key_checking;
pub mod known_host_entry;
pub mod known_hosts;
pub mod store_outcome;
