use crate::core::errors::{HostkeepError, Result};
use crate::core::models::host_key_checking::HostKeyChecking;
use crate::core::models::known_host_entry::KnownHostEntry;
use crate::core::models::known_hosts::KnownHosts;
use crate::core::models::store_outcome::StoreOutcome;

/// Port for sources of known host keys.
///
/// Implementations live in `adapters::known_hosts` (file, stream, single
/// host, null). Only `store` differs between them; adding and removing
/// hosts are expressed in terms of it.
pub trait KnownHostsProvider {
    /// Currently loaded known hosts.
    fn known_hosts(&self) -> &KnownHosts;

    /// Replace the known hosts content.
    ///
    /// Content equivalent to what is already held must not cause a write.
    fn store(&mut self, contents: &str) -> Result<StoreOutcome>;

    /// Policy for hosts that are not listed.
    fn host_key_checking(&self) -> HostKeyChecking;

    fn set_host_key_checking(&mut self, checking: HostKeyChecking);

    /// Raw text in OpenSSH format.
    fn contents(&self) -> &str {
        self.known_hosts().contents()
    }

    /// Record a single host key. Already known entries are left alone.
    fn add_known_host(&mut self, entry: &KnownHostEntry) -> Result<StoreOutcome> {
        if self.known_hosts().contains(entry) {
            return Ok(StoreOutcome::Unchanged);
        }
        let contents = self.known_hosts().with_entry(entry);
        self.store(&contents)
    }

    /// Drop every key recorded for `host`, returning how many were removed.
    fn remove_host(&mut self, host: &str) -> Result<usize> {
        let removed = self.known_hosts().for_host(host).count();
        if removed == 0 {
            return Err(HostkeepError::HostNotFound {
                host: host.to_string(),
            });
        }
        let contents = self.known_hosts().without_host(host);
        self.store(&contents)?;
        Ok(removed)
    }
}
