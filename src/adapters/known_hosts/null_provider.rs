use crate::core::errors::Result;
use crate::core::models::host_key_checking::HostKeyChecking;
use crate::core::models::known_hosts::KnownHosts;
use crate::core::models::store_outcome::StoreOutcome;
use crate::core::traits::known_hosts_provider::KnownHostsProvider;

/// Provider with no known hosts that discards everything stored into it.
#[derive(Debug, Default)]
pub struct NullKnownHostProvider {
    empty: KnownHosts,
    host_key_checking: HostKeyChecking,
}

impl KnownHostsProvider for NullKnownHostProvider {
    fn known_hosts(&self) -> &KnownHosts {
        &self.empty
    }

    fn store(&mut self, _contents: &str) -> Result<StoreOutcome> {
        Ok(StoreOutcome::Unchanged)
    }

    fn host_key_checking(&self) -> HostKeyChecking {
        self.host_key_checking
    }

    fn set_host_key_checking(&mut self, checking: HostKeyChecking) {
        self.host_key_checking = checking;
    }
}
