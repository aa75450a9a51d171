use std::io::Read;

use crate::core::errors::Result;
use crate::core::models::host_key_checking::HostKeyChecking;
use crate::core::models::known_hosts::KnownHosts;
use crate::core::models::store_outcome::StoreOutcome;
use crate::core::traits::known_hosts_provider::KnownHostsProvider;

/// Known hosts read once from any stream (stdin, an embedded resource).
///
/// Nothing is persisted: `store` only replaces the in-memory copy.
#[derive(Debug, Default)]
pub struct StreamKnownHostsProvider {
    known_hosts: KnownHosts,
    host_key_checking: HostKeyChecking,
}

impl StreamKnownHostsProvider {
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        Ok(Self {
            known_hosts: KnownHosts::parse(contents),
            host_key_checking: HostKeyChecking::default(),
        })
    }
}

impl KnownHostsProvider for StreamKnownHostsProvider {
    fn known_hosts(&self) -> &KnownHosts {
        &self.known_hosts
    }

    fn store(&mut self, contents: &str) -> Result<StoreOutcome> {
        let incoming = KnownHosts::parse(contents);
        if self.known_hosts.is_equivalent(&incoming) {
            return Ok(StoreOutcome::Unchanged);
        }
        self.known_hosts = incoming;
        Ok(StoreOutcome::Written)
    }

    fn host_key_checking(&self) -> HostKeyChecking {
        self.host_key_checking
    }

    fn set_host_key_checking(&mut self, checking: HostKeyChecking) {
        self.host_key_checking = checking;
    }
}
