use crate::core::errors::Result;
use crate::core::models::host_key_checking::HostKeyChecking;
use crate::core::models::known_host_entry::KnownHostEntry;
use crate::core::models::known_hosts::KnownHosts;
use crate::core::models::store_outcome::StoreOutcome;
use crate::core::traits::known_hosts_provider::KnownHostsProvider;

/// Provider that trusts exactly one host key, given on the command line
/// or pinned in code.
#[derive(Debug)]
pub struct SingleKnownHostProvider {
    known_hosts: KnownHosts,
    host_key_checking: HostKeyChecking,
}

impl SingleKnownHostProvider {
    pub fn new(host: &str, key_type: &str, key: &str) -> Self {
        let entry = KnownHostEntry::new(host, key_type, key);
        Self {
            known_hosts: KnownHosts::parse(format!("{entry}\n")),
            // A pinned key is only useful if everything else is rejected.
            host_key_checking: HostKeyChecking::Yes,
        }
    }
}

impl KnownHostsProvider for SingleKnownHostProvider {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn holds_one_entry() {
        let provider = SingleKnownHostProvider::new("pinned.example", "ssh-ed25519", "AAAA");
        let entries: Vec<_> = provider.known_hosts().entries().collect();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].host_name, "pinned.example");
        assert_eq!(provider.host_key_checking(), HostKeyChecking::Yes);
    }
}
