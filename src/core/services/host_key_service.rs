use crate::core::errors::{HostkeepError, Result};
use crate::core::models::host_key_checking::HostKeyChecking;
use crate::core::models::known_host_entry::KnownHostEntry;
use crate::core::traits::interactive::InteractiveUserInfo;
use crate::core::traits::known_hosts_provider::KnownHostsProvider;

/// Outcome of checking a presented host key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostKeyStatus {
    /// The exact key is already recorded for the host.
    Trusted,
    /// The host was unknown and its key has now been recorded.
    Added,
}

/// Checks host keys presented by a server against a `KnownHostsProvider`,
/// applying the provider's host key checking policy to unknown hosts.
pub struct HostKeyService<P: KnownHostsProvider, U: InteractiveUserInfo> {
    pub provider: P,
    pub user_info: U,
}

impl<P: KnownHostsProvider, U: InteractiveUserInfo> HostKeyService<P, U> {
    /// Verify `key` of type `key_type` for `host`.
    ///
    /// A recorded key of the same type that differs is always an error,
    /// whatever the policy.
    pub fn verify(&mut self, host: &str, key_type: &str, key: &str) -> Result<HostKeyStatus> {
        let presented = KnownHostEntry::new(host, key_type, key);

        let mut recorded_same_type = None;
        for entry in self.provider.known_hosts().for_host(host) {
            if entry.key_type != key_type {
                continue;
            }
            if entry.key_value == key {
                log::debug!("host key for {host} matches known hosts");
                return Ok(HostKeyStatus::Trusted);
            }
            recorded_same_type = Some(entry.clone());
        }

        if let Some(recorded) = recorded_same_type {
            log::warn!("host key for {host} does not match the recorded {key_type} key");
            return Err(HostkeepError::KnownHostChanged {
                host: host.to_string(),
                expected: describe(&recorded),
                actual: describe(&presented),
            });
        }

        let checking = self.provider.host_key_checking();
        let accept = match checking {
            HostKeyChecking::Yes => false,
            HostKeyChecking::No => true,
            HostKeyChecking::Ask => {
                let question = format!(
                    "The authenticity of host '{host}' can't be established.\n  \
                     {key_type} key fingerprint is {}.\n  \
                     Are you sure you want to continue connecting?",
                    describe(&presented)
                );
                self.user_info.prompt_yes_no(&question)
            }
        };

        if !accept {
            return Err(HostkeepError::UnknownHost {
                host: host.to_string(),
                checking,
            });
        }

        self.provider.add_known_host(&presented)?;
        self.user_info.show_message(&format!(
            "Permanently added '{host}' ({key_type}) to the list of known hosts."
        ));
        log::info!("recorded new {key_type} host key for {host}");
        Ok(HostKeyStatus::Added)
    }
}

/// Fingerprint when the key decodes, the raw key otherwise.
fn describe(entry: &KnownHostEntry) -> String {
    entry
        .fingerprint()
        .unwrap_or_else(|_| entry.key_value.clone())
}
