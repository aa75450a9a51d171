use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::errors::HostkeepError;

/// What to do when a host is not in the known hosts file.
///
/// Mirrors OpenSSH's `StrictHostKeyChecking` values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostKeyChecking {
    /// Prompt the user before recording a new host.
    #[default]
    Ask,
    /// Reject unknown hosts.
    Yes,
    /// Record unknown hosts without asking.
    No,
}

impl FromStr for HostKeyChecking {
    type Err = HostkeepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ask" => Ok(Self::Ask),
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            other => Err(HostkeepError::InvalidConfig {
                detail: format!("host key checking must be ask, yes or no, got '{other}'"),
            }),
        }
    }
}

impl std::fmt::Display for HostKeyChecking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Ask => "ask",
            Self::Yes => "yes",
            Self::No => "no",
        };
        f.write_str(s)
    }
}
