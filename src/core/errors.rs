use std::path::PathBuf;

use crate::core::models::host_key_checking::HostKeyChecking;

/// All domain errors for hostkeep.
///
/// Each variant provides enough context to diagnose the issue
/// without needing a debugger.
#[derive(Debug, thiserror::Error)]
pub enum HostkeepError {
    #[error(
        "Cannot access {path}: {source}\n\n  \
         Check that the file and its directory are readable and writable.\n  \
         Run 'hostkeep status' to see which known hosts file is in use."
    )]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Host '{host}' not found in known hosts")]
    HostNotFound { host: String },

    #[error(
        "Host '{host}' is not a known host and its key was not accepted \
         (host key checking: {checking})\n\n  \
         Solutions:\n    \
         → Add the key explicitly: hostkeep add {host} <key-type> <key>\n    \
         → Or verify interactively: hostkeep verify --checking ask ..."
    )]
    UnknownHost {
        host: String,
        checking: HostKeyChecking,
    },

    #[error(
        "The host key was different to that in the known hosts file for host: {host}\n\n  \
         Recorded: {expected}\n  \
         Presented: {actual}\n\n  \
         Someone could be eavesdropping, or the host key has just been changed.\n  \
         If the change is expected, remove the old entry: hostkeep remove {host}"
    )]
    KnownHostChanged {
        host: String,
        expected: String,
        actual: String,
    },

    #[error("Invalid host key: {reason}")]
    InvalidKey { reason: String },

    #[error("Invalid configuration: {detail}")]
    InvalidConfig { detail: String },

    #[error("Audit log error: {detail}")]
    AuditError { detail: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl HostkeepError {
    /// Wrap an I/O error with the path it happened on.
    pub fn file_access(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileAccess {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, HostkeepError>;
