use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::core::errors::{HostkeepError, Result};
use crate::core::models::host_key_checking::HostKeyChecking;
use crate::core::models::known_hosts::KnownHosts;
use crate::core::models::store_outcome::StoreOutcome;
use crate::core::traits::known_hosts_provider::KnownHostsProvider;

/// Known hosts provider backed by an OpenSSH `known_hosts` file.
///
/// `store` compares the new content with what is on disk as a set of
/// entries and only rewrites the file when the sets differ, so the
/// file's modification time is a reliable "something changed" signal.
///
/// Writes go to a temporary file next to the real file which is then
/// renamed over it, so a symlinked `known_hosts` stays a symlink. A
/// missing file reads as empty and is created on the first effective
/// store.
#[derive(Debug)]
pub struct FileKnownHostsProvider {
    path: PathBuf,
    known_hosts: KnownHosts,
    host_key_checking: HostKeyChecking,
}

impl FileKnownHostsProvider {
    /// Create a provider bound to the given file and load its content.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let known_hosts = KnownHosts::parse(read_contents(&path)?);
        log::debug!(
            "loaded {} known host entries from {}",
            known_hosts.len(),
            path.display()
        );

        Ok(Self {
            path,
            known_hosts,
            host_key_checking: HostKeyChecking::default(),
        })
    }

    /// `~/.ssh/known_hosts`.
    pub fn default_path() -> Result<PathBuf> {
        dirs::home_dir()
            .map(|home| home.join(".ssh").join("known_hosts"))
            .ok_or_else(|| HostkeepError::InvalidConfig {
                detail: "cannot determine home directory for ~/.ssh/known_hosts".into(),
            })
    }

    /// Return the file path this provider is bound to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where the bytes actually live: the resolved file when the bound
    /// path exists (it may be a symlink), the bound path otherwise.
    fn write_target(&self) -> Result<PathBuf> {
        match fs::canonicalize(&self.path) {
            Ok(resolved) => Ok(resolved),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(self.path.clone()),
            Err(e) => Err(HostkeepError::file_access(&self.path, e)),
        }
    }

    fn write_contents(&self, contents: &str) -> Result<()> {
        let access = |e| HostkeepError::file_access(&self.path, e);

        let target = self.write_target()?;
        let dir = match target.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(access)?;

        let mut tmp = NamedTempFile::new_in(dir).map_err(access)?;
        tmp.write_all(contents.as_bytes()).map_err(access)?;
        tmp.as_file().sync_all().map_err(access)?;

        // Keep the mode of an existing file (usually 0644) instead of the
        // temp file's 0600.
        if let Ok(meta) = fs::metadata(&target) {
            fs::set_permissions(tmp.path(), meta.permissions()).map_err(access)?;
        }

        tmp.persist(&target).map_err(|e| access(e.error))?;
        Ok(())
    }
}

impl KnownHostsProvider for FileKnownHostsProvider {
    fn known_hosts(&self) -> &KnownHosts {
        &self.known_hosts
    }

    fn store(&mut self, contents: &str) -> Result<StoreOutcome> {
        let current = KnownHosts::parse(read_contents(&self.path)?);
        let incoming = KnownHosts::parse(contents);

        if current.is_equivalent(&incoming) {
            log::debug!("{} unchanged, skipping write", self.path.display());
            self.known_hosts = current;
            return Ok(StoreOutcome::Unchanged);
        }

        self.write_contents(contents)?;
        log::info!(
            "wrote {} known host entries to {}",
            incoming.len(),
            self.path.display()
        );
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

fn read_contents(path: &Path) -> Result<String> {
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(e) => Err(HostkeepError::file_access(path, e)),
    }
}
