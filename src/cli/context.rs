use std::path::{Path, PathBuf};

use crate::adapters::audit::json_audit_logger::JsonAuditLogger;
use crate::adapters::known_hosts::file_provider::FileKnownHostsProvider;
use crate::cli::Cli;
use crate::config::app_config::AppConfig;
use crate::core::errors::{HostkeepError, Result};
use crate::core::models::credentials::AuthenticationInfo;
use crate::core::traits::known_hosts_provider::KnownHostsProvider;

/// Everything a command needs, resolved once from flags, environment and
/// config file and then passed down explicitly.
#[derive(Debug)]
pub struct Context {
    pub config_path: PathBuf,
    pub config: AppConfig,
    pub known_hosts_path: PathBuf,
    pub credentials: AuthenticationInfo,
}

impl Context {
    /// Resolve paths in priority order: flag or env var, config file, default.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let config_path = match &cli.config {
            Some(path) => path.clone(),
            None => AppConfig::default_path().ok_or_else(|| HostkeepError::InvalidConfig {
                detail: "cannot determine config directory; pass --config".into(),
            })?,
        };
        let config = AppConfig::load(&config_path)?;

        let known_hosts_path = match (&cli.known_hosts, config.known_hosts_file()) {
            (Some(path), _) => path.clone(),
            (None, Some(path)) => path,
            (None, None) => FileKnownHostsProvider::default_path()?,
        };

        let credentials = config.credentials(cli.password.clone(), cli.passphrase.clone());

        log::debug!(
            "config {}, known hosts {}",
            config_path.display(),
            known_hosts_path.display()
        );

        Ok(Self {
            config_path,
            config,
            known_hosts_path,
            credentials,
        })
    }

    /// Open the known hosts file with the configured checking policy.
    pub fn open_provider(&self) -> Result<FileKnownHostsProvider> {
        let mut provider = FileKnownHostsProvider::new(&self.known_hosts_path)?;
        provider.set_host_key_checking(self.config.known_hosts.host_key_checking);
        Ok(provider)
    }

    /// Directory holding the config file; the audit log lives next to it.
    pub fn config_dir(&self) -> &Path {
        self.config_path.parent().unwrap_or(Path::new("."))
    }

    /// Audit logger, or `None` when auditing is switched off.
    pub fn audit_logger(&self) -> Option<JsonAuditLogger> {
        let section = self.config.audit.as_ref();
        JsonAuditLogger::is_enabled(section)
            .then(|| JsonAuditLogger::from_config(self.config_dir(), section))
    }
}
