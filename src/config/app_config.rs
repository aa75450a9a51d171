use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::core::errors::{HostkeepError, Result};
use crate::core::models::credentials::AuthenticationInfo;
use crate::core::models::host_key_checking::HostKeyChecking;

/// Top-level configuration read from `config.toml`.
///
/// Every section is optional; a missing file is the same as an empty one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub known_hosts: KnownHostsSection,
    #[serde(default)]
    pub auth: AuthSection,
    pub audit: Option<AuditSection>,
}

impl AppConfig {
    /// Load the configuration from `path`.
    ///
    /// After parsing, validates the audit log filename to prevent it from
    /// pointing outside the config directory.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content).map_err(|e| HostkeepError::InvalidConfig {
            detail: format!("Failed to parse {}: {e}", path.display()),
        })?;

        if let Some(log_file) = config.audit.as_ref().and_then(|a| a.log_file.as_deref()) {
            validate_simple_filename(log_file, "audit log file")?;
        }

        Ok(config)
    }

    /// `~/.config/hostkeep/config.toml` (platform equivalent).
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("hostkeep").join("config.toml"))
    }

    /// Known hosts file from the config, with `~` expanded.
    pub fn known_hosts_file(&self) -> Option<PathBuf> {
        self.known_hosts.file.as_deref().map(expand_tilde)
    }

    /// Build the credentials holder from `[auth]` plus secrets that are
    /// never stored in the file.
    pub fn credentials(
        &self,
        password: Option<String>,
        passphrase: Option<String>,
    ) -> AuthenticationInfo {
        let mut info = AuthenticationInfo::new();
        if let Some(username) = &self.auth.username {
            info.set_username(username.as_str());
        }
        if let Some(private_key) = &self.auth.private_key {
            info.set_private_key(expand_tilde(private_key).to_string_lossy());
        }
        if let Some(password) = password {
            info.set_password(password);
        }
        if let Some(passphrase) = passphrase {
            info.set_passphrase(passphrase);
        }
        info
    }
}

/// The `[known_hosts]` section.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct KnownHostsSection {
    pub file: Option<String>,
    #[serde(default)]
    pub host_key_checking: HostKeyChecking,
}

/// The `[auth]` section. Passwords and passphrases come from the
/// environment, not from here.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthSection {
    pub username: Option<String>,
    pub private_key: Option<String>,
}

/// The `[audit]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuditSection {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    pub log_file: Option<String>,
}

fn default_enabled() -> bool {
    true
}

/// Reject anything that is not a plain file name.
fn validate_simple_filename(name: &str, what: &str) -> Result<()> {
    let invalid = name.is_empty()
        || name == "."
        || name == ".."
        || name.contains('/')
        || name.contains('\\');
    if invalid {
        return Err(HostkeepError::InvalidConfig {
            detail: format!("{what} must be a plain file name, got '{name}'"),
        });
    }
    Ok(())
}

/// Expand a leading `~/` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(path)),
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(content: &str) -> (TempDir, PathBuf) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, content).unwrap();
        (dir, path)
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load(&dir.path().join("config.toml")).unwrap();
        assert!(config.known_hosts.file.is_none());
        assert_eq!(config.known_hosts.host_key_checking, HostKeyChecking::Ask);
        assert!(config.audit.is_none());
    }

    #[test]
    fn parses_all_sections() {
        let (_dir, path) = write_config(
            r#"
[known_hosts]
file = "/srv/ssh/known_hosts"
host_key_checking = "yes"

[auth]
username = "deploy"
private_key = "/srv/ssh/id_ed25519"

[audit]
enabled = false
log_file = "hosts.log"
"#,
        );

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(
            config.known_hosts_file(),
            Some(PathBuf::from("/srv/ssh/known_hosts"))
        );
        assert_eq!(config.known_hosts.host_key_checking, HostKeyChecking::Yes);
        assert_eq!(config.auth.username.as_deref(), Some("deploy"));
        let audit = config.audit.unwrap();
        assert!(!audit.enabled);
        assert_eq!(audit.log_file.as_deref(), Some("hosts.log"));
    }

    #[test]
    fn rejects_bad_checking_value() {
        let (_dir, path) = write_config("[known_hosts]\nhost_key_checking = \"maybe\"\n");
        assert!(matches!(
            AppConfig::load(&path),
            Err(HostkeepError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn rejects_unknown_keys() {
        let (_dir, path) = write_config("[auth]\npassword = \"plaintext\"\n");
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn rejects_audit_path_traversal() {
        let (_dir, path) = write_config("[audit]\nlog_file = \"../../etc/passwd\"\n");
        assert!(AppConfig::load(&path).is_err());
    }

    #[test]
    fn credentials_combine_file_and_secrets() {
        let config = AppConfig {
            auth: AuthSection {
                username: Some("deploy".into()),
                private_key: Some("/keys/id_rsa".into()),
            },
            ..AppConfig::default()
        };

        let info = config.credentials(Some("pw".into()), None);
        assert_eq!(info.username(), Some("deploy"));
        assert_eq!(info.private_key(), Some("/keys/id_rsa"));
        assert_eq!(info.password(), Some("pw"));
        assert!(info.passphrase().is_none());
    }

    #[test]
    fn expand_tilde_leaves_absolute_paths() {
        assert_eq!(expand_tilde("/etc/ssh"), PathBuf::from("/etc/ssh"));
    }
}
