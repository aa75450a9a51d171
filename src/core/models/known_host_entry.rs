use base64::Engine;
use base64::engine::general_purpose::{STANDARD, STANDARD_NO_PAD};
use sha2::{Digest, Sha256};

use crate::core::errors::{HostkeepError, Result};

/// One `host key-type key` line of a known_hosts file.
///
/// Two entries are equal only when all three fields match, so the same
/// host may appear once per key type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct KnownHostEntry {
    pub host_name: String,
    pub key_type: String,
    pub key_value: String,
}

impl KnownHostEntry {
    pub fn new(
        host_name: impl Into<String>,
        key_type: impl Into<String>,
        key_value: impl Into<String>,
    ) -> Self {
        Self {
            host_name: host_name.into(),
            key_type: key_type.into(),
            key_value: key_value.into(),
        }
    }

    /// Parse a single line into an entry.
    ///
    /// Only lines with exactly three whitespace-separated tokens count.
    /// Blank lines, comments, `@marker` lines and lines carrying a trailing
    /// comment yield `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }

        let mut tokens = trimmed.split_whitespace();
        match (tokens.next(), tokens.next(), tokens.next(), tokens.next()) {
            (Some(host), Some(key_type), Some(key), None) => Some(Self::new(host, key_type, key)),
            _ => None,
        }
    }

    /// Whether this entry lists `host`, either alone or in a
    /// comma-separated host field (`host,192.168.1.1`).
    pub fn matches_host(&self, host: &str) -> bool {
        self.host_name == host || self.host_name.split(',').any(|h| h == host)
    }

    /// OpenSSH-style fingerprint: `SHA256:` followed by the unpadded
    /// base64 digest of the decoded key blob.
    pub fn fingerprint(&self) -> Result<String> {
        let blob = STANDARD
            .decode(self.key_value.as_bytes())
            .map_err(|e| HostkeepError::InvalidKey {
                reason: format!("key for {} is not valid base64: {e}", self.host_name),
            })?;

        let digest = Sha256::digest(&blob);
        Ok(format!("SHA256:{}", STANDARD_NO_PAD.encode(digest)))
    }
}

impl std::fmt::Display for KnownHostEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {}", self.host_name, self.key_type, self.key_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_three_tokens() {
        let entry = KnownHostEntry::parse_line("github.com ssh-ed25519 AAAAC3Nz").unwrap();
        assert_eq!(entry.host_name, "github.com");
        assert_eq!(entry.key_type, "ssh-ed25519");
        assert_eq!(entry.key_value, "AAAAC3Nz");
    }

    #[test]
    fn parse_collapses_extra_whitespace() {
        let entry = KnownHostEntry::parse_line("  host\tssh-rsa   AAAA  ").unwrap();
        assert_eq!(entry, KnownHostEntry::new("host", "ssh-rsa", "AAAA"));
    }

    #[test]
    fn parse_skips_non_entries() {
        assert!(KnownHostEntry::parse_line("").is_none());
        assert!(KnownHostEntry::parse_line("   ").is_none());
        assert!(KnownHostEntry::parse_line("# a comment").is_none());
        assert!(KnownHostEntry::parse_line("only two").is_none());
        assert!(KnownHostEntry::parse_line("@revoked host ssh-rsa AAAA").is_none());
        assert!(KnownHostEntry::parse_line("host ssh-rsa AAAA trailing-comment").is_none());
    }

    #[test]
    fn matches_comma_separated_hosts() {
        let entry = KnownHostEntry::new("example.com,10.0.0.1", "ssh-rsa", "AAAA");
        assert!(entry.matches_host("example.com"));
        assert!(entry.matches_host("10.0.0.1"));
        assert!(!entry.matches_host("10.0.0.2"));
    }

    #[test]
    fn fingerprint_of_known_blob() {
        // base64 of "hello"; sha256("hello") is well known
        let entry = KnownHostEntry::new("h", "ssh-ed25519", "aGVsbG8=");
        assert_eq!(
            entry.fingerprint().unwrap(),
            "SHA256:LPJNul+wow4m6DsqxbninhsWHlwfp0JecwQzYpOLmCQ"
        );
    }

    #[test]
    fn fingerprint_rejects_bad_base64() {
        let entry = KnownHostEntry::new("h", "ssh-rsa", "not base64!");
        assert!(matches!(
            entry.fingerprint(),
            Err(HostkeepError::InvalidKey { .. })
        ));
    }

    #[test]
    fn display_round_trips_line() {
        let line = "host ssh-rsa AAAA";
        let entry = KnownHostEntry::parse_line(line).unwrap();
        assert_eq!(entry.to_string(), line);
    }
}
