use std::collections::BTreeSet;

use super::known_host_entry::KnownHostEntry;

/// Known hosts content together with the set of entries it carries.
///
/// Equivalence ignores line order, duplicate lines and anything that is
/// not an entry (comments, blank lines, markers).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownHosts {
    contents: String,
    entries: BTreeSet<KnownHostEntry>,
}

impl KnownHosts {
    /// Parse raw known_hosts text.
    pub fn parse(contents: impl Into<String>) -> Self {
        let contents = contents.into();
        let entries = contents
            .lines()
            .filter_map(KnownHostEntry::parse_line)
            .collect();
        Self { contents, entries }
    }

    /// Raw text, exactly as loaded or stored.
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Entries in sorted order.
    pub fn entries(&self) -> impl Iterator<Item = &KnownHostEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, entry: &KnownHostEntry) -> bool {
        self.entries.contains(entry)
    }

    /// Entries listing `host`.
    pub fn for_host<'a>(&'a self, host: &'a str) -> impl Iterator<Item = &'a KnownHostEntry> {
        self.entries.iter().filter(move |e| e.matches_host(host))
    }

    /// Same entries, regardless of order or surrounding text.
    pub fn is_equivalent(&self, other: &KnownHosts) -> bool {
        self.entries == other.entries
    }

    /// Content with `entry` appended as a new line.
    pub fn with_entry(&self, entry: &KnownHostEntry) -> String {
        let mut contents = self.contents.clone();
        if !contents.is_empty() && !contents.ends_with('\n') {
            contents.push('\n');
        }
        contents.push_str(&entry.to_string());
        contents.push('\n');
        contents
    }

    /// Content with every entry line for `host` dropped. Other lines,
    /// comments included, are kept as they are.
    pub fn without_host(&self, host: &str) -> String {
        self.contents
            .lines()
            .filter(|line| !KnownHostEntry::parse_line(line).is_some_and(|e| e.matches_host(host)))
            .map(|line| format!("{line}\n"))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const AB: &str = "hostA ssh-rsa keyA\nhostB ssh-rsa keyB\n";

    #[test]
    fn swapped_order_is_equivalent() {
        let left = KnownHosts::parse(AB);
        let right = KnownHosts::parse("hostB ssh-rsa keyB\nhostA ssh-rsa keyA\n");
        assert!(left.is_equivalent(&right));
    }

    #[test]
    fn comments_and_blank_lines_do_not_count() {
        let left = KnownHosts::parse(AB);
        let right = KnownHosts::parse("# team hosts\n\nhostA ssh-rsa keyA\nhostB ssh-rsa keyB");
        assert!(left.is_equivalent(&right));
    }

    #[test]
    fn appended_entry_is_not_equivalent() {
        let left = KnownHosts::parse(AB);
        let right = KnownHosts::parse(format!("{AB}hostC ssh-rsa keyC\n"));
        assert!(!left.is_equivalent(&right));
        assert_eq!(right.len(), 3);
    }

    #[test]
    fn changed_key_is_not_equivalent() {
        let left = KnownHosts::parse(AB);
        let right = KnownHosts::parse("hostA ssh-rsa keyA\nhostB ssh-rsa other\n");
        assert!(!left.is_equivalent(&right));
    }

    #[test]
    fn with_entry_adds_missing_newline() {
        let hosts = KnownHosts::parse("hostA ssh-rsa keyA");
        let updated = hosts.with_entry(&KnownHostEntry::new("hostB", "ssh-rsa", "keyB"));
        assert_eq!(updated, "hostA ssh-rsa keyA\nhostB ssh-rsa keyB\n");
    }

    #[test]
    fn without_host_keeps_comments() {
        let hosts = KnownHosts::parse("# keep me\nhostA ssh-rsa keyA\nhostB ssh-rsa keyB\n");
        assert_eq!(hosts.without_host("hostA"), "# keep me\nhostB ssh-rsa keyB\n");
    }

    #[test]
    fn for_host_finds_all_key_types() {
        let hosts = KnownHosts::parse("h ssh-rsa k1\nh ssh-ed25519 k2\nother ssh-rsa k3\n");
        assert_eq!(hosts.for_host("h").count(), 2);
    }
}
