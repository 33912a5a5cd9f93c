use std::collections::HashSet;

use tracing::warn;

/// A read-only set of host strings (allow-list or risk-list).
///
/// Membership is case-insensitive, exact or dot-suffix: `example.com`
/// matches both `example.com` and `blog.example.com`. Loading the backing
/// file is the caller's job; this type only consumes lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainList {
    hosts: HashSet<String>,
}

impl DomainList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a list from an iterator of raw lines.
    ///
    /// Blank lines and `#`-prefixed comments are ignored. Entries that are
    /// not plausible hosts are skipped with a warning, never an error.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut hosts = HashSet::new();
        for line in lines {
            let entry = line.as_ref().trim().to_lowercase();
            if entry.is_empty() || entry.starts_with('#') {
                continue;
            }
            if !is_plausible_host(&entry) {
                warn!(entry = %entry, "skipping invalid domain-list entry");
                continue;
            }
            hosts.insert(entry);
        }
        Self { hosts }
    }

    /// Whether a host is on the list, exactly or as a subdomain of an entry.
    pub fn contains(&self, host: &str) -> bool {
        let host = host.to_lowercase();
        if self.hosts.contains(&host) {
            return true;
        }
        self.hosts
            .iter()
            .any(|entry| host.ends_with(&format!(".{entry}")))
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

/// A host must be dotted alphanumeric/hyphen labels, no spaces or schemes.
fn is_plausible_host(entry: &str) -> bool {
    entry.contains('.')
        && !entry.contains("//")
        && entry
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}
