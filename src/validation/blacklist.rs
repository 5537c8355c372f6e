use std::collections::HashSet;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Host names that are rejected regardless of their syntax.
///
/// Built once at startup and read-only afterwards. Lookups are exact and
/// case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blacklist {
    hosts: HashSet<String>,
}

impl Blacklist {
    /// Loads one host per line from `path`.
    ///
    /// A source that cannot be opened or read yields an empty blacklist; the
    /// failure is logged and never returned to the caller.
    ///
    /// # Examples
    /// ```
    /// use email_verifier::validation::blacklist::Blacklist;
    ///
    /// let blacklist = Blacklist::load("someFileThatDoesntExist.blargh");
    /// assert!(blacklist.is_empty());
    /// ```
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let loaded = File::open(path).and_then(|file| Self::from_reader(BufReader::new(file)));

        match loaded {
            Ok(blacklist) => {
                tracing::info!(
                    path = %path.display(),
                    entries = blacklist.len(),
                    "Loaded host blacklist"
                );
                blacklist
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "Unable to read host blacklist, continuing without one"
                );
                Self::default()
            }
        }
    }

    /// Reads entries from any buffered source: each line is trimmed and
    /// blank lines are skipped. Line contents are taken literally.
    pub fn from_reader(reader: impl BufRead) -> io::Result<Self> {
        let mut hosts = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let host = line.trim();
            if !host.is_empty() {
                hosts.insert(host.to_string());
            }
        }
        Ok(Self { hosts })
    }

    pub fn contains(&self, host: &str) -> bool {
        self.hosts.contains(host)
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}

impl FromIterator<String> for Blacklist {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            hosts: iter
                .into_iter()
                .map(|host| host.trim().to_string())
                .filter(|host| !host.is_empty())
                .collect(),
        }
    }
}
