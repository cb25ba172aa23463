//! Blocklist: a set of normalized URLs with exact-match lookups.
//!
//! Entries and queries both pass through [`normalize`] before they are
//! stored or compared, so matching is case-insensitive but otherwise exact.
//! URLs are opaque strings here: a trailing slash, a port, or a query string
//! makes two URLs distinct.

mod error;
mod load;

pub use error::LoadError;
pub use load::{load_blocklist, try_load_blocklist};

use std::collections::HashSet;

use crate::normalize::normalize;

/// Set of blocked URLs, each stored in normalized (lowercase) form.
///
/// Immutable once built; share it behind `Arc` if several threads need it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Blocklist {
    entries: HashSet<String>,
}

impl Blocklist {
    /// An empty blocklist: nothing is blocked.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true iff the normalized form of `url` is an entry.
    pub fn is_blocked(&self, url: &str) -> bool {
        self.entries.contains(&normalize(url))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates the stored (already normalized) entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    /// Stored entries sorted, for stable output.
    pub fn sorted_entries(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.iter().collect();
        v.sort_unstable();
        v
    }
}

impl<S: AsRef<str>> FromIterator<S> for Blocklist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|s| normalize(s.as_ref())).collect(),
        }
    }
}

/// Checks `url` against `blocklist`; see [`Blocklist::is_blocked`].
pub fn is_url_blocked(blocklist: &Blocklist, url: &str) -> bool {
    blocklist.is_blocked(url)
}
