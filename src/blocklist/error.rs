//! Error type for blocklist loading.

use std::path::PathBuf;

/// Failure while reading a blocklist file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be opened (missing, permission denied, ...).
    #[error("could not open blocklist file {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file opened but a later read failed. `partial` holds the entries read
    /// before the failure.
    #[error("error reading blocklist file {} after {} entries: {source}", .path.display(), .partial.len())]
    Read {
        path: PathBuf,
        partial: super::Blocklist,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    pub fn path(&self) -> &std::path::Path {
        match self {
            LoadError::Open { path, .. } | LoadError::Read { path, .. } => path,
        }
    }
}
