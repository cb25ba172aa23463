//! Loading a blocklist from a newline-delimited file.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use super::{Blocklist, LoadError};
use crate::normalize::normalize;

/// Reads `path` into a [`Blocklist`], one entry per line.
///
/// Lines end at `\n` or `\r\n`; a last line without a terminator still counts.
/// Lines are normalized but not trimmed, so a whitespace-only line becomes its
/// own (never matching) entry. Zero-length lines are skipped. Invalid UTF-8 is
/// replaced with U+FFFD.
pub fn try_load_blocklist(path: impl AsRef<Path>) -> Result<Blocklist, LoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| LoadError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);

    let mut entries = HashSet::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {}
            Err(source) => {
                return Err(LoadError::Read {
                    path: path.to_path_buf(),
                    partial: Blocklist { entries },
                    source,
                })
            }
        }
        let line = strip_line_ending(&buf);
        if line.is_empty() {
            continue;
        }
        entries.insert(normalize(&String::from_utf8_lossy(line)));
    }

    Ok(Blocklist { entries })
}

/// Like [`try_load_blocklist`], but never fails.
///
/// If the file cannot be opened the error is logged and an empty blocklist is
/// returned. A read error part-way through is logged and the entries read so
/// far are kept.
pub fn load_blocklist(path: impl AsRef<Path>) -> Blocklist {
    let path = path.as_ref();
    match try_load_blocklist(path) {
        Ok(blocklist) => {
            tracing::debug!(
                path = %path.display(),
                entries = blocklist.len(),
                "loaded blocklist"
            );
            blocklist
        }
        Err(err @ LoadError::Open { .. }) => {
            tracing::error!("{err}; continuing with an empty blocklist");
            Blocklist::new()
        }
        Err(LoadError::Read {
            path,
            partial,
            source,
        }) => {
            tracing::warn!(
                path = %path.display(),
                entries = partial.len(),
                "read error in blocklist file, keeping entries read so far: {source}"
            );
            partial
        }
    }
}

fn strip_line_ending(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    line.strip_suffix(b"\r").unwrap_or(line)
}
