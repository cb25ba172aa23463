//! `urlblock list` – dump the normalized entries.

use anyhow::Result;
use std::io::Write;

use crate::blocklist::Blocklist;

pub fn run_list(blocklist: &Blocklist, out: &mut impl Write) -> Result<()> {
    for entry in blocklist.sorted_entries() {
        // Quote entries with surrounding whitespace so they stay visible.
        if entry.is_empty() || entry.trim() != entry {
            writeln!(out, "{entry:?}")?;
        } else {
            writeln!(out, "{entry}")?;
        }
    }
    Ok(())
}
