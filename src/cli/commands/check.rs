//! `urlblock check <url>...` – report each URL as blocked or allowed.

use anyhow::Result;
use std::io::Write;

use crate::blocklist::Blocklist;

/// Writes `blocked\t<url>` or `allowed\t<url>` per URL, in argument order.
/// Returns the number of blocked URLs.
pub fn run_check(blocklist: &Blocklist, urls: &[String], out: &mut impl Write) -> Result<usize> {
    let mut blocked = 0;
    for url in urls {
        let verdict = if blocklist.is_blocked(url) {
            blocked += 1;
            "blocked"
        } else {
            "allowed"
        };
        tracing::debug!(url = %url, verdict, "checked url");
        writeln!(out, "{verdict}\t{url}")?;
    }
    Ok(blocked)
}
