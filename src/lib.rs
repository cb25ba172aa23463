//! urlblock: case-insensitive, exact-match URL blocklist lookups.
//!
//! ```text
//! blocklist file → load_blocklist → Blocklist ─┐
//!                                               ├→ is_url_blocked → bool
//!                               query URL ─────┘
//! ```
//!
//! Entries and queries are folded to ASCII lowercase and compared as opaque
//! strings; there is no URL parsing, trimming, or pattern matching.

pub mod blocklist;
pub mod cli;
pub mod config;
pub mod logging;
pub mod normalize;

pub use blocklist::{is_url_blocked, load_blocklist, try_load_blocklist, Blocklist, LoadError};
pub use normalize::normalize;
