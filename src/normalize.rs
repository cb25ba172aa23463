//! Case normalization for blocklist entries and queries.

/// Folds ASCII uppercase letters to lowercase; every other character,
/// including non-ASCII letters and whitespace, is left untouched.
///
/// No trimming is done: `" HTTP://A.COM "` becomes `" http://a.com "`.
pub fn normalize(s: &str) -> String {
    s.to_ascii_lowercase()
}
