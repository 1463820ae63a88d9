//! Anchor slug derivation.

use regex::Regex;
use std::sync::OnceLock;

/// Whitespace as ECMAScript defines it. Unlike the regex crate's `\s` this
/// includes U+FEFF and excludes U+0085.
const WHITESPACE: &str =
    r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

fn disallowed_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // ASCII word characters only.
    RE.get_or_init(|| {
        Regex::new(&format!("[^0-9A-Za-z_{}-]", WHITESPACE)).expect("valid slug filter pattern")
    })
}

fn whitespace_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(&format!("[{}]+", WHITESPACE)).expect("valid whitespace pattern"))
}

/// Derive an anchor slug from arbitrary text.
///
/// Lower-cases the input, drops every character that is not a word
/// character, whitespace or `-`, then turns each whitespace run into a
/// single `-`. Total and deterministic; collisions are not resolved.
///
/// # Example
///
/// ```
/// use docblocks::slug;
///
/// assert_eq!(slug("Getting Started"), "getting-started");
/// assert_eq!(slug("What's New?"), "whats-new");
/// ```
pub fn slug(text: &str) -> String {
    let lower = text.to_lowercase();
    let kept = disallowed_chars().replace_all(&lower, "");
    whitespace_runs().replace_all(&kept, "-").into_owned()
}

/// Resolve an anchor id: a non-empty explicit id wins, otherwise the slug of `fallback_text`.
pub fn resolve_id(explicit: Option<&str>, fallback_text: &str) -> String {
    match explicit.filter(|id| !id.is_empty()) {
        Some(id) => id.to_string(),
        None => slug(fallback_text),
    }
}
