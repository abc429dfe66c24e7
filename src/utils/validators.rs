//! Pure predicates for URL and shortcode well-formedness.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Compiled pattern for shortcodes, both custom and generated.
static SHORTCODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{4,20}$").unwrap());

/// Returns true if `candidate` parses as an absolute URL.
///
/// Any scheme is accepted, so `mailto:` and `ftp://` links pass. Relative
/// references such as `/path` or `example.com` do not.
///
/// ASCII control characters are rejected even though the URL parser would
/// strip tabs and newlines: the stored string is sent back verbatim in the
/// `Location` header, which cannot carry them.
///
/// # Examples
///
/// ```ignore
/// assert!(is_valid_url("https://example.com/a?b=c"));
/// assert!(!is_valid_url("not-a-url"));
/// ```
pub fn is_valid_url(candidate: &str) -> bool {
    !candidate.chars().any(|c| c.is_ascii_control()) && Url::parse(candidate).is_ok()
}

/// Returns true if `candidate` is 4-20 characters of `A-Z`, `a-z`, `0-9`, `_` or `-`.
pub fn is_valid_shortcode(candidate: &str) -> bool {
    SHORTCODE_REGEX.is_match(candidate)
}
