use std::sync::LazyLock;

use regex::Regex;

/// Token used when a display name sanitizes to nothing.
pub const FALLBACK_TOKEN: &str = "portfolio";

/// Anything that is not a word character, hyphen, underscore or period.
static UNSAFE_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^-\w.]").expect("unsafe-char pattern is valid"));

/// Converts a display name into a filesystem-safe token.
///
/// Spaces become underscores; every other character outside `[-\w.]` is removed.
/// Falls back to [`FALLBACK_TOKEN`] when nothing survives.
pub fn sanitize(display_name: &str) -> String {
    let underscored = display_name.trim().replace(' ', "_");
    let token = UNSAFE_CHARS.replace_all(&underscored, "");
    if token.is_empty() {
        FALLBACK_TOKEN.to_string()
    } else {
        token.into_owned()
    }
}
