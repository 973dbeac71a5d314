//! String helpers

use once_cell::sync::Lazy;
use regex::Regex;

static NON_SLUG_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\s-]").expect("valid slug regex"));
static SLUG_SEPARATORS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s_-]+").expect("valid separator regex"));

/// Default length used by [`truncate_default`]
pub const DEFAULT_TRUNCATE_LENGTH: usize = 50;

/// Upper-case the first character and lower-case the rest
pub fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().to_lowercase().chars()).collect(),
        None => String::new(),
    }
}

/// URL-friendly slug: `"  Hello, World!  "` → `"hello-world"`
pub fn slugify(value: &str) -> String {
    let lowered = value.to_lowercase();
    let stripped = NON_SLUG_CHARS.replace_all(lowered.trim(), "");
    let hyphenated = SLUG_SEPARATORS.replace_all(&stripped, "-");
    hyphenated.trim_matches('-').to_string()
}

/// Cut to `length` characters and append `...` when longer
pub fn truncate(value: &str, length: usize) -> String {
    if value.chars().count() <= length {
        return value.to_string();
    }
    let head: String = value.chars().take(length).collect();
    format!("{}...", head)
}

pub fn truncate_default(value: &str) -> String {
    truncate(value, DEFAULT_TRUNCATE_LENGTH)
}
