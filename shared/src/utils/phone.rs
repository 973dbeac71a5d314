//! Phone number utilities
//!
//! Numbers are Kenyan: national form `07XXXXXXXX` / `01XXXXXXXX`, or
//! international form `+2547XXXXXXXX` / `+2541XXXXXXXX`. The canonical
//! stored form is the international one.

use once_cell::sync::Lazy;
use regex::Regex;

/// Country calling code without the leading `+`
pub const COUNTRY_CODE: &str = "254";

/// National trunk prefix
pub const TRUNK_PREFIX: char = '0';

// trunk or international prefix, then 1 or 7, then 8 digits
static KENYA_PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\+254|0)[17]\d{8}$").expect("valid phone regex"));

/// Remove all whitespace, including interior spaces
fn strip_whitespace(phone: &str) -> String {
    phone.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Check whether a phone number has a valid Kenyan shape
pub fn is_valid_phone(phone: &str) -> bool {
    KENYA_PHONE_REGEX.is_match(&strip_whitespace(phone))
}

/// Convert a phone number to the canonical international form
///
/// Total: input that is neither national nor bare-country-code is returned
/// with whitespace removed but otherwise unchanged.
pub fn sanitize_phone(phone: &str) -> String {
    let cleaned = strip_whitespace(phone.trim());
    if let Some(rest) = cleaned.strip_prefix(TRUNK_PREFIX) {
        return format!("+{}{}", COUNTRY_CODE, rest);
    }
    if cleaned.starts_with(COUNTRY_CODE) {
        return format!("+{}", cleaned);
    }
    cleaned
}

/// Mask a phone number for logs (e.g., +25****5678)
pub fn mask_phone_number(phone: &str) -> String {
    let normalized = strip_whitespace(phone);
    let chars: Vec<char> = normalized.chars().collect();
    if chars.len() >= 7 {
        let head: String = chars[..3].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}****{}", head, tail)
    } else {
        "****".to_string()
    }
}
