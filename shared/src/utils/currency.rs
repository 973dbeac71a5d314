//! Currency formatting and parsing

use num_format::{Locale, ToFormattedString};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::errors::{AppError, AppResult};

/// Currency used when none is given
pub const DEFAULT_CURRENCY: &str = "KES";

static LEADING_NUMBER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^-?(\d+\.?\d*|\.\d+)").expect("valid number regex"));

/// Display symbol for an ISO 4217 code in the East Africa locale
pub fn currency_symbol(code: &str) -> String {
    match code.to_uppercase().as_str() {
        "KES" => "Ksh".to_string(),
        "USD" => "US$".to_string(),
        "EUR" => "€".to_string(),
        "GBP" => "£".to_string(),
        other => other.to_string(),
    }
}

/// Format an amount with symbol, thousands grouping and 0-2 fraction digits
///
/// `3480` → `Ksh 3,480`, `1234.5` → `Ksh 1,234.5` (the separator after an
/// alphabetic symbol is a no-break space).
pub fn format_currency(amount: Decimal, code: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() { "-" } else { "" };
    let abs = rounded.abs();

    let whole = abs.trunc().to_u128().unwrap_or_default();
    let cents = (abs.fract() * Decimal::ONE_HUNDRED).to_u32().unwrap_or_default();
    let fraction = match cents {
        0 => String::new(),
        c if c % 10 == 0 => format!(".{}", c / 10),
        c => format!(".{:02}", c),
    };

    let symbol = currency_symbol(code);
    let separator = if symbol.chars().last().is_some_and(char::is_alphabetic) {
        "\u{a0}"
    } else {
        ""
    };

    format!(
        "{}{}{}{}{}",
        sign,
        symbol,
        separator,
        whole.to_formatted_string(&Locale::en),
        fraction
    )
}

/// Parse a formatted amount back to a number
///
/// Everything except digits, `.` and `-` is discarded, then the longest
/// leading decimal number is read.
pub fn parse_currency(input: &str) -> AppResult<Decimal> {
    let cleaned: String = input
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();

    LEADING_NUMBER_REGEX
        .find(&cleaned)
        .map(|m| m.as_str().trim_end_matches('.'))
        .and_then(|number| Decimal::from_str(number).ok())
        .ok_or_else(|| AppError::validation(format!("Invalid currency format: {}", input)))
}
