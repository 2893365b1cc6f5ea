//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;
use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Narrow no-break space, the fr-FR thousands separator.
const GROUP_SEPARATOR: char = '\u{202f}';

/// Format an amount the way fr-FR displays euros: `1 234,50 €`.
///
/// Rounds half away from zero to cents.
#[must_use]
pub fn format_eur(amount: Decimal) -> String {
    let mut cents = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let negative = cents.is_sign_negative() && !cents.is_zero();
    cents = cents.abs();
    cents.rescale(2);

    let text = cents.to_string();
    let (units, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let digits = units.len();
    let mut grouped = String::with_capacity(digits + digits / 3 * GROUP_SEPARATOR.len_utf8());
    for (i, digit) in units.chars().enumerate() {
        if i > 0 && (digits - i) % 3 == 0 {
            grouped.push(GROUP_SEPARATOR);
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped},{fraction}\u{a0}€")
}

/// Formats a price as euros.
///
/// Usage in templates: `{{ product.price|eur }}`
#[askama::filter_fn]
pub fn eur(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let amount = Decimal::from_str(&value.to_string()).map_err(askama::Error::custom)?;
    Ok(format_eur(amount))
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}
