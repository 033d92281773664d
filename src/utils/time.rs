//! Time utilities: parsing H:MM[:SS] clock text, safe minute coercion,
//! formatting minutes for display and for storage.

use regex::Regex;
use std::fmt::Display;
use std::sync::LazyLock;

static CLOCK_HMS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,3})\s*:\s*([0-5]?\d)\s*:\s*([0-5]?\d)\s*$").expect("valid H:MM:SS regex")
});

static CLOCK_HM: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d{1,3})\s*:\s*([0-5]?\d)\s*$").expect("valid H:MM regex")
});

/// Parse `H:MM:SS` (seconds discarded) or `H:MM` into minutes.
///
/// Hours are limited to three digits, minutes and seconds to 0..=59.
/// Anything else, including empty text, is `None`.
pub fn parse_clock(text: &str) -> Option<i64> {
    let caps = CLOCK_HMS.captures(text).or_else(|| CLOCK_HM.captures(text))?;

    let hh: i64 = caps.get(1)?.as_str().parse().ok()?;
    let mm: i64 = caps.get(2)?.as_str().parse().ok()?;
    Some(hh * 60 + mm)
}

/// Coerce a numeric-looking value to non-negative whole minutes.
///
/// A comma is accepted as decimal separator, the fractional part is truncated.
/// Negative, non-finite or unparseable input yields `default`.
pub fn to_minutes_or(x: impl Display, default: i64) -> i64 {
    let s = x.to_string().trim().replace(',', ".");

    match s.parse::<f64>() {
        Ok(v) if v.is_finite() => {
            let whole = v.trunc() as i64;
            if whole >= 0 { whole } else { default }
        }
        _ => default,
    }
}

/// Same as [`to_minutes_or`] with a default of 0.
pub fn to_minutes_safe(x: impl Display) -> i64 {
    to_minutes_or(x, 0)
}

/// Separate hours and minutes parts combined into minutes, each part
/// coerced with [`to_minutes_safe`]. Saturates at `i64::MAX`.
pub fn hours_and_minutes(hours: impl Display, minutes: impl Display) -> i64 {
    to_minutes_safe(hours)
        .saturating_mul(60)
        .saturating_add(to_minutes_safe(minutes))
}

/// Display form of canonical minutes: `HH:MM` (hours unbounded).
/// Unknown or negative values render as empty text.
pub fn render(minutes: Option<i64>) -> String {
    match minutes {
        Some(m) if m >= 0 => format!("{:02}:{:02}", m / 60, m % 60),
        _ => String::new(),
    }
}

/// Storage form of a duration: `H:MM:SS` with unpadded hours (120 → `2:00:00`).
pub fn clock_text(minutes: i64) -> String {
    let m = minutes.max(0);
    format!("{}:{:02}:00", m / 60, m % 60)
}
