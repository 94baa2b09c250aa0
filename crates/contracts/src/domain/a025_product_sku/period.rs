//! Period formatting for SKU validity
//!
//! Converts a day count into a "<amount> <unit>" string and back.
//! Years win over months: 360 days is "12 months", 730 days is "2 years".

use super::aggregate::{ValidityUnit, DAYS_PER_MONTH, DAYS_PER_YEAR};

/// Format a day count as "<amount> <unit>"
/// Example: 60 -> "2 months", 365 -> "1 year", 45 -> "45 days"
pub fn days_to_unit_string(days: u64) -> String {
    let (amount, unit) = if days > 0 && days % DAYS_PER_YEAR == 0 {
        (days / DAYS_PER_YEAR, "year")
    } else if days > 0 && days % DAYS_PER_MONTH == 0 {
        (days / DAYS_PER_MONTH, "month")
    } else {
        (days, "day")
    };

    if amount == 1 {
        format!("{} {}", amount, unit)
    } else {
        format!("{} {}s", amount, unit)
    }
}

/// Parse "<amount> <unit>" back into form values
///
/// Units the form cannot express (days, garbage) come back as `Unset`
/// so the user has to pick one explicitly.
pub fn parse_unit_string(s: &str) -> (u32, ValidityUnit) {
    let mut parts = s.split_whitespace();
    let amount = parts
        .next()
        .and_then(|a| a.parse::<u32>().ok())
        .unwrap_or(0);
    let unit = parts
        .next()
        .and_then(|u| u.parse::<ValidityUnit>().ok())
        .unwrap_or_default();
    (amount, unit)
}
