//! Formatting helpers for presenting chain data.
//!
//! These are pure functions so the display components stay free of logic.

use chrono::DateTime;
use chrono::Local;
use itertools::Itertools;

/// Smallest units per whole token for "micro" denominations (`u` prefix).
pub const MICRO_UNITS: u128 = 1_000_000;

/// Hashes longer than this are abbreviated.
const SHORT_HASH_MAX: usize = 12;
const SHORT_HASH_EDGE: usize = 6;

/// Abbreviates a hash to its first and last 6 characters joined by an ellipsis.
///
/// Hashes of 12 characters or fewer are returned unchanged.
pub fn shorten_hash(hash: &str) -> String {
    let char_count = hash.chars().count();
    if char_count <= SHORT_HASH_MAX {
        return hash.to_string();
    }
    let head: String = hash.chars().take(SHORT_HASH_EDGE).collect();
    let tail: String = hash.chars().skip(char_count - SHORT_HASH_EDGE).collect();
    format!("{head}…{tail}")
}

/// Groups the digits of an integer in threes, e.g. `18235` -> `"18,235"`.
pub fn group_digits(value: impl Into<u128>) -> String {
    let digits = value.into().to_string();
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or_default())
        .join(",")
}

/// Converts a smallest-unit amount into a human readable number.
///
/// Micro denominations are divided by 1,000,000. Results keep at most six
/// fraction digits, rounded half up, and the integer part is digit-grouped.
/// Plain decimals such as a `DecCoin` amount of `"1.5"` are accepted. Anything
/// else is returned as given.
pub fn display_amount(denom: &str, amount: &str) -> String {
    let amount = amount.trim();
    if amount.is_empty() {
        return "0".to_string();
    }
    let Some(millionths) = parse_millionths(amount) else {
        return amount.to_string();
    };

    let shown = if is_micro_denom(denom) {
        (millionths + MICRO_UNITS / 2) / MICRO_UNITS
    } else {
        millionths
    };

    let whole = group_digits(shown / MICRO_UNITS);
    let fraction = shown % MICRO_UNITS;
    if fraction == 0 {
        return whole;
    }
    let fraction = format!("{fraction:06}");
    format!("{whole}.{}", fraction.trim_end_matches('0'))
}

/// Parses an unsigned decimal into millionths of its unit, rounding half up
/// at the seventh fraction digit. `None` for anything that is not digits with
/// at most one dot, or that does not fit.
fn parse_millionths(amount: &str) -> Option<u128> {
    let (int_part, frac_part) = amount.split_once('.').unwrap_or((amount, ""));
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty())
        || !all_digits(int_part)
        || !all_digits(frac_part)
    {
        return None;
    }

    let int_value: u128 = if int_part.is_empty() { 0 } else { int_part.parse().ok()? };
    let digits: Vec<u128> = frac_part
        .bytes()
        .chain(std::iter::repeat(b'0'))
        .take(7)
        .map(|b| u128::from(b - b'0'))
        .collect();
    let frac_value = digits[..6].iter().fold(0u128, |acc, d| acc * 10 + d);
    let round_up = u128::from(digits[6] >= 5);

    int_value
        .checked_mul(MICRO_UNITS)?
        .checked_add(frac_value + round_up)
}

/// Ticker style label for a denomination.
pub fn denom_label(denom: &str) -> String {
    match denom {
        "ucmint" => "CMINT".to_string(),
        "urackd" => "RACKD".to_string(),
        d if is_micro_denom(d) => d[1..].to_uppercase(),
        d => d.to_string(),
    }
}

/// Renders an RFC 3339 timestamp in local time.
///
/// Empty input stays empty and unparseable input is shown verbatim.
pub fn format_timestamp(timestamp: &str) -> String {
    if timestamp.is_empty() {
        return String::new();
    }
    match DateTime::parse_from_rfc3339(timestamp) {
        Ok(t) => t
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        Err(_) => timestamp.to_string(),
    }
}

fn is_micro_denom(denom: &str) -> bool {
    denom.len() > 1 && denom.starts_with('u')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn micro_amounts_are_converted() {
        assert_eq!(display_amount("ucmint", "125000000"), "125");
        assert_eq!(display_amount("urackd", "84500000"), "84.5");
        assert_eq!(display_amount("ucmint", "1"), "0.000001");
        assert_eq!(display_amount("ucmint", "1234567890000"), "1,234,567.89");
    }

    #[test]
    fn other_denoms_are_not_converted() {
        assert_eq!(display_amount("cmint", "500"), "500");
        assert_eq!(display_amount("stake", "125000000"), "125,000,000");
    }

    #[test]
    fn odd_amounts() {
        assert_eq!(display_amount("ucmint", ""), "0");
        assert_eq!(display_amount("ucmint", "abc"), "abc");
        assert_eq!(display_amount("ucmint", "0"), "0");
        assert_eq!(display_amount("ucmint", "1.2.3"), "1.2.3");
        assert_eq!(display_amount("ucmint", "."), ".");
        assert_eq!(display_amount("ucmint", "-5"), "-5");
    }

    #[test]
    fn decimal_amounts_are_converted() {
        assert_eq!(display_amount("ucmint", "1500000.4"), "1.5");
        assert_eq!(display_amount("ucmint", "1500000.5"), "1.500001");
        assert_eq!(display_amount("ucmint", "1.5"), "0.000002");
        assert_eq!(display_amount("ucmint", "1.4"), "0.000001");
        assert_eq!(display_amount("ucmint", "0.4"), "0");
        assert_eq!(display_amount("ucmint", "125000000.000"), "125");
        assert_eq!(display_amount("stake", "1234.5"), "1,234.5");
        assert_eq!(display_amount("stake", "0.0000005"), "0.000001");
        assert_eq!(display_amount("stake", ".25"), "0.25");
    }

    #[test]
    fn long_hashes_are_shortened() {
        assert_eq!(shorten_hash("A2F4F1DEMO1234567890ABCDEF"), "A2F4F1…ABCDEF");
        assert_eq!(shorten_hash("1234567890123"), "123456…890123");
    }

    #[test]
    fn short_hashes_are_unchanged() {
        assert_eq!(shorten_hash("123456789012"), "123456789012");
        assert_eq!(shorten_hash("ABC"), "ABC");
        assert_eq!(shorten_hash(""), "");
    }

    #[test]
    fn digits_are_grouped() {
        assert_eq!(group_digits(0u64), "0");
        assert_eq!(group_digits(999u64), "999");
        assert_eq!(group_digits(18235u64), "18,235");
        assert_eq!(group_digits(1234567u64), "1,234,567");
    }

    #[test]
    fn labels() {
        assert_eq!(denom_label("ucmint"), "CMINT");
        assert_eq!(denom_label("urackd"), "RACKD");
        assert_eq!(denom_label("uxp"), "XP");
        assert_eq!(denom_label("stake"), "stake");
        assert_eq!(denom_label("u"), "u");
    }

    #[test]
    fn timestamps() {
        assert_eq!(format_timestamp(""), "");
        assert_eq!(format_timestamp("not a time"), "not a time");

        let formatted = format_timestamp("2025-11-26T11:14:10Z");
        assert_eq!(formatted.len(), "2025-11-26 11:14:10".len());
        assert_ne!(formatted, "2025-11-26T11:14:10Z");
    }
}
