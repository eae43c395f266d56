//! Display formatting for rupee amounts, dates, and savings period keys.
//!
//! Output is fixed to the `en-IN` locale the product ships with. Amounts
//! round half away from zero at two decimals, never truncate, and drop
//! trailing fraction zeros (`0` renders as `₹0`, not `₹0.00`).

use anyhow::Result;
use chrono::{DateTime, Datelike, NaiveDate};
use rust_decimal::{Decimal, RoundingStrategy};

/// Renders a rupee amount with Indian digit grouping: the last three
/// integer digits form one group, every group above is two digits
/// (`₹12,34,567.89`). Up to two fraction digits are kept.
pub fn format_currency(amount: Decimal) -> String {
    let rounded = amount
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let text = rounded.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (text.as_str(), None),
    };

    let mut out = String::new();
    if negative {
        out.push('-');
    }
    out.push('₹');
    out.push_str(&group_indian_digits(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

/// Reads an amount back out of a formatted rupee string, for reports that
/// round-trip displayed figures. Strips the symbol and grouping separators.
pub fn parse_currency(text: &str) -> Result<Decimal> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    if cleaned.is_empty() {
        return Err(anyhow::anyhow!("No amount found in {:?}.", text));
    }
    Decimal::from_str_exact(&cleaned)
        .map_err(|err| anyhow::anyhow!("Cannot parse amount {:?}: {}", text, err))
}

/// Renders a store timestamp or plain date as an `en-IN` medium date,
/// e.g. `15 Aug 2025`.
///
/// Accepts RFC 3339 timestamps (the store's `created_at` shape) or bare
/// `YYYY-MM-DD`. Anything else is an error; an unparseable date is a
/// caller defect, never silently replaced with today.
pub fn format_date(value: &str) -> Result<String> {
    let date = DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.date_naive())
        .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
        .map_err(|_| anyhow::anyhow!("Cannot parse date {:?}.", value))?;
    Ok(date.format("%-d %b %Y").to_string())
}

/// Stable `YYYY-MM` key identifying a savings period.
///
/// Taking a calendar date keeps the key free of time-of-day and timezone
/// artifacts that could shift a contribution across a month boundary.
pub fn period_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

fn group_indian_digits(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use rust_decimal_macros::dec;

    #[rstest]
    #[case(dec!(0), "₹0")]
    #[case(dec!(0.5), "₹0.5")]
    #[case(dec!(100), "₹100")]
    #[case(dec!(1000), "₹1,000")]
    #[case(dec!(100000), "₹1,00,000")]
    #[case(dec!(1234567.89), "₹12,34,567.89")]
    #[case(dec!(10000000), "₹1,00,00,000")]
    fn currency_renders_with_indian_grouping(#[case] amount: Decimal, #[case] expected: &str) {
        assert_eq!(format_currency(amount), expected);
    }

    #[test]
    fn currency_rounds_half_away_from_zero() {
        assert_eq!(format_currency(dec!(2.005)), "₹2.01");
        assert_eq!(format_currency(dec!(2.004)), "₹2");
        assert_eq!(format_currency(dec!(-2.005)), "-₹2.01");
    }

    #[test]
    fn currency_drops_trailing_fraction_zeros() {
        assert_eq!(format_currency(dec!(100.10)), "₹100.1");
        assert_eq!(format_currency(dec!(100.00)), "₹100");
    }

    #[rstest]
    #[case(dec!(0))]
    #[case(dec!(0.5))]
    #[case(dec!(1234567.89))]
    fn currency_formatting_round_trips(#[case] amount: Decimal) {
        let formatted = format_currency(amount);
        let reparsed = parse_currency(&formatted).unwrap();
        assert_eq!(format_currency(reparsed), formatted);
    }

    #[test]
    fn parse_rejects_non_amounts() {
        assert!(parse_currency("₹").is_err());
        assert!(parse_currency("n/a").is_err());
    }

    #[test]
    fn dates_render_in_medium_indian_style() {
        assert_eq!(format_date("2025-08-15").unwrap(), "15 Aug 2025");
        assert_eq!(
            format_date("2025-08-15T18:30:00+05:30").unwrap(),
            "15 Aug 2025"
        );
        assert_eq!(format_date("2025-01-01").unwrap(), "1 Jan 2025");
    }

    #[test]
    fn invalid_dates_are_errors() {
        assert!(format_date("not-a-date").is_err());
        assert!(format_date("2025-13-40").is_err());
        assert!(format_date("").is_err());
    }

    #[test]
    fn period_key_uses_calendar_year_and_month_only() {
        let date = NaiveDate::from_ymd_opt(2025, 8, 31).unwrap();
        assert_eq!(period_key(date), "2025-08");

        let january = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
        assert_eq!(period_key(january), "2026-01");
    }
}
