//! Display formatting for amounts and timestamps (en-US conventions).

use chrono::{DateTime, NaiveDate, TimeZone};
use rust_decimal::{Decimal, RoundingStrategy};
use std::fmt::Display;

use crate::errors::ServiceError;

const DEFAULT_CURRENCY_SYMBOL: &str = "$";
const DATE_FORMAT: &str = "%b %-d, %Y";
const DATE_TIME_FORMAT: &str = "%b %-d, %Y, %I:%M %p";

/// `$1,234.50`: two decimals, comma grouping, half-away-from-zero rounding.
pub fn format_currency(amount: Decimal) -> String {
    format_currency_with_symbol(amount, DEFAULT_CURRENCY_SYMBOL)
}

pub fn format_currency_with_symbol(amount: Decimal, symbol: &str) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let digits = format!("{:.2}", rounded.abs());
    let (whole, cents) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));
    format!("{}{}{}.{}", sign, symbol, group_thousands(whole), cents)
}

/// Float entry point for callers holding binary amounts. Non-finite input is rejected.
pub fn format_currency_f64(amount: f64) -> Result<String, ServiceError> {
    let decimal = Decimal::from_f64_retain(amount).ok_or_else(|| {
        ServiceError::InvalidInput(format!("cannot format {} as currency", amount))
    })?;
    Ok(format_currency(decimal))
}

fn group_thousands(whole: &str) -> String {
    let len = whole.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `Jan 15, 2024`
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format(DATE_FORMAT).to_string()
}

pub fn format_naive_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// `Jan 15, 2024, 03:00 PM`
pub fn format_date_time<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: Display,
{
    date.format(DATE_TIME_FORMAT).to_string()
}

/// Renders an optional timestamp, or `fallback` when it has not been recorded.
pub fn format_optional_date_time<Tz: TimeZone>(
    date: Option<&DateTime<Tz>>,
    fallback: &str,
) -> String
where
    Tz::Offset: Display,
{
    date.map(format_date_time)
        .unwrap_or_else(|| fallback.to_string())
}
