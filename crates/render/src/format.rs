//! Currency and percentage formatting.

use costlens_shared::types::Money;
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount with symbol, thousands separators and two decimals.
///
/// `1234.5` in USD becomes `$1,234.50`; negatives put the sign first
/// (`-$5.00`).
#[must_use]
pub fn format_money(money: Money) -> String {
    let rounded = Money::new(round_cents(money.amount), money.currency);
    let sign = if rounded.is_negative() { "-" } else { "" };
    let digits = format!("{:.2}", rounded.amount.abs());

    let (whole, cents) = match digits.split_once('.') {
        Some((whole, cents)) => (whole, cents),
        None => (digits.as_str(), "00"),
    };

    format!(
        "{sign}{symbol}{whole}.{cents}",
        symbol = rounded.currency.symbol(),
        whole = group_thousands(whole),
    )
}

/// Formats a percentage with an explicit sign and two decimals (`+12.34%`).
#[must_use]
pub fn format_percent(percent: Decimal) -> String {
    let rounded = round_cents(percent);
    let sign = if rounded < Decimal::ZERO { "-" } else { "+" };
    format!("{sign}{:.2}%", rounded.abs())
}

fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
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
