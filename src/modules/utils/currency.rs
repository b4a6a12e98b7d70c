use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

const CURRENCY_PREFIX: &str = "R$";
const CENT_PLACES: u32 = 2;

/// Format an amount as `R$ 1.234,56`
pub fn format_currency(value: Decimal) -> String {
    let mut rounded =
        value.round_dp_with_strategy(CENT_PLACES, RoundingStrategy::MidpointAwayFromZero);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    rounded = rounded.abs();
    rounded.rescale(CENT_PLACES);

    let digits = rounded.to_string();
    let (integer, fraction) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

    format!(
        "{} {}{},{}",
        CURRENCY_PREFIX,
        if negative { "-" } else { "" },
        group_thousands(integer),
        fraction
    )
}

fn group_thousands(integer: &str) -> String {
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    grouped
}

/// Parse a typed amount; accepts `12.50` or `12,50`.
///
/// Amounts finer than a cent are refused since the statement could not show them.
pub fn parse_amount(input: &str) -> Option<Decimal> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let normalized = if input.contains(',') && !input.contains('.') {
        input.replacen(',', ".", 1)
    } else {
        input.to_string()
    };

    let amount = Decimal::from_str(&normalized).ok()?;
    // Trailing zeros are fine: `12.500` is still whole cents
    if amount.normalize().scale() > CENT_PLACES {
        return None;
    }
    Some(amount)
}
