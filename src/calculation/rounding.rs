//! Currency and hour rounding.

use rust_decimal::{Decimal, RoundingStrategy};

/// Decimal places kept for currency amounts.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Decimal places kept for reported hours.
pub const HOURS_DECIMAL_PLACES: u32 = 2;

/// Rounds a currency amount to cents, half away from zero.
///
/// ```
/// use salary_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("511.3636").unwrap()), Decimal::from_str("511.36").unwrap());
/// assert_eq!(round_currency(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.13").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds an hour figure for reporting.
pub fn round_hours(hours: Decimal) -> Decimal {
    hours.round_dp_with_strategy(HOURS_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_currency_midpoint_goes_up() {
        assert_eq!(round_currency(dec("1363.635")), dec("1363.64"));
        assert_eq!(round_currency(dec("1363.634")), dec("1363.63"));
    }

    #[test]
    fn test_round_currency_keeps_exact_cents() {
        assert_eq!(round_currency(dec("1875.00")), dec("1875.00"));
    }

    #[test]
    fn test_round_hours_of_a_third() {
        // 20 minutes
        assert_eq!(round_hours(dec("20") / dec("60")), dec("0.33"));
    }
}
