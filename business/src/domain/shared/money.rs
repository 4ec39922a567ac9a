use bigdecimal::BigDecimal;
use num_traits::{Signed, Zero};

/// Prices are stored as NUMERIC(6, 2).
const DECIMAL_PLACES: i64 = 2;
const UPPER_BOUND: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PriceError {
    #[error("price.negative")]
    Negative,
    #[error("price.too_many_decimals")]
    TooManyDecimals,
    #[error("price.too_large")]
    TooLarge,
}

/// A non-negative amount with at most two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd)]
pub struct Price(BigDecimal);

impl Price {
    pub fn new(amount: BigDecimal) -> Result<Self, PriceError> {
        if amount.is_negative() {
            return Err(PriceError::Negative);
        }
        let (_, scale) = amount.normalized().as_bigint_and_exponent();
        if scale > DECIMAL_PLACES {
            return Err(PriceError::TooManyDecimals);
        }
        if amount >= BigDecimal::from(UPPER_BOUND) {
            return Err(PriceError::TooLarge);
        }
        Ok(Self(amount.with_scale(DECIMAL_PLACES)))
    }

    /// Wraps a NUMERIC(6, 2) column value.
    pub fn from_repository(amount: BigDecimal) -> Self {
        Self(amount.with_scale(DECIMAL_PLACES))
    }

    pub fn amount(&self) -> &BigDecimal {
        &self.0
    }

    /// Price of `quantity` copies.
    pub fn times(&self, quantity: u32) -> BigDecimal {
        &self.0 * BigDecimal::from(quantity)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sums line amounts into a two-decimal total.
pub fn sum_amounts(amounts: impl IntoIterator<Item = BigDecimal>) -> BigDecimal {
    amounts
        .into_iter()
        .fold(BigDecimal::zero(), |total, amount| total + amount)
        .with_scale(DECIMAL_PLACES)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).unwrap()
    }

    #[test]
    fn should_accept_price_with_two_decimals() {
        let price = Price::new(dec("12.99")).unwrap();
        assert_eq!(price.to_string(), "12.99");
    }

    #[test]
    fn should_pad_whole_prices_to_two_decimals() {
        let price = Price::new(dec("10")).unwrap();
        assert_eq!(price.to_string(), "10.00");
    }

    #[test]
    fn should_accept_trailing_zeros_beyond_two_decimals() {
        assert!(Price::new(dec("4.500")).is_ok());
    }

    #[test]
    fn should_accept_free_items() {
        assert!(Price::new(BigDecimal::zero()).is_ok());
    }

    #[test]
    fn should_reject_negative_price() {
        assert_eq!(Price::new(dec("-0.01")), Err(PriceError::Negative));
    }

    #[test]
    fn should_reject_fractions_of_a_cent() {
        assert_eq!(Price::new(dec("1.001")), Err(PriceError::TooManyDecimals));
    }

    #[test]
    fn should_reject_price_beyond_column_precision() {
        assert_eq!(Price::new(dec("10000")), Err(PriceError::TooLarge));
        assert!(Price::new(dec("9999.99")).is_ok());
    }

    #[test]
    fn should_multiply_by_quantity() {
        let price = Price::new(dec("10.50")).unwrap();
        assert_eq!(price.times(3), dec("31.50"));
    }

    #[test]
    fn should_sum_amounts_to_two_decimals() {
        let total = sum_amounts(vec![dec("20"), dec("5.5")]);
        assert_eq!(total.to_string(), "25.50");
    }

    #[test]
    fn should_sum_nothing_to_zero() {
        assert_eq!(sum_amounts(Vec::new()).to_string(), "0.00");
    }
}
