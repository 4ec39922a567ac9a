use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::shared::money::{Price, sum_amounts};
use crate::domain::shared::value_objects::{Quantity, UserId};

/// One movie in a cart. `unit_price` is the movie's current catalog price,
/// read together with the cart; it is never persisted on the line.
#[derive(Debug, Clone)]
pub struct CartItem {
    pub id: Uuid,
    pub cart_id: Uuid,
    pub movie_id: Uuid,
    pub movie_title: String,
    pub unit_price: Price,
    pub quantity: Quantity,
}

impl CartItem {
    pub fn line_total(&self) -> BigDecimal {
        self.unit_price.times(self.quantity.value())
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        cart_id: Uuid,
        movie_id: Uuid,
        movie_title: String,
        unit_price: Price,
        quantity: Quantity,
    ) -> Self {
        Self {
            id,
            cart_id,
            movie_id,
            movie_title,
            unit_price,
            quantity,
        }
    }
}

/// A user's single shopping cart.
///
/// `version` increases on every mutation of the cart's lines; checkout only
/// succeeds against the version it read.
#[derive(Debug, Clone)]
pub struct ShoppingCart {
    pub id: Uuid,
    pub user_id: UserId,
    pub version: i64,
    pub items: Vec<CartItem>,
    pub created_at: DateTime<Utc>,
}

impl ShoppingCart {
    pub fn new(user_id: UserId) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            version: 0,
            items: Vec::new(),
            created_at: Utc::now(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Σ live price × quantity. Recomputed on every call.
    pub fn total(&self) -> BigDecimal {
        sum_amounts(self.items.iter().map(CartItem::line_total))
    }

    pub fn item_count(&self) -> u64 {
        self.items
            .iter()
            .map(|item| u64::from(item.quantity.value()))
            .sum()
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        version: i64,
        items: Vec<CartItem>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            version,
            items,
            created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{cart, customer_id, movie};
    use proptest::prelude::*;
    use std::str::FromStr;

    #[test]
    fn should_start_empty_with_zero_total() {
        let cart = ShoppingCart::new(customer_id());

        assert!(cart.is_empty());
        assert_eq!(cart.total().to_string(), "0.00");
        assert_eq!(cart.version, 0);
    }

    #[test]
    fn should_sum_price_times_quantity() {
        let movie_a = movie("MovieA", "10");
        let movie_b = movie("MovieB", "5");

        let cart = cart(customer_id(), &[(&movie_a, 2), (&movie_b, 1)]);

        assert_eq!(cart.total().to_string(), "25.00");
        assert_eq!(cart.item_count(), 3);
    }

    #[test]
    fn should_compute_line_total() {
        let movie = movie("Heat", "7.25");
        let cart = cart(customer_id(), &[(&movie, 4)]);

        assert_eq!(cart.items[0].line_total(), BigDecimal::from_str("29").unwrap());
    }

    #[test]
    fn should_reflect_live_price_on_next_read() {
        let mut movie_a = movie("MovieA", "10");
        let before = cart(customer_id(), &[(&movie_a, 2)]);

        movie_a.price = crate::test_support::price("15");
        let after = cart(customer_id(), &[(&movie_a, 2)]);

        assert_eq!(before.total().to_string(), "20.00");
        assert_eq!(after.total().to_string(), "30.00");
    }

    proptest! {
        #[test]
        fn total_is_sum_of_line_totals(lines in prop::collection::vec((0u32..100_000, 1u32..50), 0..12)) {
            let movies: Vec<_> = lines
                .iter()
                .enumerate()
                .map(|(i, (cents, _))| {
                    let amount = BigDecimal::new((*cents).into(), 2);
                    movie(&format!("Movie{}", i), &amount.to_string())
                })
                .collect();
            let pairs: Vec<_> = movies
                .iter()
                .zip(lines.iter())
                .map(|(m, (_, qty))| (m, *qty))
                .collect();

            let cart = cart(customer_id(), &pairs);

            let expected_cents: u64 = lines.iter().map(|(cents, qty)| u64::from(*cents) * u64::from(*qty)).sum();
            prop_assert_eq!(cart.total(), BigDecimal::new(expected_cents.into(), 2));
        }
    }
}
