use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::OrderError;
use super::value_objects::{PaymentStatus, ShippingAddress};
use crate::domain::cart::model::ShoppingCart;
use crate::domain::shared::money::{Price, sum_amounts};
use crate::domain::shared::validation::ValidationErrors;
use crate::domain::shared::value_objects::{Quantity, UserId};

/// A purchased line. `price_at_purchase` is copied from the cart at checkout
/// and never re-read from the catalog.
#[derive(Debug, Clone)]
pub struct OrderItem {
    pub id: Uuid,
    pub order_id: Uuid,
    pub movie_id: Uuid,
    pub movie_title: String,
    pub quantity: Quantity,
    pub price_at_purchase: Price,
}

impl OrderItem {
    pub fn line_total(&self) -> BigDecimal {
        self.price_at_purchase.times(self.quantity.value())
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        order_id: Uuid,
        movie_id: Uuid,
        movie_title: String,
        quantity: Quantity,
        price_at_purchase: Price,
    ) -> Self {
        Self {
            id,
            order_id,
            movie_id,
            movie_title,
            quantity,
            price_at_purchase,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub user_id: UserId,
    pub order_date: DateTime<Utc>,
    pub shipping_address: ShippingAddress,
    pub payment_status: PaymentStatus,
    pub items: Vec<OrderItem>,
}

impl Order {
    /// Snapshots the cart into a pending order.
    pub fn from_cart(cart: &ShoppingCart, shipping_address: String) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }
        let shipping_address = ShippingAddress::new(shipping_address)
            .map_err(|e| OrderError::Validation(ValidationErrors::single("shipping_address", e)))?;

        let id = Uuid::new_v4();
        let items = cart
            .items
            .iter()
            .map(|line| OrderItem {
                id: Uuid::new_v4(),
                order_id: id,
                movie_id: line.movie_id,
                movie_title: line.movie_title.clone(),
                quantity: line.quantity,
                price_at_purchase: line.unit_price.clone(),
            })
            .collect();

        Ok(Self {
            id,
            user_id: cart.user_id.clone(),
            order_date: Utc::now(),
            shipping_address,
            payment_status: PaymentStatus::Pending,
            items,
        })
    }

    /// Σ price at purchase × quantity.
    pub fn total(&self) -> BigDecimal {
        sum_amounts(self.items.iter().map(OrderItem::line_total))
    }

    pub fn is_owned_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    pub fn with_payment_status(&self, next: PaymentStatus) -> Result<Self, OrderError> {
        if !self.payment_status.can_transition_to(next) {
            return Err(OrderError::InvalidStatusTransition {
                from: self.payment_status,
                to: next,
            });
        }
        Ok(Self {
            payment_status: next,
            ..self.clone()
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        order_date: DateTime<Utc>,
        shipping_address: ShippingAddress,
        payment_status: PaymentStatus,
        items: Vec<OrderItem>,
    ) -> Self {
        Self {
            id,
            user_id,
            order_date,
            shipping_address,
            payment_status,
            items,
        }
    }
}
