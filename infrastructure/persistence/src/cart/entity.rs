use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::cart::model::{CartItem, ShoppingCart};
use business::domain::shared::money::Price;
use business::domain::shared::value_objects::{Quantity, UserId};

#[derive(Debug, FromRow)]
pub struct ShoppingCartEntity {
    pub id: Uuid,
    pub user_id: String,
    pub version: i64,
    pub created_at: DateTime<Utc>,
}

impl ShoppingCartEntity {
    pub fn into_domain(self, items: Vec<CartItem>) -> ShoppingCart {
        ShoppingCart::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.version,
            items,
            self.created_at,
        )
    }
}

/// A cart line joined with its movie's current title and price.
#[derive(Debug, FromRow)]
pub struct CartItemEntity {
    pub id: Uuid,
    pub cart_id: Uuid,
    pub movie_id: Uuid,
    pub movie_title: String,
    pub unit_price: BigDecimal,
    pub quantity: i32,
}

impl CartItemEntity {
    pub fn into_domain(self) -> CartItem {
        CartItem::from_repository(
            self.id,
            self.cart_id,
            self.movie_id,
            self.movie_title,
            Price::from_repository(self.unit_price),
            Quantity::from_repository(self.quantity),
        )
    }
}
