use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::order::model::{Order, OrderItem};
use business::domain::order::value_objects::{PaymentStatus, ShippingAddress};
use business::domain::shared::money::Price;
use business::domain::shared::value_objects::{Quantity, UserId};

#[derive(Debug, FromRow)]
pub struct OrderEntity {
    pub id: Uuid,
    pub user_id: String,
    pub order_date: DateTime<Utc>,
    pub shipping_address: String,
    pub payment_status: String,
}

impl OrderEntity {
    pub fn into_domain(self, items: Vec<OrderItem>) -> Order {
        Order::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.order_date,
            ShippingAddress::from_repository(self.shipping_address),
            self.payment_status
                .parse::<PaymentStatus>()
                .unwrap_or_default(),
            items,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct OrderItemEntity {
    pub id: Uuid,
    pub order_id: Uuid,
    pub movie_id: Uuid,
    pub movie_title: String,
    pub quantity: i32,
    pub price_at_purchase: BigDecimal,
}

impl OrderItemEntity {
    pub fn into_domain(self) -> OrderItem {
        OrderItem::from_repository(
            self.id,
            self.order_id,
            self.movie_id,
            self.movie_title,
            Quantity::from_repository(self.quantity),
            Price::from_repository(self.price_at_purchase),
        )
    }
}
