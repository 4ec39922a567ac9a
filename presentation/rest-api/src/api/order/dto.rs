use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::order::model::{Order, OrderItem};

#[derive(Debug, Clone, Object)]
pub struct PlaceOrderRequest {
    /// Delivery address (cannot be empty)
    pub shipping_address: String,
}

#[derive(Debug, Clone, Object)]
pub struct UpdatePaymentStatusRequest {
    /// Target status: PENDING, PAID, FAILED or CANCELED
    pub status: String,
}

#[derive(Debug, Clone, Object)]
pub struct OrderItemResponse {
    /// Order line identifier
    pub id: String,
    pub movie_id: String,
    pub movie_title: String,
    pub quantity: u32,
    /// Unit price paid, fixed at checkout
    pub price_at_purchase: String,
    /// price_at_purchase × quantity
    pub line_total: String,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            id: item.id.to_string(),
            movie_id: item.movie_id.to_string(),
            line_total: item.line_total().with_scale(2).to_string(),
            movie_title: item.movie_title,
            quantity: item.quantity.value(),
            price_at_purchase: item.price_at_purchase.to_string(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct OrderResponse {
    /// Order identifier
    pub id: String,
    /// Checkout timestamp
    pub order_date: DateTime<Utc>,
    pub shipping_address: String,
    /// PENDING, PAID, FAILED or CANCELED
    pub payment_status: String,
    pub items: Vec<OrderItemResponse>,
    /// Sum of line totals at purchase prices
    pub total: String,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id.to_string(),
            order_date: order.order_date,
            shipping_address: order.shipping_address.to_string(),
            payment_status: order.payment_status.to_string(),
            total: order.total().to_string(),
            items: order.items.into_iter().map(|i| i.into()).collect(),
        }
    }
}
