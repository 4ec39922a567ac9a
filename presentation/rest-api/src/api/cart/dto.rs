use poem_openapi::Object;

use business::domain::cart::model::{CartItem, ShoppingCart};

fn default_quantity() -> i64 {
    1
}

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Movie to add
    pub movie_id: String,
    /// Copies to add (>= 1, default 1); merged into an existing line
    #[oai(default = "default_quantity")]
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartItemRequest {
    /// New quantity (>= 1); use DELETE to remove a line
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    /// Cart line identifier
    pub id: String,
    pub movie_id: String,
    pub movie_title: String,
    /// Current catalog price
    pub unit_price: String,
    pub quantity: u32,
    /// unit_price × quantity
    pub line_total: String,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            id: item.id.to_string(),
            movie_id: item.movie_id.to_string(),
            line_total: item.line_total().with_scale(2).to_string(),
            movie_title: item.movie_title,
            unit_price: item.unit_price.to_string(),
            quantity: item.quantity.value(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    /// Cart identifier
    pub id: String,
    pub items: Vec<CartItemResponse>,
    /// Number of copies across all lines
    pub item_count: u64,
    /// Sum of line totals at current prices
    pub total: String,
}

impl From<ShoppingCart> for CartResponse {
    fn from(cart: ShoppingCart) -> Self {
        Self {
            id: cart.id.to_string(),
            item_count: cart.item_count(),
            total: cart.total().to_string(),
            items: cart.items.into_iter().map(|i| i.into()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::money::Price;
    use business::domain::shared::value_objects::{Quantity, UserId};
    use chrono::Utc;
    use uuid::Uuid;

    fn line(cart_id: Uuid, title: &str, price: i32, quantity: i64) -> CartItem {
        CartItem::from_repository(
            Uuid::new_v4(),
            cart_id,
            Uuid::new_v4(),
            title.to_string(),
            Price::from_repository(price.into()),
            Quantity::new(quantity).unwrap(),
        )
    }

    #[test]
    fn should_render_totals_as_decimal_strings() {
        let cart_id = Uuid::new_v4();
        let cart = ShoppingCart::from_repository(
            cart_id,
            UserId::new("customer"),
            1,
            vec![line(cart_id, "MovieA", 10, 2), line(cart_id, "MovieB", 5, 1)],
            Utc::now(),
        );

        let response = CartResponse::from(cart);

        assert_eq!(response.total, "25.00");
        assert_eq!(response.item_count, 3);
        assert_eq!(response.items[0].unit_price, "10.00");
        assert_eq!(response.items[0].line_total, "20.00");
    }
}
