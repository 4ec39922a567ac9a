use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::ShoppingCart;
use crate::domain::shared::value_objects::UserId;

pub struct AddToCartParams {
    pub user_id: UserId,
    pub movie_id: Uuid,
    pub quantity: i64,
}

#[async_trait]
pub trait AddToCartUseCase: Send + Sync {
    async fn execute(&self, params: AddToCartParams) -> Result<ShoppingCart, CartError>;
}
