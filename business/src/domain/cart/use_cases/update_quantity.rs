use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::ShoppingCart;
use crate::domain::shared::value_objects::UserId;

pub struct UpdateCartItemQuantityParams {
    pub user_id: UserId,
    pub item_id: Uuid,
    pub quantity: i64,
}

#[async_trait]
pub trait UpdateCartItemQuantityUseCase: Send + Sync {
    async fn execute(
        &self,
        params: UpdateCartItemQuantityParams,
    ) -> Result<ShoppingCart, CartError>;
}
