use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::ShoppingCart;
use crate::domain::shared::value_objects::UserId;

pub struct RemoveCartItemParams {
    pub user_id: UserId,
    pub item_id: Uuid,
}

#[async_trait]
pub trait RemoveCartItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<ShoppingCart, CartError>;
}
