use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::ShoppingCart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<ShoppingCart, CartError> {
        self.logger
            .info(&format!("Removing cart item: {}", params.item_id));

        let item = self
            .repository
            .find_item(params.item_id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ItemNotFound,
                other => CartError::Repository(other),
            })?;

        self.repository.remove_item(item.id).await?;

        // The cart stays even when its last line is gone.
        let cart = self.repository.get_or_create(&params.user_id).await?;

        self.logger
            .info(&format!("Cart item removed: {}", params.item_id));
        Ok(cart)
    }
}
