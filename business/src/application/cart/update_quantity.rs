use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::ShoppingCart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::Quantity;

pub struct UpdateCartItemQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemQuantityUseCase for UpdateCartItemQuantityUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateCartItemQuantityParams,
    ) -> Result<ShoppingCart, CartError> {
        self.logger.info(&format!(
            "Setting cart item {} quantity to {}",
            params.item_id, params.quantity
        ));

        // Zero is rejected, not treated as removal.
        let quantity = Quantity::new(params.quantity)?;

        let item = self
            .repository
            .find_item(params.item_id, &params.user_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ItemNotFound,
                other => CartError::Repository(other),
            })?;

        self.repository
            .set_item_quantity(item.id, quantity)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ItemNotFound,
                other => CartError::Repository(other),
            })?;

        let cart = self.repository.get_or_create(&params.user_id).await?;
        Ok(cart)
    }
}
