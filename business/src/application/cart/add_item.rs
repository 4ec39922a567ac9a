use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::ShoppingCart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddToCartParams, AddToCartUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::movie::repository::MovieRepository;
use crate::domain::shared::value_objects::{Quantity, QuantityError};

pub struct AddToCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub movie_repository: Arc<dyn MovieRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCartUseCase for AddToCartUseCaseImpl {
    async fn execute(&self, params: AddToCartParams) -> Result<ShoppingCart, CartError> {
        self.logger.info(&format!(
            "Adding {} x movie {} to cart of {}",
            params.quantity, params.movie_id, params.user_id
        ));

        let quantity = Quantity::new(params.quantity)?;

        self.movie_repository
            .get_by_id(params.movie_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::MovieNotFound,
                other => CartError::Repository(other),
            })?;

        let cart = self.repository.get_or_create(&params.user_id).await?;

        if let Some(line) = cart.items.iter().find(|i| i.movie_id == params.movie_id) {
            Quantity::new(i64::from(line.quantity.value()) + i64::from(quantity.value()))?;
        }

        // The movie can still vanish between the lookup and the insert, and a
        // concurrent add can still push the line past the limit.
        self.repository
            .add_item(cart.id, params.movie_id, quantity)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::MovieNotFound,
                RepositoryError::Conflict => CartError::InvalidQuantity(QuantityError::TooLarge),
                other => CartError::Repository(other),
            })?;

        let cart = self.repository.get_or_create(&params.user_id).await?;

        self.logger.info(&format!(
            "Cart {} now holds {} items",
            cart.id,
            cart.item_count()
        ));
        Ok(cart)
    }
}
