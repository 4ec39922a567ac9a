use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};

pub struct PlaceOrderUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub cart_repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<Order, OrderError> {
        self.logger
            .info(&format!("Placing order for {}", params.user_id));

        let cart = self.cart_repository.get_or_create(&params.user_id).await?;

        let order = Order::from_cart(&cart, params.shipping_address).inspect_err(|e| {
            if matches!(e, OrderError::EmptyCart) {
                self.logger
                    .warn(&format!("Checkout of empty cart {} refused", cart.id));
            }
        })?;

        // A movie deleted mid-checkout fails the item insert the same way a
        // concurrent cart change does.
        self.repository
            .place(&order, &cart)
            .await
            .map_err(|e| match e {
                RepositoryError::Conflict | RepositoryError::NotFound => {
                    self.logger.warn(&format!(
                        "Cart {} changed during checkout (version {})",
                        cart.id, cart.version
                    ));
                    OrderError::Conflict
                }
                other => OrderError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Order placed: {} ({} lines, total {})",
            order.id,
            order.items.len(),
            order.total()
        ));
        Ok(order)
    }
}
