use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::cart::model::ShoppingCart;
use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::Order;
use super::value_objects::PaymentStatus;

#[async_trait]
pub trait OrderRepository: Send + Sync {
    /// Persists the order with its lines and empties `cart`, all in one
    /// transaction. Fails with `Conflict` when the cart changed since it
    /// was read (its version no longer matches).
    async fn place(&self, order: &Order, cart: &ShoppingCart) -> Result<(), RepositoryError>;
    /// The user's orders, newest first.
    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError>;
    /// Moves the order from `from` to `to`. Fails with `Conflict` when the
    /// stored status is no longer `from`.
    async fn update_payment_status(
        &self,
        id: Uuid,
        from: PaymentStatus,
        to: PaymentStatus,
    ) -> Result<(), RepositoryError>;
}
