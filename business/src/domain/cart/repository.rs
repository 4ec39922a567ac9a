use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{Quantity, UserId};

use super::model::{CartItem, ShoppingCart};

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Returns the user's cart with its lines priced at the current catalog
    /// price, creating an empty cart on first access.
    async fn get_or_create(&self, user_id: &UserId) -> Result<ShoppingCart, RepositoryError>;
    /// Adds `quantity` to the cart's line for the movie, creating the line if
    /// needed. Must be a single atomic increment-or-insert. Fails with
    /// `Conflict` and writes nothing when the summed quantity would exceed
    /// the largest storable quantity.
    async fn add_item(
        &self,
        cart_id: Uuid,
        movie_id: Uuid,
        quantity: Quantity,
    ) -> Result<(), RepositoryError>;
    /// Finds a line only if it belongs to the user's cart.
    async fn find_item(&self, item_id: Uuid, user_id: &UserId)
    -> Result<CartItem, RepositoryError>;
    async fn set_item_quantity(
        &self,
        item_id: Uuid,
        quantity: Quantity,
    ) -> Result<(), RepositoryError>;
    async fn remove_item(&self, item_id: Uuid) -> Result<(), RepositoryError>;
}
