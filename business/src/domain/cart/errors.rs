#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.quantity_invalid: {0}")]
    InvalidQuantity(#[from] crate::domain::shared::value_objects::QuantityError),
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("cart.movie_not_found")]
    MovieNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
