use crate::domain::shared::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum MovieError {
    #[error("movie.validation_failed: {0}")]
    Validation(ValidationErrors),
    #[error("movie.not_found")]
    NotFound,
    #[error("movie.admin_required")]
    AdminRequired,
    #[error("movie.referenced_by_orders")]
    ReferencedByOrders,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
