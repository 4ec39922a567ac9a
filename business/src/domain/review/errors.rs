use crate::domain::shared::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum ReviewError {
    #[error("review.validation_failed: {0}")]
    Validation(ValidationErrors),
    #[error("review.not_found")]
    NotFound,
    #[error("review.movie_not_found")]
    MovieNotFound,
    #[error("review.not_author")]
    NotAuthor,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
