use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Review;

#[async_trait]
pub trait ReviewRepository: Send + Sync {
    /// Newest first.
    async fn get_by_movie(&self, movie_id: Uuid) -> Result<Vec<Review>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Review, RepositoryError>;
    async fn save(&self, review: &Review) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
