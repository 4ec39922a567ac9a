use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Movie;
use super::value_objects::MovieFilter;

#[async_trait]
pub trait MovieRepository: Send + Sync {
    async fn search(&self, filter: &MovieFilter) -> Result<Vec<Movie>, RepositoryError>;
    async fn get_featured(&self, limit: u32) -> Result<Vec<Movie>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Movie, RepositoryError>;
    async fn save(&self, movie: &Movie) -> Result<(), RepositoryError>;
    /// Fails with `RepositoryError::Referenced` while an order line points at the movie.
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
}
