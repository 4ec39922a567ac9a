use async_trait::async_trait;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::model::Movie;

#[async_trait]
pub trait GetFeaturedMoviesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<Movie>, MovieError>;
}
