use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::model::Movie;

pub struct GetMovieByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetMovieByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetMovieByIdParams) -> Result<Movie, MovieError>;
}
