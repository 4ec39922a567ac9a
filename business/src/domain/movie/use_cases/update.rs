use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::model::{Movie, MovieProps};
use crate::domain::shared::value_objects::UserId;

pub struct UpdateMovieParams {
    pub id: Uuid,
    pub requested_by: UserId,
    pub movie: MovieProps,
}

#[async_trait]
pub trait UpdateMovieUseCase: Send + Sync {
    async fn execute(&self, params: UpdateMovieParams) -> Result<Movie, MovieError>;
}
