use async_trait::async_trait;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::model::{Movie, MovieProps};
use crate::domain::shared::value_objects::UserId;

pub struct CreateMovieParams {
    pub requested_by: UserId,
    pub movie: MovieProps,
}

#[async_trait]
pub trait CreateMovieUseCase: Send + Sync {
    async fn execute(&self, params: CreateMovieParams) -> Result<Movie, MovieError>;
}
