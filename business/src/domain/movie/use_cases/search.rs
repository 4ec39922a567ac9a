use async_trait::async_trait;

use crate::domain::movie::errors::MovieError;
use crate::domain::movie::model::Movie;
use crate::domain::movie::value_objects::Genre;

pub struct SearchMoviesParams {
    pub search: Option<String>,
    pub genre: Option<Genre>,
}

#[async_trait]
pub trait SearchMoviesUseCase: Send + Sync {
    async fn execute(&self, params: SearchMoviesParams) -> Result<Vec<Movie>, MovieError>;
}
