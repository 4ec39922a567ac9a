use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::movie::errors::MovieError;
use crate::domain::movie::model::Movie;
use crate::domain::movie::repository::MovieRepository;
use crate::domain::movie::use_cases::search::{SearchMoviesParams, SearchMoviesUseCase};
use crate::domain::movie::value_objects::MovieFilter;

pub struct SearchMoviesUseCaseImpl {
    pub repository: Arc<dyn MovieRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchMoviesUseCase for SearchMoviesUseCaseImpl {
    async fn execute(&self, params: SearchMoviesParams) -> Result<Vec<Movie>, MovieError> {
        let filter = MovieFilter {
            term: params
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            genre: params.genre,
        };
        self.logger
            .debug(&format!("Searching movies with filter: {:?}", filter));

        let movies = self.repository.search(&filter).await?;

        self.logger
            .info(&format!("Found {} movies", movies.len()));
        Ok(movies)
    }
}
