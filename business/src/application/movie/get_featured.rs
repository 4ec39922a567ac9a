use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::movie::errors::MovieError;
use crate::domain::movie::model::Movie;
use crate::domain::movie::repository::MovieRepository;
use crate::domain::movie::use_cases::get_featured::GetFeaturedMoviesUseCase;

/// Number of movies highlighted on the home page.
const FEATURED_COUNT: u32 = 3;

pub struct GetFeaturedMoviesUseCaseImpl {
    pub repository: Arc<dyn MovieRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetFeaturedMoviesUseCase for GetFeaturedMoviesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Movie>, MovieError> {
        self.logger.debug("Picking featured movies");

        let movies = self.repository.get_featured(FEATURED_COUNT).await?;
        Ok(movies)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockMovieRepo, mock_logger, movie};

    #[tokio::test]
    async fn should_request_three_featured_movies() {
        let mut mock_repo = MockMovieRepo::new();
        mock_repo
            .expect_get_featured()
            .withf(|limit| *limit == 3)
            .times(1)
            .returning(|_| Ok(vec![movie("Alien", "10"), movie("Heat", "8")]));

        let use_case = GetFeaturedMoviesUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute().await.unwrap();

        assert_eq!(result.len(), 2);
    }
}
