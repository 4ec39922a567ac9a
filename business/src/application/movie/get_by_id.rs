use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::movie::errors::MovieError;
use crate::domain::movie::model::Movie;
use crate::domain::movie::repository::MovieRepository;
use crate::domain::movie::use_cases::get_by_id::{GetMovieByIdParams, GetMovieByIdUseCase};

pub struct GetMovieByIdUseCaseImpl {
    pub repository: Arc<dyn MovieRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMovieByIdUseCase for GetMovieByIdUseCaseImpl {
    async fn execute(&self, params: GetMovieByIdParams) -> Result<Movie, MovieError> {
        self.logger
            .debug(&format!("Fetching movie by id: {}", params.id));

        let movie = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => MovieError::NotFound,
                other => MovieError::Repository(other),
            })?;

        Ok(movie)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockMovieRepo, mock_logger, movie};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_return_movie_when_exists() {
        let existing = movie("Casablanca", "7.50");
        let movie_id = existing.id;

        let mut mock_repo = MockMovieRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(move |id| *id == movie_id)
            .returning(move |_| Ok(existing.clone()));

        let use_case = GetMovieByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetMovieByIdParams { id: movie_id })
            .await
            .unwrap();

        assert_eq!(result.id, movie_id);
        assert_eq!(result.title, "Casablanca");
    }

    #[tokio::test]
    async fn should_return_error_when_movie_not_found() {
        let mut mock_repo = MockMovieRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetMovieByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetMovieByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), MovieError::NotFound));
    }

    #[tokio::test]
    async fn should_propagate_database_errors() {
        let mut mock_repo = MockMovieRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetMovieByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetMovieByIdParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            MovieError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
