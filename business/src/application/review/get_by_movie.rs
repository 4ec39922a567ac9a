use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::movie::repository::MovieRepository;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;
use crate::domain::review::repository::ReviewRepository;
use crate::domain::review::use_cases::get_by_movie::{
    GetMovieReviewsParams, GetMovieReviewsUseCase,
};

pub struct GetMovieReviewsUseCaseImpl {
    pub repository: Arc<dyn ReviewRepository>,
    pub movie_repository: Arc<dyn MovieRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetMovieReviewsUseCase for GetMovieReviewsUseCaseImpl {
    async fn execute(&self, params: GetMovieReviewsParams) -> Result<Vec<Review>, ReviewError> {
        self.logger
            .debug(&format!("Fetching reviews for movie: {}", params.movie_id));

        self.movie_repository
            .get_by_id(params.movie_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReviewError::MovieNotFound,
                other => ReviewError::Repository(other),
            })?;

        let reviews = self.repository.get_by_movie(params.movie_id).await?;
        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockMovieRepo, MockReviewRepo, customer_id, mock_logger, movie};
    use uuid::Uuid;

    #[tokio::test]
    async fn should_list_reviews_of_movie() {
        let reviewed = movie("Heat", "8");
        let movie_id = reviewed.id;
        let review = Review::new(customer_id(), movie_id, "Great shootout".into(), 5).unwrap();

        let mut movie_repo = MockMovieRepo::new();
        movie_repo
            .expect_get_by_id()
            .returning(move |_| Ok(reviewed.clone()));
        let mut review_repo = MockReviewRepo::new();
        review_repo
            .expect_get_by_movie()
            .withf(move |id| *id == movie_id)
            .returning(move |_| Ok(vec![review.clone()]));

        let use_case = GetMovieReviewsUseCaseImpl {
            repository: Arc::new(review_repo),
            movie_repository: Arc::new(movie_repo),
            logger: mock_logger(),
        };

        let reviews = use_case
            .execute(GetMovieReviewsParams { movie_id })
            .await
            .unwrap();

        assert_eq!(reviews.len(), 1);
        assert_eq!(reviews[0].movie_id, movie_id);
    }

    #[tokio::test]
    async fn should_return_movie_not_found() {
        let mut movie_repo = MockMovieRepo::new();
        movie_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));
        let mut review_repo = MockReviewRepo::new();
        review_repo.expect_get_by_movie().never();

        let use_case = GetMovieReviewsUseCaseImpl {
            repository: Arc::new(review_repo),
            movie_repository: Arc::new(movie_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetMovieReviewsParams {
                movie_id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), ReviewError::MovieNotFound));
    }
}
