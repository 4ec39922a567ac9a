use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::movie::repository::MovieRepository;
use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;
use crate::domain::review::repository::ReviewRepository;
use crate::domain::review::use_cases::create::{CreateReviewParams, CreateReviewUseCase};

pub struct CreateReviewUseCaseImpl {
    pub repository: Arc<dyn ReviewRepository>,
    pub movie_repository: Arc<dyn MovieRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateReviewUseCase for CreateReviewUseCaseImpl {
    async fn execute(&self, params: CreateReviewParams) -> Result<Review, ReviewError> {
        self.logger.info(&format!(
            "User {} reviewing movie {}",
            params.user_id, params.movie_id
        ));

        let review = Review::new(
            params.user_id,
            params.movie_id,
            params.comment,
            params.rating,
        )?;

        self.movie_repository
            .get_by_id(review.movie_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ReviewError::MovieNotFound,
                other => ReviewError::Repository(other),
            })?;

        self.repository.save(&review).await?;

        self.logger.info(&format!("Review created: {}", review.id));
        Ok(review)
    }
}
