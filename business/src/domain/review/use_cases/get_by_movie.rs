use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;

pub struct GetMovieReviewsParams {
    pub movie_id: Uuid,
}

#[async_trait]
pub trait GetMovieReviewsUseCase: Send + Sync {
    async fn execute(&self, params: GetMovieReviewsParams) -> Result<Vec<Review>, ReviewError>;
}
