use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::review::errors::ReviewError;
use crate::domain::review::model::Review;
use crate::domain::shared::value_objects::UserId;

pub struct UpdateReviewParams {
    pub id: Uuid,
    pub user_id: UserId,
    pub comment: String,
    pub rating: i64,
}

#[async_trait]
pub trait UpdateReviewUseCase: Send + Sync {
    async fn execute(&self, params: UpdateReviewParams) -> Result<Review, ReviewError>;
}
