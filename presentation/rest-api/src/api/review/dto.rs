use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::review::model::Review;

#[derive(Debug, Clone, Object)]
pub struct ReviewRequest {
    /// Review text, 1 to 255 characters
    pub comment: String,
    /// Star rating from 1 to 5
    pub rating: i64,
}

#[derive(Debug, Clone, Object)]
pub struct ReviewResponse {
    /// Review unique identifier
    pub id: String,
    /// Author's user id
    pub user_id: String,
    pub movie_id: String,
    pub comment: String,
    pub rating: u8,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last edit timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Review> for ReviewResponse {
    fn from(review: Review) -> Self {
        Self {
            id: review.id.to_string(),
            user_id: review.user_id.to_string(),
            movie_id: review.movie_id.to_string(),
            comment: review.comment.as_str().to_string(),
            rating: review.rating.value(),
            created_at: review.created_at,
            updated_at: review.updated_at,
        }
    }
}
