use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::review::model::Review;
use business::domain::review::value_objects::{Comment, Rating};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct ReviewEntity {
    pub id: Uuid,
    pub user_id: String,
    pub movie_id: Uuid,
    pub comment: String,
    pub rating: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ReviewEntity {
    pub fn into_domain(self) -> Review {
        Review::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.movie_id,
            Comment::from_repository(self.comment),
            Rating::from_repository(self.rating),
            self.created_at,
            self.updated_at,
        )
    }
}
