use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ReviewError;
use super::value_objects::{Comment, Rating};
use crate::domain::shared::validation::ValidationErrors;
use crate::domain::shared::value_objects::UserId;

#[derive(Debug, Clone)]
pub struct Review {
    pub id: Uuid,
    pub user_id: UserId,
    pub movie_id: Uuid,
    pub comment: Comment,
    pub rating: Rating,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn validate(comment: String, rating: i64) -> Result<(Comment, Rating), ReviewError> {
    let mut errors = ValidationErrors::new();
    let comment = errors.check("comment", Comment::new(comment));
    let rating = errors.check("rating", Rating::new(rating));

    match (comment, rating) {
        (Some(comment), Some(rating)) => Ok((comment, rating)),
        _ => Err(ReviewError::Validation(errors)),
    }
}

impl Review {
    pub fn new(
        user_id: UserId,
        movie_id: Uuid,
        comment: String,
        rating: i64,
    ) -> Result<Self, ReviewError> {
        let (comment, rating) = validate(comment, rating)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            user_id,
            movie_id,
            comment,
            rating,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        &self.user_id == user_id
    }

    /// Applies an edit by `editor`. Only the author may change a review.
    pub fn revise(&self, editor: &UserId, comment: String, rating: i64) -> Result<Self, ReviewError> {
        if !self.is_authored_by(editor) {
            return Err(ReviewError::NotAuthor);
        }
        let (comment, rating) = validate(comment, rating)?;

        Ok(Self {
            comment,
            rating,
            updated_at: Utc::now(),
            ..self.clone()
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        user_id: UserId,
        movie_id: Uuid,
        comment: Comment,
        rating: Rating,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            movie_id,
            comment,
            rating,
            created_at,
            updated_at,
        }
    }
}
