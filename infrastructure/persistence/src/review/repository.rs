use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::review::model::Review;
use business::domain::review::repository::ReviewRepository;

use super::entity::ReviewEntity;
use crate::errors::map_sqlx_error;

pub struct ReviewRepositoryPostgres {
    pool: PgPool,
}

impl ReviewRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReviewRepository for ReviewRepositoryPostgres {
    async fn get_by_movie(&self, movie_id: Uuid) -> Result<Vec<Review>, RepositoryError> {
        let entities = sqlx::query_as::<_, ReviewEntity>(
            "SELECT id, user_id, movie_id, comment, rating, created_at, updated_at FROM reviews WHERE movie_id = $1 ORDER BY created_at DESC",
        )
        .bind(movie_id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Review, RepositoryError> {
        let entity = sqlx::query_as::<_, ReviewEntity>(
            "SELECT id, user_id, movie_id, comment, rating, created_at, updated_at FROM reviews WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, review: &Review) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO reviews (id, user_id, movie_id, comment, rating, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                comment = EXCLUDED.comment,
                rating = EXCLUDED.rating,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(review.id)
        .bind(review.user_id.as_str())
        .bind(review.movie_id)
        .bind(review.comment.as_str())
        .bind(i16::from(review.rating.value()))
        .bind(review.created_at)
        .bind(review.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM reviews WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
