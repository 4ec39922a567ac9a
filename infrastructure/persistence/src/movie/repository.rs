use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::movie::model::Movie;
use business::domain::movie::repository::MovieRepository;
use business::domain::movie::value_objects::MovieFilter;

use super::entity::MovieEntity;
use crate::errors::{map_delete_error, map_sqlx_error};

const MOVIE_COLUMNS: &str = "id, title, price, description, genre, image, image_url, stock_quantity, release_date, created_at, updated_at";

pub struct MovieRepositoryPostgres {
    pool: PgPool,
}

impl MovieRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escapes LIKE wildcards so the search term matches literally.
fn like_pattern(term: &str) -> String {
    let escaped = term
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl MovieRepository for MovieRepositoryPostgres {
    async fn search(&self, filter: &MovieFilter) -> Result<Vec<Movie>, RepositoryError> {
        let query = format!(
            r#"SELECT {MOVIE_COLUMNS} FROM movies
            WHERE ($1::TEXT IS NULL OR title ILIKE $1 OR genre ILIKE $1)
              AND ($2::TEXT IS NULL OR genre = $2)
            ORDER BY title"#
        );
        let entities = sqlx::query_as::<_, MovieEntity>(&query)
            .bind(filter.term.as_deref().map(like_pattern))
            .bind(filter.genre.map(|g| g.to_string()))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_featured(&self, limit: u32) -> Result<Vec<Movie>, RepositoryError> {
        let query = format!("SELECT {MOVIE_COLUMNS} FROM movies ORDER BY random() LIMIT $1");
        let entities = sqlx::query_as::<_, MovieEntity>(&query)
            .bind(i64::from(limit))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Movie, RepositoryError> {
        let query = format!("SELECT {MOVIE_COLUMNS} FROM movies WHERE id = $1");
        let entity = sqlx::query_as::<_, MovieEntity>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?
            .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn save(&self, movie: &Movie) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO movies (id, title, price, description, genre, image, image_url, stock_quantity, release_date, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            ON CONFLICT (id) DO UPDATE SET
                title = EXCLUDED.title,
                price = EXCLUDED.price,
                description = EXCLUDED.description,
                genre = EXCLUDED.genre,
                image = EXCLUDED.image,
                image_url = EXCLUDED.image_url,
                stock_quantity = EXCLUDED.stock_quantity,
                release_date = EXCLUDED.release_date,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(movie.id)
        .bind(&movie.title)
        .bind(movie.price.amount())
        .bind(&movie.description)
        .bind(movie.genre.to_string())
        .bind(movie.image.image())
        .bind(movie.image.image_url())
        .bind(movie.stock_quantity as i32)
        .bind(movie.release_date)
        .bind(movie.created_at)
        .bind(movie.updated_at)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM movies WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_delete_error)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_wrap_term_for_contains_match() {
        assert_eq!(like_pattern("alien"), "%alien%");
    }

    #[test]
    fn should_escape_like_wildcards() {
        assert_eq!(like_pattern("100%_off"), "%100\\%\\_off%");
        assert_eq!(like_pattern("a\\b"), "%a\\\\b%");
    }
}
