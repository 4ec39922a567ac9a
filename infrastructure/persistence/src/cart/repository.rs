use async_trait::async_trait;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use business::domain::cart::model::{CartItem, ShoppingCart};
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::{Quantity, UserId};

use super::entity::{CartItemEntity, ShoppingCartEntity};
use crate::errors::map_sqlx_error;

const ITEM_SELECT: &str = r#"SELECT ci.id, ci.cart_id, ci.movie_id, m.title AS movie_title, m.price AS unit_price, ci.quantity
    FROM cart_items ci
    JOIN movies m ON m.id = ci.movie_id"#;

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn bump_version(conn: &mut PgConnection, cart_id: Uuid) -> Result<(), RepositoryError> {
    sqlx::query("UPDATE shopping_carts SET version = version + 1 WHERE id = $1")
        .bind(cart_id)
        .execute(conn)
        .await
        .map_err(map_sqlx_error)?;
    Ok(())
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn get_or_create(&self, user_id: &UserId) -> Result<ShoppingCart, RepositoryError> {
        // The no-op update makes RETURNING yield the existing row on conflict.
        let cart = sqlx::query_as::<_, ShoppingCartEntity>(
            r#"INSERT INTO shopping_carts (id, user_id, version, created_at)
            VALUES ($1, $2, 0, now())
            ON CONFLICT (user_id) DO UPDATE SET user_id = EXCLUDED.user_id
            RETURNING id, user_id, version, created_at"#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let items = sqlx::query_as::<_, CartItemEntity>(&format!(
            "{ITEM_SELECT} WHERE ci.cart_id = $1 ORDER BY ci.created_at, ci.id"
        ))
        .bind(cart.id)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        Ok(cart.into_domain(items.into_iter().map(|e| e.into_domain()).collect()))
    }

    async fn add_item(
        &self,
        cart_id: Uuid,
        movie_id: Uuid,
        quantity: Quantity,
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        // The sum is compared as BIGINT so an oversized line is skipped
        // instead of overflowing the INTEGER column.
        let written = sqlx::query(
            r#"INSERT INTO cart_items (id, cart_id, movie_id, quantity)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (cart_id, movie_id) DO UPDATE SET
                quantity = cart_items.quantity + EXCLUDED.quantity
            WHERE cart_items.quantity::BIGINT + EXCLUDED.quantity <= 2147483647"#,
        )
        .bind(Uuid::new_v4())
        .bind(cart_id)
        .bind(movie_id)
        .bind(quantity.value() as i32)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        if written.rows_affected() == 0 {
            return Err(RepositoryError::Conflict);
        }

        bump_version(&mut *tx, cart_id).await?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn find_item(
        &self,
        item_id: Uuid,
        user_id: &UserId,
    ) -> Result<CartItem, RepositoryError> {
        let entity = sqlx::query_as::<_, CartItemEntity>(&format!(
            "{ITEM_SELECT} JOIN shopping_carts sc ON sc.id = ci.cart_id WHERE ci.id = $1 AND sc.user_id = $2"
        ))
        .bind(item_id)
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn set_item_quantity(
        &self,
        item_id: Uuid,
        quantity: Quantity,
    ) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let cart_id: Uuid =
            sqlx::query_scalar("UPDATE cart_items SET quantity = $2 WHERE id = $1 RETURNING cart_id")
                .bind(item_id)
                .bind(quantity.value() as i32)
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_sqlx_error)?
                .ok_or(RepositoryError::NotFound)?;

        bump_version(&mut *tx, cart_id).await?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn remove_item(&self, item_id: Uuid) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        let cart_id: Uuid =
            sqlx::query_scalar("DELETE FROM cart_items WHERE id = $1 RETURNING cart_id")
                .bind(item_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(map_sqlx_error)?
                .ok_or(RepositoryError::NotFound)?;

        bump_version(&mut *tx, cart_id).await?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }
}
