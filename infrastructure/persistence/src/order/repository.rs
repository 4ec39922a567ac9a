use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::cart::model::ShoppingCart;
use business::domain::errors::RepositoryError;
use business::domain::order::model::{Order, OrderItem};
use business::domain::order::repository::OrderRepository;
use business::domain::order::value_objects::PaymentStatus;
use business::domain::shared::value_objects::UserId;

use super::entity::{OrderEntity, OrderItemEntity};
use crate::errors::map_sqlx_error;

pub struct OrderRepositoryPostgres {
    pool: PgPool,
}

impl OrderRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lines of the given orders, grouped by order id.
    async fn items_of(
        &self,
        order_ids: &[Uuid],
    ) -> Result<HashMap<Uuid, Vec<OrderItem>>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderItemEntity>(
            r#"SELECT oi.id, oi.order_id, oi.movie_id, m.title AS movie_title, oi.quantity, oi.price_at_purchase
            FROM order_items oi
            JOIN movies m ON m.id = oi.movie_id
            WHERE oi.order_id = ANY($1)
            ORDER BY m.title"#,
        )
        .bind(order_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        let mut grouped: HashMap<Uuid, Vec<OrderItem>> = HashMap::new();
        for entity in entities {
            grouped
                .entry(entity.order_id)
                .or_default()
                .push(entity.into_domain());
        }
        Ok(grouped)
    }
}

#[async_trait]
impl OrderRepository for OrderRepositoryPostgres {
    async fn place(&self, order: &Order, cart: &ShoppingCart) -> Result<(), RepositoryError> {
        let mut tx = self.pool.begin().await.map_err(map_sqlx_error)?;

        // Claims the cart at the version it was read; a concurrent change or
        // checkout has already moved it on.
        let claimed = sqlx::query(
            "UPDATE shopping_carts SET version = version + 1 WHERE id = $1 AND version = $2",
        )
        .bind(cart.id)
        .bind(cart.version)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;
        if claimed.rows_affected() == 0 {
            return Err(RepositoryError::Conflict);
        }

        sqlx::query(
            r#"INSERT INTO orders (id, user_id, order_date, shipping_address, payment_status)
            VALUES ($1, $2, $3, $4, $5)"#,
        )
        .bind(order.id)
        .bind(order.user_id.as_str())
        .bind(order.order_date)
        .bind(order.shipping_address.as_str())
        .bind(order.payment_status.to_string())
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx_error)?;

        for item in &order.items {
            sqlx::query(
                r#"INSERT INTO order_items (id, order_id, movie_id, quantity, price_at_purchase)
                VALUES ($1, $2, $3, $4, $5)"#,
            )
            .bind(item.id)
            .bind(item.order_id)
            .bind(item.movie_id)
            .bind(item.quantity.value() as i32)
            .bind(item.price_at_purchase.amount())
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;
        }

        sqlx::query("DELETE FROM cart_items WHERE cart_id = $1")
            .bind(cart.id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx_error)?;

        tx.commit().await.map_err(map_sqlx_error)?;
        Ok(())
    }

    async fn get_all(&self, user_id: &UserId) -> Result<Vec<Order>, RepositoryError> {
        let entities = sqlx::query_as::<_, OrderEntity>(
            "SELECT id, user_id, order_date, shipping_address, payment_status FROM orders WHERE user_id = $1 ORDER BY order_date DESC",
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if entities.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<Uuid> = entities.iter().map(|e| e.id).collect();
        let mut items = self.items_of(&ids).await?;

        Ok(entities
            .into_iter()
            .map(|e| {
                let lines = items.remove(&e.id).unwrap_or_default();
                e.into_domain(lines)
            })
            .collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Order, RepositoryError> {
        let entity = sqlx::query_as::<_, OrderEntity>(
            "SELECT id, user_id, order_date, shipping_address, payment_status FROM orders WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_error)?
        .ok_or(RepositoryError::NotFound)?;

        let mut items = self.items_of(&[entity.id]).await?;
        let lines = items.remove(&entity.id).unwrap_or_default();
        Ok(entity.into_domain(lines))
    }

    async fn update_payment_status(
        &self,
        id: Uuid,
        from: PaymentStatus,
        to: PaymentStatus,
    ) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            "UPDATE orders SET payment_status = $3 WHERE id = $1 AND payment_status = $2",
        )
        .bind(id)
        .bind(from.to_string())
        .bind(to.to_string())
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_error)?;

        if result.rows_affected() == 0 {
            let exists: bool = sqlx::query_scalar("SELECT EXISTS (SELECT 1 FROM orders WHERE id = $1)")
                .bind(id)
                .fetch_one(&self.pool)
                .await
                .map_err(map_sqlx_error)?;
            return Err(if exists {
                RepositoryError::Conflict
            } else {
                RepositoryError::NotFound
            });
        }
        Ok(())
    }
}
