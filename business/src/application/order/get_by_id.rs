use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};

pub struct GetOrderByIdUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetOrderByIdUseCase for GetOrderByIdUseCaseImpl {
    async fn execute(&self, params: GetOrderByIdParams) -> Result<Order, OrderError> {
        self.logger.info(&format!("Fetching order: {}", params.id));

        let order = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        // Other users' orders are reported as missing.
        if !order.is_owned_by(&params.user_id) {
            self.logger.warn(&format!(
                "User {} asked for order {} of another user",
                params.user_id, params.id
            ));
            return Err(OrderError::NotFound);
        }

        Ok(order)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{MockOrderRepo, cart, customer_id, mock_logger, movie};
    use uuid::Uuid;

    fn placed_order() -> Order {
        Order::from_cart(
            &cart(customer_id(), &[(&movie("Heat", "8"), 3)]),
            "1 Main St".into(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn should_return_own_order() {
        let order = placed_order();
        let order_id = order.id;

        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_id()
            .withf(move |id| *id == order_id)
            .returning(move |_| Ok(order.clone()));

        let use_case = GetOrderByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let found = use_case
            .execute(GetOrderByIdParams {
                id: order_id,
                user_id: customer_id(),
            })
            .await
            .unwrap();

        assert_eq!(found.id, order_id);
        assert_eq!(found.total().to_string(), "24.00");
    }

    #[tokio::test]
    async fn should_hide_order_of_another_user() {
        let order = placed_order();
        let order_id = order.id;

        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(order.clone()));

        let use_case = GetOrderByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetOrderByIdParams {
                id: order_id,
                user_id: UserId::new("someone-else"),
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::NotFound));
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_order() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetOrderByIdUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetOrderByIdParams {
                id: Uuid::new_v4(),
                user_id: customer_id(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::NotFound));
    }
}
