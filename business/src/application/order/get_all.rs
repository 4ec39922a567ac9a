use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::get_all::{GetAllOrdersParams, GetAllOrdersUseCase};

pub struct GetAllOrdersUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllOrdersUseCase for GetAllOrdersUseCaseImpl {
    async fn execute(&self, params: GetAllOrdersParams) -> Result<Vec<Order>, OrderError> {
        self.logger
            .info(&format!("Fetching orders of {}", params.user_id));

        let orders = self.repository.get_all(&params.user_id).await?;

        self.logger
            .info(&format!("Found {} orders", orders.len()));
        Ok(orders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::test_support::{MockOrderRepo, cart, customer_id, mock_logger, movie};

    #[tokio::test]
    async fn should_return_only_callers_orders() {
        let order = Order::from_cart(
            &cart(customer_id(), &[(&movie("Heat", "8"), 1)]),
            "1 Main St".into(),
        )
        .unwrap();

        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_all()
            .withf(|user| *user == customer_id())
            .times(1)
            .returning(move |_| Ok(vec![order.clone()]));

        let use_case = GetAllOrdersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let orders = use_case
            .execute(GetAllOrdersParams {
                user_id: customer_id(),
            })
            .await
            .unwrap();

        assert_eq!(orders.len(), 1);
        assert_eq!(orders[0].total().to_string(), "8.00");
    }

    #[tokio::test]
    async fn should_propagate_repository_error() {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_all()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetAllOrdersUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllOrdersParams {
                user_id: customer_id(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::Repository(_)));
    }
}
