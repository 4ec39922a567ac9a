use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::repository::OrderRepository;
use crate::domain::order::use_cases::update_payment_status::{
    UpdatePaymentStatusParams, UpdatePaymentStatusUseCase,
};
use crate::domain::order::value_objects::PaymentStatus;
use crate::domain::shared::value_objects::StoreAdmins;

pub struct UpdatePaymentStatusUseCaseImpl {
    pub repository: Arc<dyn OrderRepository>,
    pub admins: Arc<StoreAdmins>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdatePaymentStatusUseCase for UpdatePaymentStatusUseCaseImpl {
    async fn execute(&self, params: UpdatePaymentStatusParams) -> Result<Order, OrderError> {
        self.logger.info(&format!(
            "Setting payment status of order {} to {}",
            params.id, params.status
        ));

        let order = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                other => OrderError::Repository(other),
            })?;

        // Admins settle any order; owners may only cancel their own.
        if !self.admins.contains(&params.requested_by) {
            if !order.is_owned_by(&params.requested_by) {
                return Err(OrderError::NotFound);
            }
            if params.status != PaymentStatus::Canceled {
                self.logger.warn(&format!(
                    "User {} tried to set order {} to {}",
                    params.requested_by, order.id, params.status
                ));
                return Err(OrderError::StatusChangeNotAllowed);
            }
        }

        let updated = order.with_payment_status(params.status)?;

        self.repository
            .update_payment_status(order.id, order.payment_status, updated.payment_status)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => OrderError::NotFound,
                RepositoryError::Conflict => OrderError::Conflict,
                other => OrderError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Order {} payment status: {} -> {}",
            order.id, order.payment_status, updated.payment_status
        ));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::shared::value_objects::UserId;
    use crate::test_support::{
        MockOrderRepo, admin_id, admins, cart, customer_id, mock_logger, movie,
    };

    fn pending_order() -> Order {
        Order::from_cart(
            &cart(customer_id(), &[(&movie("Heat", "8"), 1)]),
            "1 Main St".into(),
        )
        .unwrap()
    }

    fn repo_returning(order: Order) -> MockOrderRepo {
        let mut mock_repo = MockOrderRepo::new();
        mock_repo
            .expect_get_by_id()
            .returning(move |_| Ok(order.clone()));
        mock_repo
    }

    #[tokio::test]
    async fn should_let_admin_mark_order_paid() {
        let order = pending_order();
        let order_id = order.id;
        let mut mock_repo = repo_returning(order);
        mock_repo
            .expect_update_payment_status()
            .withf(move |id, from, to| {
                *id == order_id && *from == PaymentStatus::Pending && *to == PaymentStatus::Paid
            })
            .times(1)
            .returning(|_, _, _| Ok(()));

        let use_case = UpdatePaymentStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            admins: admins(),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdatePaymentStatusParams {
                id: order_id,
                requested_by: admin_id(),
                status: PaymentStatus::Paid,
            })
            .await
            .unwrap();

        assert_eq!(updated.payment_status, PaymentStatus::Paid);
    }

    #[tokio::test]
    async fn should_let_owner_cancel_pending_order() {
        let order = pending_order();
        let order_id = order.id;
        let mut mock_repo = repo_returning(order);
        mock_repo
            .expect_update_payment_status()
            .times(1)
            .returning(|_, _, _| Ok(()));

        let use_case = UpdatePaymentStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            admins: admins(),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdatePaymentStatusParams {
                id: order_id,
                requested_by: customer_id(),
                status: PaymentStatus::Canceled,
            })
            .await
            .unwrap();

        assert_eq!(updated.payment_status, PaymentStatus::Canceled);
    }

    #[tokio::test]
    async fn should_not_let_owner_mark_own_order_paid() {
        let order = pending_order();
        let order_id = order.id;
        let mut mock_repo = repo_returning(order);
        mock_repo.expect_update_payment_status().never();

        let use_case = UpdatePaymentStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            admins: admins(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdatePaymentStatusParams {
                id: order_id,
                requested_by: customer_id(),
                status: PaymentStatus::Paid,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            OrderError::StatusChangeNotAllowed
        ));
    }

    #[tokio::test]
    async fn should_hide_order_from_other_users() {
        let order = pending_order();
        let order_id = order.id;
        let mut mock_repo = repo_returning(order);
        mock_repo.expect_update_payment_status().never();

        let use_case = UpdatePaymentStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            admins: admins(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdatePaymentStatusParams {
                id: order_id,
                requested_by: UserId::new("stranger"),
                status: PaymentStatus::Canceled,
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::NotFound));
    }

    #[tokio::test]
    async fn should_reject_transition_out_of_terminal_status() {
        let paid = pending_order()
            .with_payment_status(PaymentStatus::Paid)
            .unwrap();
        let order_id = paid.id;
        let mut mock_repo = repo_returning(paid);
        mock_repo.expect_update_payment_status().never();

        let use_case = UpdatePaymentStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            admins: admins(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdatePaymentStatusParams {
                id: order_id,
                requested_by: admin_id(),
                status: PaymentStatus::Pending,
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            OrderError::InvalidStatusTransition { .. }
        ));
    }

    #[tokio::test]
    async fn should_report_conflict_when_status_changed_concurrently() {
        let order = pending_order();
        let order_id = order.id;
        let mut mock_repo = repo_returning(order);
        mock_repo
            .expect_update_payment_status()
            .returning(|_, _, _| Err(RepositoryError::Conflict));

        let use_case = UpdatePaymentStatusUseCaseImpl {
            repository: Arc::new(mock_repo),
            admins: admins(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdatePaymentStatusParams {
                id: order_id,
                requested_by: admin_id(),
                status: PaymentStatus::Failed,
            })
            .await;

        assert!(matches!(result.unwrap_err(), OrderError::Conflict));
    }
}
