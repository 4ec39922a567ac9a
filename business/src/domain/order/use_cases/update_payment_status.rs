use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::order::errors::OrderError;
use crate::domain::order::model::Order;
use crate::domain::order::value_objects::PaymentStatus;
use crate::domain::shared::value_objects::UserId;

pub struct UpdatePaymentStatusParams {
    pub id: Uuid,
    pub requested_by: UserId,
    pub status: PaymentStatus,
}

#[async_trait]
pub trait UpdatePaymentStatusUseCase: Send + Sync {
    async fn execute(&self, params: UpdatePaymentStatusParams) -> Result<Order, OrderError>;
}
