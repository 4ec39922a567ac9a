use super::value_objects::PaymentStatus;
use crate::domain::shared::validation::ValidationErrors;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.validation_failed: {0}")]
    Validation(ValidationErrors),
    #[error("order.empty_cart")]
    EmptyCart,
    #[error("order.not_found")]
    NotFound,
    #[error("order.invalid_status_transition: {from} -> {to}")]
    InvalidStatusTransition {
        from: PaymentStatus,
        to: PaymentStatus,
    },
    #[error("order.status_change_not_allowed")]
    StatusChangeNotAllowed,
    #[error("order.conflict")]
    Conflict,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
