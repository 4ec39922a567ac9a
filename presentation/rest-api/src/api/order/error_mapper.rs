use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::order::errors::OrderError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for OrderError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            OrderError::Validation(errors) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::validation("order.validation_failed", errors)),
                );
            }
            OrderError::InvalidStatusTransition { .. } => (
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "order.invalid_status_transition",
            ),
            OrderError::StatusChangeNotAllowed => (
                StatusCode::FORBIDDEN,
                "AuthorizationError",
                "order.status_change_not_allowed",
            ),
            OrderError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "order.not_found"),
            OrderError::EmptyCart => (StatusCode::CONFLICT, "EmptyCart", "order.empty_cart"),
            OrderError::Conflict => (StatusCode::CONFLICT, "Conflict", "order.conflict"),
            OrderError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
