use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::movie::errors::MovieError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for MovieError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            MovieError::Validation(errors) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::validation("movie.validation_failed", errors)),
                );
            }
            MovieError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "movie.not_found"),
            MovieError::AdminRequired => (
                StatusCode::FORBIDDEN,
                "AuthorizationError",
                "movie.admin_required",
            ),
            MovieError::ReferencedByOrders => (
                StatusCode::CONFLICT,
                "Conflict",
                "movie.referenced_by_orders",
            ),
            MovieError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
