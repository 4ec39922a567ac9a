use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;
use business::domain::shared::validation::ValidationErrors;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            CartError::InvalidQuantity(reason) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::validation(
                        "cart.quantity_invalid",
                        &ValidationErrors::single("quantity", reason),
                    )),
                );
            }
            CartError::ItemNotFound => (StatusCode::NOT_FOUND, "NotFound", "cart.item_not_found"),
            CartError::MovieNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "cart.movie_not_found")
            }
            CartError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}
