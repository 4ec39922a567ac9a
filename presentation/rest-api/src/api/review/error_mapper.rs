use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::review::errors::ReviewError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ReviewError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, name, message) = match &self {
            ReviewError::Validation(errors) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse::validation("review.validation_failed", errors)),
                );
            }
            ReviewError::NotFound => (StatusCode::NOT_FOUND, "NotFound", "review.not_found"),
            ReviewError::MovieNotFound => {
                (StatusCode::NOT_FOUND, "NotFound", "review.movie_not_found")
            }
            ReviewError::NotAuthor => (
                StatusCode::FORBIDDEN,
                "AuthorizationError",
                "review.not_author",
            ),
            ReviewError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        };

        (status, Json(ErrorResponse::new(name, message)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::shared::validation::ValidationErrors;

    #[test]
    fn should_list_every_invalid_review_field() {
        let mut errors = ValidationErrors::new();
        errors.add("comment", "review.comment_empty");
        errors.add("rating", "review.rating_out_of_range");

        let (status, json) = ReviewError::Validation(errors).into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.name, "ValidationError");
        assert_eq!(json.0.fields.len(), 2);
    }

    #[test]
    fn should_map_non_author_to_forbidden() {
        let (status, json) = ReviewError::NotAuthor.into_error_response();

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(json.0.message, "review.not_author");
        assert!(json.0.fields.is_empty());
    }
}
