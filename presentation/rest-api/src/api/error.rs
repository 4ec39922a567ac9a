use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::shared::validation::ValidationErrors;

#[derive(Object, Debug, Clone, PartialEq)]
pub struct FieldErrorResponse {
    /// Name of the rejected input field
    pub field: String,
    /// Code-style reason, e.g. `review.rating_out_of_range`
    pub code: String,
}

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// Per-field violations of a validation error
    #[oai(skip_serializing_if_is_empty)]
    pub fields: Vec<FieldErrorResponse>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            fields: Vec::new(),
        }
    }

    pub fn validation(message: &str, errors: &ValidationErrors) -> Self {
        Self {
            name: "ValidationError".to_string(),
            message: message.to_string(),
            fields: errors
                .violations()
                .iter()
                .map(|v| FieldErrorResponse {
                    field: v.field.to_string(),
                    code: v.code.clone(),
                })
                .collect(),
        }
    }
}

/// 400 for a malformed request value (path id, decimal, enum code).
pub fn bad_request(message: &str) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("ValidationError", message))
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
