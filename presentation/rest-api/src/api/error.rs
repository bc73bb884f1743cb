use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::shared::validation::FieldViolation;

/// One failed input constraint, reported by field name.
#[derive(Object, Debug)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl From<FieldViolation> for FieldError {
    fn from(violation: FieldViolation) -> Self {
        Self {
            field: violation.field,
            message: violation.message,
        }
    }
}

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
    /// Per-field details, present on validation failures only
    #[oai(skip_serializing_if_is_none)]
    pub errors: Option<Vec<FieldError>>,
}

impl ErrorResponse {
    pub fn new(name: &str, message: &str) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            errors: None,
        }
    }

    pub fn validation(violations: Vec<FieldViolation>) -> Self {
        Self {
            name: "ValidationError".to_string(),
            message: "validation.failed".to_string(),
            errors: Some(violations.into_iter().map(FieldError::from).collect()),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
