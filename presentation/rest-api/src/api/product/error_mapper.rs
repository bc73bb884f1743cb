use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ProductError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::validation(violations)),
            ),
            ProductError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("NotFound", "product.not_found")),
            ),
            ProductError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("InternalError", "repository.persistence")),
            ),
        }
    }
}
