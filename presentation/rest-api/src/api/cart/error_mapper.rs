use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart::errors::CartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            CartError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::validation(violations)),
            ),
            CartError::UserNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("NotFound", "cart.user_not_found")),
            ),
            CartError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("NotFound", "cart.not_found")),
            ),
            CartError::ItemNotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("NotFound", "cart.item_not_found")),
            ),
            CartError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("InternalError", "repository.persistence")),
            ),
        }
    }
}
