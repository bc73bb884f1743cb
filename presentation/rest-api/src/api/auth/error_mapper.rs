use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            UserError::Validation(violations) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::validation(violations)),
            ),
            UserError::EmailTaken => (
                StatusCode::CONFLICT,
                Json(ErrorResponse::new("Conflict", "user.email_taken")),
            ),
            UserError::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::new(
                    "Unauthorized",
                    "user.invalid_credentials",
                )),
            ),
            UserError::NotFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("NotFound", "user.not_found")),
            ),
            UserError::Repository(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("InternalError", "repository.persistence")),
            ),
        }
    }
}
