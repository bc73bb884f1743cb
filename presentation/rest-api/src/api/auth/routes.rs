use std::sync::Arc;

use poem_openapi::{OpenApi, payload::Json};

use business::domain::user::use_cases::get_profile::{GetProfileParams, GetProfileUseCase};
use business::domain::user::use_cases::login::{LoginParams, LoginUseCase};
use business::domain::user::use_cases::signup::{SignupParams, SignupUseCase};

use crate::api::auth::dto::{LoginRequest, SessionResponse, SignupRequest, UserResponse};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::{SessionBearer, issue_token};
use crate::api::tags::ApiTags;
use crate::config::auth_config::AuthConfig;

pub struct AuthApi {
    signup_use_case: Arc<dyn SignupUseCase>,
    login_use_case: Arc<dyn LoginUseCase>,
    get_profile_use_case: Arc<dyn GetProfileUseCase>,
    auth_config: AuthConfig,
}

impl AuthApi {
    pub fn new(
        signup_use_case: Arc<dyn SignupUseCase>,
        login_use_case: Arc<dyn LoginUseCase>,
        get_profile_use_case: Arc<dyn GetProfileUseCase>,
        auth_config: AuthConfig,
    ) -> Self {
        Self {
            signup_use_case,
            login_use_case,
            get_profile_use_case,
            auth_config,
        }
    }

    fn session_for(&self, user: business::domain::user::model::User) -> Result<SessionResponse, ()> {
        let token = issue_token(&self.auth_config, &user.id, user.role).map_err(|e| {
            tracing::error!("Failed to sign session token: {e}");
        })?;
        Ok(SessionResponse {
            token,
            user: user.into(),
        })
    }
}

/// Account registration, login, and profile API
#[OpenApi]
impl AuthApi {
    /// Register a new account
    ///
    /// Creates a customer account and returns a session token.
    #[oai(path = "/auth/signup", method = "post", tag = "ApiTags::Auth")]
    async fn signup(&self, body: Json<SignupRequest>) -> SignupResponse {
        let params = SignupParams {
            first_name: body.0.first_name,
            last_name: body.0.last_name,
            email: body.0.email,
            password: body.0.password,
        };

        match self.signup_use_case.execute(params).await {
            Ok(user) => match self.session_for(user) {
                Ok(session) => SignupResponse::Created(Json(session)),
                Err(()) => SignupResponse::InternalError(Json(ErrorResponse::new(
                    "InternalError",
                    "auth.token_sign_failed",
                ))),
            },
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SignupResponse::BadRequest(json),
                    409 => SignupResponse::Conflict(json),
                    _ => SignupResponse::InternalError(json),
                }
            }
        }
    }

    /// Log in with email and password
    ///
    /// Returns a session token on success. Unknown email and wrong password
    /// are indistinguishable in the response.
    #[oai(path = "/auth/login", method = "post", tag = "ApiTags::Auth")]
    async fn login(&self, body: Json<LoginRequest>) -> LoginResponse {
        let params = LoginParams {
            email: body.0.email,
            password: body.0.password,
        };

        match self.login_use_case.execute(params).await {
            Ok(user) => match self.session_for(user) {
                Ok(session) => LoginResponse::Ok(Json(session)),
                Err(()) => LoginResponse::InternalError(Json(ErrorResponse::new(
                    "InternalError",
                    "auth.token_sign_failed",
                ))),
            },
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    401 => LoginResponse::Unauthorized(json),
                    _ => LoginResponse::InternalError(json),
                }
            }
        }
    }

    /// Get the authenticated user's profile
    #[oai(path = "/auth/profile", method = "get", tag = "ApiTags::Auth")]
    async fn profile(&self, auth: SessionBearer) -> ProfileResponse {
        match self
            .get_profile_use_case
            .execute(GetProfileParams {
                user_id: auth.0.user_id,
            })
            .await
        {
            Ok(user) => ProfileResponse::Ok(Json(user.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ProfileResponse::NotFound(json),
                    _ => ProfileResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SignupResponse {
    #[oai(status = 201)]
    Created(Json<SessionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum LoginResponse {
    #[oai(status = 200)]
    Ok(Json<SessionResponse>),
    #[oai(status = 401)]
    Unauthorized(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ProfileResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
