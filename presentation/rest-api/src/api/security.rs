use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use poem::Request;
use poem_openapi::SecurityScheme;
use serde::{Deserialize, Serialize};

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::UserRole;

use crate::config::auth_config::AuthConfig;

#[derive(Debug, Serialize, Deserialize)]
struct SessionClaims {
    sub: String,
    role: String,
    iat: u64,
    exp: u64,
}

/// Identity carried by a validated session token.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
    pub role: UserRole,
}

impl AuthenticatedUser {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Signs a session token for a freshly authenticated user.
pub fn issue_token(
    config: &AuthConfig,
    user_id: &UserId,
    role: UserRole,
) -> Result<String, String> {
    let now = Utc::now().timestamp().max(0) as u64;
    let claims = SessionClaims {
        sub: user_id.as_str().to_string(),
        role: role.to_string(),
        iat: now,
        exp: now + config.ttl_secs,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
    .map_err(|e| format!("auth.token_sign_failed: {e}"))
}

fn validate_token(config: &AuthConfig, token: &str) -> Result<AuthenticatedUser, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.validate_exp = true;

    let token_data = decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )
    .map_err(|e| format!("auth.token_validation_failed: {e}"))?;

    let role = token_data
        .claims
        .role
        .parse::<UserRole>()
        .map_err(|_| "auth.unknown_role".to_string())?;

    Ok(AuthenticatedUser {
        user_id: UserId::new(token_data.claims.sub),
        role,
    })
}

/// Session Bearer token authentication
#[derive(SecurityScheme)]
#[oai(ty = "bearer", bearer_format = "JWT", checker = "session_bearer_checker")]
pub struct SessionBearer(pub AuthenticatedUser);

async fn session_bearer_checker(
    _req: &Request,
    bearer: poem_openapi::auth::Bearer,
) -> Option<AuthenticatedUser> {
    let config = AuthConfig::from_env();
    match validate_token(&config, &bearer.token) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!("Session auth failed: {e}");
            None
        }
    }
}
