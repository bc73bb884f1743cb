use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::user::model::{User, UserRole};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum UserRoleDto {
    #[oai(rename = "customer")]
    Customer,
    #[oai(rename = "admin")]
    Admin,
}

impl From<UserRole> for UserRoleDto {
    fn from(role: UserRole) -> Self {
        match role {
            UserRole::Customer => UserRoleDto::Customer,
            UserRole::Admin => UserRoleDto::Admin,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SignupRequest {
    /// First name (2-50 characters)
    pub first_name: String,
    /// Last name (2-50 characters)
    pub last_name: String,
    /// Email address, stored lowercased
    pub email: String,
    /// Password (minimum 6 characters)
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Object)]
pub struct UserResponse {
    /// User unique identifier
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRoleDto,
    /// Timestamp of the most recent successful login
    #[oai(skip_serializing_if_is_none)]
    pub last_login: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            role: user.role.into(),
            last_login: user.last_login,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Session returned by signup and login.
#[derive(Debug, Clone, Object)]
pub struct SessionResponse {
    /// Bearer token for the Authorization header
    pub token: String,
    pub user: UserResponse,
}
