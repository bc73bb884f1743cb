use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::shared::value_objects::UserId;
use business::domain::user::model::{User, UserRole};

#[derive(Debug, FromRow)]
pub struct UserEntity {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
    pub last_login: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserEntity {
    pub fn into_domain(self) -> User {
        User::from_repository(
            UserId::new(self.id),
            self.first_name,
            self.last_name,
            self.email,
            self.password_hash,
            self.role.parse::<UserRole>().unwrap_or(UserRole::Customer),
            self.last_login,
            self.created_at,
            self.updated_at,
        )
    }
}
