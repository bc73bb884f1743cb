use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::user::model::User;
use business::domain::user::repository::UserRepository;

use super::entity::UserEntity;

pub struct UserRepositoryPostgres {
    pool: PgPool,
}

impl UserRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError> {
        let entity = sqlx::query_as::<_, UserEntity>(
            "SELECT id, first_name, last_name, email, password_hash, role, last_login, created_at, updated_at FROM users WHERE id = $1",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError> {
        let entity = sqlx::query_as::<_, UserEntity>(
            "SELECT id, first_name, last_name, email, password_hash, role, last_login, created_at, updated_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, user: &User) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO users (id, first_name, last_name, email, password_hash, role, last_login, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (id) DO UPDATE SET
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                email = EXCLUDED.email,
                password_hash = EXCLUDED.password_hash,
                role = EXCLUDED.role,
                last_login = EXCLUDED.last_login,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(user.id.as_str())
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(user.role.to_string())
        .bind(user.last_login)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => RepositoryError::Duplicated,
            _ => RepositoryError::DatabaseError,
        })?;

        Ok(())
    }
}
