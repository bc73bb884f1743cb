use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::login::{LoginParams, LoginUseCase};

pub struct LoginUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<User, UserError> {
        let email = params.email.trim().to_lowercase();
        self.logger.info(&format!("Login attempt for {}", email));

        // Unknown email and wrong password answer identically so the
        // response does not leak which accounts exist.
        let Some(mut user) = self.repository.find_by_email(&email).await? else {
            self.logger.warn(&format!("Login failed for {}", email));
            return Err(UserError::InvalidCredentials);
        };
        if !self
            .password_hasher
            .verify(&params.password, &user.password_hash)
        {
            self.logger.warn(&format!("Login failed for {}", email));
            return Err(UserError::InvalidCredentials);
        }

        user.last_login = Some(Utc::now());
        user.updated_at = Utc::now();
        self.repository.save(&user).await?;

        self.logger.info(&format!("Login succeeded for {}", user.id));
        Ok(user)
    }
}
