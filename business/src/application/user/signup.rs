use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::{NewUserProps, User, UserRole, validate_registration};
use crate::domain::user::repository::UserRepository;
use crate::domain::user::services::PasswordHasher;
use crate::domain::user::use_cases::signup::{SignupParams, SignupUseCase};

pub struct SignupUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SignupUseCase for SignupUseCaseImpl {
    async fn execute(&self, params: SignupParams) -> Result<User, UserError> {
        self.logger
            .info(&format!("Registering user {}", params.email));

        validate_registration(
            &params.first_name,
            &params.last_name,
            &params.email,
            &params.password,
        )
        .map_err(UserError::Validation)?;

        let email = params.email.trim().to_lowercase();
        if self.repository.find_by_email(&email).await?.is_some() {
            self.logger
                .warn(&format!("Signup rejected, email taken: {}", email));
            return Err(UserError::EmailTaken);
        }

        let user = User::new(NewUserProps {
            first_name: params.first_name.trim().to_string(),
            last_name: params.last_name.trim().to_string(),
            email,
            password_hash: self.password_hasher.hash(&params.password),
            role: UserRole::Customer,
        });
        // The pre-check races with concurrent signups; the unique index on
        // email is the real guard, so a duplicate insert is still a conflict.
        self.repository.save(&user).await.map_err(|e| match e {
            RepositoryError::Duplicated => UserError::EmailTaken,
            other => UserError::Repository(other),
        })?;

        self.logger.info(&format!("User registered: {}", user.id));
        Ok(user)
    }
}
