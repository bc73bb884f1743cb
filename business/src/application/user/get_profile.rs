use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_profile::{GetProfileParams, GetProfileUseCase};

pub struct GetProfileUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProfileUseCase for GetProfileUseCaseImpl {
    async fn execute(&self, params: GetProfileParams) -> Result<User, UserError> {
        self.logger
            .debug(&format!("Loading profile of {}", params.user_id));

        self.repository
            .find_by_id(&params.user_id)
            .await?
            .ok_or(UserError::NotFound)
    }
}
