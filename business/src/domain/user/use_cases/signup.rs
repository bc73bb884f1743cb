use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::model::User;

pub struct SignupParams {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
}

#[async_trait]
pub trait SignupUseCase: Send + Sync {
    async fn execute(&self, params: SignupParams) -> Result<User, UserError>;
}
