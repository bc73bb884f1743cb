use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::UserId;

pub struct GetCartParams {
    pub user_id: UserId,
}

/// Fetches the user's cart, lazily creating an empty one on first access.
#[async_trait]
pub trait GetCartUseCase: Send + Sync {
    async fn execute(&self, params: GetCartParams) -> Result<Cart, CartError>;
}
