use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::UserId;

pub struct UpdateCartItemQuantityParams {
    pub user_id: UserId,
    pub product_id: String,
    /// Absolute value, not an increment.
    pub quantity: i64,
}

#[async_trait]
pub trait UpdateCartItemQuantityUseCase: Send + Sync {
    async fn execute(&self, params: UpdateCartItemQuantityParams) -> Result<Cart, CartError>;
}
