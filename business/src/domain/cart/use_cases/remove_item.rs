use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::UserId;

pub struct RemoveCartItemParams {
    pub user_id: UserId,
    pub product_id: String,
}

#[async_trait]
pub trait RemoveCartItemUseCase: Send + Sync {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Cart, CartError>;
}
