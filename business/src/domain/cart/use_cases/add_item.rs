use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::shared::value_objects::UserId;

pub struct AddCartItemParams {
    pub user_id: UserId,
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub quantity: i64,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError>;
}
