use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartItemQuantityParams, UpdateCartItemQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateCartItemQuantityUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartItemQuantityUseCase for UpdateCartItemQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartItemQuantityParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Setting quantity of product {} to {} for user {}",
            params.product_id, params.quantity, params.user_id
        ));

        let mut cart = self
            .cart_repository
            .find_by_user(&params.user_id)
            .await?
            .ok_or(CartError::NotFound)?;

        cart.set_item_quantity(&params.product_id, params.quantity)?;
        self.cart_repository.save(&cart).await?;
        Ok(cart)
    }
}
