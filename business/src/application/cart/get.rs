use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::resolve::resolve_cart;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get::{GetCartParams, GetCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::user::repository::UserRepository;

pub struct GetCartUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartUseCase for GetCartUseCaseImpl {
    async fn execute(&self, params: GetCartParams) -> Result<Cart, CartError> {
        self.logger
            .info(&format!("Getting cart for user {}", params.user_id));

        let (cart, dirty) = resolve_cart(
            self.cart_repository.as_ref(),
            self.user_repository.as_ref(),
            self.logger.as_ref(),
            &params.user_id,
        )
        .await?;

        if dirty {
            self.cart_repository.save(&cart).await?;
        }
        Ok(cart)
    }
}
