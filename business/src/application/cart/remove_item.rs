use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Removing product {} from cart of user {}",
            params.product_id, params.user_id
        ));

        let mut cart = self
            .cart_repository
            .find_by_user(&params.user_id)
            .await?
            .ok_or(CartError::NotFound)?;

        // Removing an absent product is a no-op, still persisted with
        // freshly recomputed totals.
        cart.remove_item(&params.product_id);
        self.cart_repository.save(&cart).await?;
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::{CartItem, NewCartItemProps, UserSnapshot};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError>;
            async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn cart_with_two_items() -> Cart {
        let mut cart = Cart::new(UserId::new("u1"), UserSnapshot::new("Ann", "Lee", "a@x.com"));
        for (product_id, price, quantity) in [("p1", 10.0, 2), ("p2", 5.0, 1)] {
            cart.add_item(
                CartItem::new(NewCartItemProps {
                    product_id: product_id.to_string(),
                    name: format!("Product {}", product_id),
                    description: "A product".to_string(),
                    price,
                    image: "/img.png".to_string(),
                    quantity,
                })
                .unwrap(),
            );
        }
        cart
    }

    fn params(product_id: &str) -> RemoveCartItemParams {
        RemoveCartItemParams {
            user_id: UserId::new("u1"),
            product_id: product_id.to_string(),
        }
    }

    #[tokio::test]
    async fn should_remove_item_and_recompute_totals() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_find_by_user()
            .returning(|_| Ok(Some(cart_with_two_items())));
        cart_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = RemoveCartItemUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            logger: mock_logger(),
        };

        let cart = use_case.execute(params("p1")).await.unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].product_id, "p2");
        assert_eq!(cart.total_items, 1);
        assert!((cart.total_amount - 5.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn should_treat_unknown_product_as_noop() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_find_by_user()
            .returning(|_| Ok(Some(cart_with_two_items())));
        cart_repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = RemoveCartItemUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            logger: mock_logger(),
        };

        let cart = use_case.execute(params("never-added")).await.unwrap();

        assert_eq!(cart.items.len(), 2);
        assert_eq!(cart.total_items, 3);
        assert!((cart.total_amount - 25.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn should_fail_when_cart_missing() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_find_by_user().returning(|_| Ok(None));

        let use_case = RemoveCartItemUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("p1")).await;
        assert!(matches!(result.unwrap_err(), CartError::NotFound));
    }

    #[tokio::test]
    async fn should_propagate_save_failure() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_find_by_user()
            .returning(|_| Ok(Some(cart_with_two_items())));
        cart_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = RemoveCartItemUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("p1")).await;
        assert!(matches!(result.unwrap_err(), CartError::Repository(_)));
    }
}
