use std::sync::Arc;

use async_trait::async_trait;

use crate::application::cart::resolve::resolve_cart;
use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartItem, NewCartItemProps};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::user::repository::UserRepository;

pub struct AddCartItemUseCaseImpl {
    pub cart_repository: Arc<dyn CartRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<Cart, CartError> {
        self.logger.info(&format!(
            "Adding product {} to cart of user {}",
            params.product_id, params.user_id
        ));

        // Validate the full item before touching any state, so a rejected
        // request never creates or mutates a cart.
        let item = CartItem::new(NewCartItemProps {
            product_id: params.product_id,
            name: params.name,
            description: params.description,
            price: params.price,
            image: params.image,
            quantity: params.quantity,
        })?;

        let (mut cart, _) = resolve_cart(
            self.cart_repository.as_ref(),
            self.user_repository.as_ref(),
            self.logger.as_ref(),
            &params.user_id,
        )
        .await?;

        cart.add_item(item);
        self.cart_repository.save(&cart).await?;

        self.logger.info(&format!(
            "Cart of user {} now holds {} items",
            params.user_id, cart.total_items
        ));
        Ok(cart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::model::UserSnapshot;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::user::model::{User, UserRole};
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
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, RepositoryError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepositoryError>;
            async fn save(&self, user: &User) -> Result<(), RepositoryError>;
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

    fn test_user() -> User {
        User::from_repository(
            UserId::new("u1"),
            "Ann".to_string(),
            "Lee".to_string(),
            "a@x.com".to_string(),
            "hash".to_string(),
            UserRole::Customer,
            None,
            chrono::Utc::now(),
            chrono::Utc::now(),
        )
    }

    fn add_params(product_id: &str, price: f64, quantity: i64) -> AddCartItemParams {
        AddCartItemParams {
            user_id: UserId::new("u1"),
            product_id: product_id.to_string(),
            name: format!("Product {}", product_id),
            description: "A product".to_string(),
            price,
            image: "/img.png".to_string(),
            quantity,
        }
    }

    fn cart_with_p1() -> Cart {
        let mut cart = Cart::new(UserId::new("u1"), UserSnapshot::new("Ann", "Lee", "a@x.com"));
        cart.add_item(
            CartItem::new(NewCartItemProps {
                product_id: "p1".to_string(),
                name: "Product p1".to_string(),
                description: "A product".to_string(),
                price: 10.0,
                image: "/img.png".to_string(),
                quantity: 2,
            })
            .unwrap(),
        );
        cart
    }

    #[tokio::test]
    async fn should_add_item_to_lazily_created_cart() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_find_by_user().returning(|_| Ok(None));
        cart_repo.expect_save().times(1).returning(|_| Ok(()));

        let mut user_repo = MockUserRepo::new();
        user_repo
            .expect_find_by_id()
            .returning(|_| Ok(Some(test_user())));

        let use_case = AddCartItemUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            user_repository: Arc::new(user_repo),
            logger: mock_logger(),
        };

        let cart = use_case.execute(add_params("p1", 10.0, 2)).await.unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.total_items, 2);
        assert!((cart.total_amount - 20.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn should_merge_quantity_when_product_already_in_cart() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_find_by_user()
            .returning(|_| Ok(Some(cart_with_p1())));
        cart_repo.expect_save().returning(|_| Ok(()));

        let use_case = AddCartItemUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            user_repository: Arc::new(MockUserRepo::new()),
            logger: mock_logger(),
        };

        // Repeat add with a different price: quantity merges, price stays.
        let cart = use_case.execute(add_params("p1", 12.0, 3)).await.unwrap();

        assert_eq!(cart.items.len(), 1);
        assert_eq!(cart.items[0].quantity, 5);
        assert_eq!(cart.items[0].price, 10.0);
        assert_eq!(cart.total_items, 5);
        assert!((cart.total_amount - 50.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn should_reject_invalid_input_before_any_lookup() {
        // No expectations on either repository: a lookup would panic.
        let use_case = AddCartItemUseCaseImpl {
            cart_repository: Arc::new(MockCartRepo::new()),
            user_repository: Arc::new(MockUserRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                user_id: UserId::new("u1"),
                product_id: "".to_string(),
                name: "".to_string(),
                description: "".to_string(),
                price: -1.0,
                image: "".to_string(),
                quantity: 0,
            })
            .await;

        let Err(CartError::Validation(violations)) = result else {
            panic!("expected validation failure");
        };
        assert_eq!(violations.len(), 6);
    }

    #[tokio::test]
    async fn should_fail_when_user_missing_on_first_add() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo.expect_find_by_user().returning(|_| Ok(None));

        let mut user_repo = MockUserRepo::new();
        user_repo.expect_find_by_id().returning(|_| Ok(None));

        let use_case = AddCartItemUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            user_repository: Arc::new(user_repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(add_params("p1", 10.0, 1)).await;
        assert!(matches!(result.unwrap_err(), CartError::UserNotFound));
    }

    #[tokio::test]
    async fn should_propagate_save_failure() {
        let mut cart_repo = MockCartRepo::new();
        cart_repo
            .expect_find_by_user()
            .returning(|_| Ok(Some(cart_with_p1())));
        cart_repo
            .expect_save()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = AddCartItemUseCaseImpl {
            cart_repository: Arc::new(cart_repo),
            user_repository: Arc::new(MockUserRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(add_params("p2", 5.0, 1)).await;
        assert!(matches!(result.unwrap_err(), CartError::Repository(_)));
    }
}
