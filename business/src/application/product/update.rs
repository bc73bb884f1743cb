use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::{Product, validate_fields};
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::update::{UpdateProductParams, UpdateProductUseCase};

pub struct UpdateProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateProductUseCase for UpdateProductUseCaseImpl {
    async fn execute(&self, params: UpdateProductParams) -> Result<Product, ProductError> {
        self.logger
            .info(&format!("Updating product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        let name = params.name.unwrap_or(existing.name);
        let description = params.description.unwrap_or(existing.description);
        let price = params.price.unwrap_or(existing.price);
        let image = params.image.unwrap_or(existing.image);
        validate_fields(&name, &description, price, &image)
            .map_err(ProductError::Validation)?;

        let updated = Product::from_repository(
            existing.id,
            name,
            description,
            price,
            image,
            params.category.unwrap_or(existing.category),
            params.stock.unwrap_or(existing.stock),
            params.is_active.unwrap_or(existing.is_active),
            existing.created_at,
            Utc::now(),
        );
        self.repository.save(&updated).await?;

        self.logger.info(&format!("Product updated: {}", updated.id));
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::model::{NewProductProps, ProductPage, ProductStats};
    use crate::domain::product::repository::ProductQuery;
    use crate::domain::product::value_objects::ProductCategory;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub ProductRepo {}

        #[async_trait]
        impl ProductRepository for ProductRepo {
            async fn find(&self, query: &ProductQuery) -> Result<ProductPage, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
            async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn stats(&self) -> Result<ProductStats, RepositoryError>;
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

    fn stored_product() -> Product {
        Product::new(NewProductProps {
            name: "400W Panel".to_string(),
            description: "Monocrystalline panel".to_string(),
            price: 249.99,
            image: "/panel.png".to_string(),
            category: ProductCategory::Solar,
            stock: 12,
        })
        .unwrap()
    }

    fn empty_params(id: Uuid) -> UpdateProductParams {
        UpdateProductParams {
            id,
            name: None,
            description: None,
            price: None,
            image: None,
            category: None,
            stock: None,
            is_active: None,
        }
    }

    #[tokio::test]
    async fn should_apply_partial_update() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|_| Ok(stored_product()));
        repo.expect_save().times(1).returning(|_| Ok(()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let mut params = empty_params(Uuid::new_v4());
        params.price = Some(199.0);
        params.is_active = Some(false);

        let product = use_case.execute(params).await.unwrap();

        assert_eq!(product.price, 199.0);
        assert!(!product.is_active);
        // Untouched fields keep their stored values.
        assert_eq!(product.name, "400W Panel");
        assert_eq!(product.stock, 12);
    }

    #[tokio::test]
    async fn should_reject_emptied_name() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|_| Ok(stored_product()));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let mut params = empty_params(Uuid::new_v4());
        params.name = Some("  ".to_string());

        let result = use_case.execute(params).await;
        assert!(matches!(result.unwrap_err(), ProductError::Validation(_)));
    }

    #[tokio::test]
    async fn should_fail_when_product_missing() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = UpdateProductUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case.execute(empty_params(Uuid::new_v4())).await;
        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
