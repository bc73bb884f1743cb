use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_by_id::{GetProductByIdParams, GetProductByIdUseCase};

pub struct GetProductByIdUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, params: GetProductByIdParams) -> Result<Product, ProductError> {
        self.logger.debug(&format!("Getting product {}", params.id));

        let product = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        // Deactivated products stay reachable for admins only.
        if !product.is_active && !params.include_inactive {
            return Err(ProductError::NotFound);
        }
        Ok(product)
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

    fn product(is_active: bool) -> Product {
        let mut product = Product::new(NewProductProps {
            name: "400W Panel".to_string(),
            description: "Monocrystalline panel".to_string(),
            price: 249.99,
            image: "/panel.png".to_string(),
            category: ProductCategory::Solar,
            stock: 3,
        })
        .unwrap();
        product.is_active = is_active;
        product
    }

    #[tokio::test]
    async fn should_return_active_product() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|_| Ok(product(true)));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: Uuid::new_v4(),
                include_inactive: false,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_hide_inactive_product_from_public_lookup() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|_| Ok(product(false)));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: Uuid::new_v4(),
                include_inactive: false,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }

    #[tokio::test]
    async fn should_show_inactive_product_to_admin_lookup() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id().returning(|_| Ok(product(false)));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: Uuid::new_v4(),
                include_inactive: true,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_map_missing_row_to_not_found() {
        let mut repo = MockProductRepo::new();
        repo.expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetProductByIdUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetProductByIdParams {
                id: Uuid::new_v4(),
                include_inactive: false,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::NotFound));
    }
}
