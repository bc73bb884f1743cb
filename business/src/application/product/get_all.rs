use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductPage;
use crate::domain::product::repository::{ProductQuery, ProductRepository};
use crate::domain::product::use_cases::get_all::{GetAllProductsParams, GetAllProductsUseCase};

const DEFAULT_LIMIT: u32 = 50;
const MAX_LIMIT: u32 = 100;

pub struct GetAllProductsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllProductsUseCase for GetAllProductsUseCaseImpl {
    async fn execute(&self, params: GetAllProductsParams) -> Result<ProductPage, ProductError> {
        self.logger.debug("Listing products");

        let query = ProductQuery {
            category: params.category,
            search: params
                .search
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            only_active: !params.include_inactive,
            page: params.page.unwrap_or(1).max(1),
            limit: params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT),
        };
        let page = self.repository.find(&query).await?;

        self.logger.debug(&format!(
            "Listed {} of {} products",
            page.products.len(),
            page.total
        ));
        Ok(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::product::model::{Product, ProductStats};
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

    #[tokio::test]
    async fn should_default_to_first_page_of_active_products() {
        let mut repo = MockProductRepo::new();
        repo.expect_find()
            .withf(|query| {
                query.only_active
                    && query.page == 1
                    && query.limit == 50
                    && query.category.is_none()
                    && query.search.is_none()
            })
            .returning(|query| {
                Ok(ProductPage {
                    products: vec![],
                    total: 0,
                    page: query.page,
                    limit: query.limit,
                })
            });

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let page = use_case
            .execute(GetAllProductsParams {
                category: None,
                search: None,
                page: None,
                limit: None,
                include_inactive: false,
            })
            .await
            .unwrap();

        assert_eq!(page.page, 1);
        assert_eq!(page.limit, 50);
    }

    #[tokio::test]
    async fn should_clamp_limit_and_drop_blank_search() {
        let mut repo = MockProductRepo::new();
        repo.expect_find()
            .withf(|query| {
                query.limit == 100
                    && query.search.is_none()
                    && query.category == Some(ProductCategory::Battery)
                    && !query.only_active
            })
            .returning(|query| {
                Ok(ProductPage {
                    products: vec![],
                    total: 0,
                    page: query.page,
                    limit: query.limit,
                })
            });

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllProductsParams {
                category: Some(ProductCategory::Battery),
                search: Some("   ".to_string()),
                page: Some(0),
                limit: Some(500),
                include_inactive: true,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_propagate_store_failure() {
        let mut repo = MockProductRepo::new();
        repo.expect_find()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = GetAllProductsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetAllProductsParams {
                category: None,
                search: None,
                page: None,
                limit: None,
                include_inactive: false,
            })
            .await;

        assert!(matches!(result.unwrap_err(), ProductError::Repository(_)));
    }
}
