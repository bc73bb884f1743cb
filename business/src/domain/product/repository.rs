use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::{Product, ProductPage, ProductStats};
use super::value_objects::ProductCategory;

/// Catalog listing filters. `page` is 1-based.
#[derive(Debug, Clone)]
pub struct ProductQuery {
    pub category: Option<ProductCategory>,
    pub search: Option<String>,
    pub only_active: bool,
    pub page: u32,
    pub limit: u32,
}

#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn find(&self, query: &ProductQuery) -> Result<ProductPage, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError>;
    async fn save(&self, product: &Product) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    async fn stats(&self) -> Result<ProductStats, RepositoryError>;
}
