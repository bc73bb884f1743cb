use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductPage;
use crate::domain::product::value_objects::ProductCategory;

pub struct GetAllProductsParams {
    pub category: Option<ProductCategory>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub limit: Option<u32>,
    /// Admin listings may include deactivated products.
    pub include_inactive: bool,
}

#[async_trait]
pub trait GetAllProductsUseCase: Send + Sync {
    async fn execute(&self, params: GetAllProductsParams) -> Result<ProductPage, ProductError>;
}
