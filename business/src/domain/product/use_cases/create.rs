use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::value_objects::ProductCategory;

pub struct CreateProductParams {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: ProductCategory,
    pub stock: u32,
}

#[async_trait]
pub trait CreateProductUseCase: Send + Sync {
    async fn execute(&self, params: CreateProductParams) -> Result<Product, ProductError>;
}
