use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::product::model::{Product, ProductPage, ProductStats};
use business::domain::product::value_objects::ProductCategory;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
pub enum ProductCategoryDto {
    #[oai(rename = "solar")]
    Solar,
    #[oai(rename = "battery")]
    Battery,
    #[oai(rename = "inverter")]
    Inverter,
    #[oai(rename = "accessories")]
    Accessories,
}

impl From<ProductCategory> for ProductCategoryDto {
    fn from(category: ProductCategory) -> Self {
        match category {
            ProductCategory::Solar => ProductCategoryDto::Solar,
            ProductCategory::Battery => ProductCategoryDto::Battery,
            ProductCategory::Inverter => ProductCategoryDto::Inverter,
            ProductCategory::Accessories => ProductCategoryDto::Accessories,
        }
    }
}

impl From<ProductCategoryDto> for ProductCategory {
    fn from(dto: ProductCategoryDto) -> Self {
        match dto {
            ProductCategoryDto::Solar => ProductCategory::Solar,
            ProductCategoryDto::Battery => ProductCategory::Battery,
            ProductCategoryDto::Inverter => ProductCategory::Inverter,
            ProductCategoryDto::Accessories => ProductCategory::Accessories,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CreateProductRequest {
    /// Product name (cannot be empty)
    pub name: String,
    /// Product description (cannot be empty)
    pub description: String,
    /// Unit price (must be finite and non-negative)
    pub price: f64,
    /// Image URL or path
    pub image: String,
    /// Product category
    pub category: ProductCategoryDto,
    /// Units in stock
    #[oai(default)]
    pub stock: u32,
}

/// Partial update; absent fields keep their stored values.
#[derive(Debug, Clone, Object)]
pub struct UpdateProductRequest {
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub description: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub price: Option<f64>,
    #[oai(skip_serializing_if_is_none)]
    pub image: Option<String>,
    #[oai(skip_serializing_if_is_none)]
    pub category: Option<ProductCategoryDto>,
    #[oai(skip_serializing_if_is_none)]
    pub stock: Option<u32>,
    #[oai(skip_serializing_if_is_none)]
    pub is_active: Option<bool>,
}

#[derive(Debug, Clone, Object)]
pub struct ProductResponse {
    /// Product unique identifier
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: ProductCategoryDto,
    pub stock: u32,
    pub is_active: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.to_string(),
            name: product.name,
            description: product.description,
            price: product.price,
            image: product.image,
            category: product.category.into(),
            stock: product.stock,
            is_active: product.is_active,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// One page of the catalog plus pagination metadata.
#[derive(Debug, Clone, Object)]
pub struct ProductListResponse {
    pub products: Vec<ProductResponse>,
    /// Count matching the whole query, not just this page
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub pages: u64,
}

impl From<ProductPage> for ProductListResponse {
    fn from(page: ProductPage) -> Self {
        let pages = page.pages();
        Self {
            products: page.products.into_iter().map(|p| p.into()).collect(),
            total: page.total,
            page: page.page,
            limit: page.limit,
            pages,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CategoryCountResponse {
    pub category: ProductCategoryDto,
    /// Active products in this category
    pub count: u64,
}

/// Catalog-wide counts for the admin dashboard.
#[derive(Debug, Clone, Object)]
pub struct ProductStatsResponse {
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
    pub categories: Vec<CategoryCountResponse>,
}

impl From<ProductStats> for ProductStatsResponse {
    fn from(stats: ProductStats) -> Self {
        Self {
            total: stats.total,
            active: stats.active,
            inactive: stats.inactive,
            categories: stats
                .categories
                .into_iter()
                .map(|c| CategoryCountResponse {
                    category: c.category.into(),
                    count: c.count,
                })
                .collect(),
        }
    }
}
