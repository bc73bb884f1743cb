use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::product::model::Product;
use business::domain::product::value_objects::ProductCategory;

#[derive(Debug, FromRow)]
pub struct ProductEntity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub stock: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProductEntity {
    pub fn into_domain(self) -> Product {
        Product::from_repository(
            self.id,
            self.name,
            self.description,
            self.price,
            self.image,
            self.category
                .parse::<ProductCategory>()
                .unwrap_or(ProductCategory::Accessories),
            self.stock.max(0) as u32,
            self.is_active,
            self.created_at,
            self.updated_at,
        )
    }
}
