use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::ProductError;
use super::value_objects::ProductCategory;
use crate::domain::shared::validation::{FieldViolation, ViolationList};

#[derive(Debug, Clone)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: ProductCategory,
    pub stock: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub struct NewProductProps {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: ProductCategory,
    pub stock: u32,
}

impl Product {
    pub fn new(props: NewProductProps) -> Result<Self, ProductError> {
        validate_fields(&props.name, &props.description, props.price, &props.image)
            .map_err(ProductError::Validation)?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            name: props.name,
            description: props.description,
            price: props.price,
            image: props.image,
            category: props.category,
            stock: props.stock,
            is_active: true,
            created_at: now,
            updated_at: now,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        name: String,
        description: String,
        price: f64,
        image: String,
        category: ProductCategory,
        stock: u32,
        is_active: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            price,
            image,
            category,
            stock,
            is_active,
            created_at,
            updated_at,
        }
    }
}

/// Shared by create and partial update so both report the same violations.
pub fn validate_fields(
    name: &str,
    description: &str,
    price: f64,
    image: &str,
) -> Result<(), Vec<FieldViolation>> {
    let mut violations = ViolationList::new();
    if name.trim().is_empty() {
        violations.add("name", "product.name_required");
    }
    if description.trim().is_empty() {
        violations.add("description", "product.description_required");
    }
    if !price.is_finite() || price < 0.0 {
        violations.add("price", "product.price_invalid");
    }
    if image.trim().is_empty() {
        violations.add("image", "product.image_required");
    }
    violations.into_result()
}

/// One page of a catalog listing plus the count matching the whole query.
#[derive(Debug)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
}

impl ProductPage {
    pub fn pages(&self) -> u64 {
        if self.limit == 0 {
            return 0;
        }
        self.total.div_ceil(u64::from(self.limit))
    }
}

/// Active-product count for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryCount {
    pub category: ProductCategory,
    pub count: u64,
}

/// Catalog-wide counts for the admin dashboard.
#[derive(Debug, Clone)]
pub struct ProductStats {
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
    /// Per-category counts over active products only.
    pub categories: Vec<CategoryCount>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> NewProductProps {
        NewProductProps {
            name: "400W Panel".to_string(),
            description: "Monocrystalline panel".to_string(),
            price: 249.99,
            image: "/panel.png".to_string(),
            category: ProductCategory::Solar,
            stock: 12,
        }
    }

    #[test]
    fn should_create_active_product() {
        let product = Product::new(props()).unwrap();
        assert!(product.is_active);
        assert_eq!(product.category, ProductCategory::Solar);
        assert_eq!(product.stock, 12);
    }

    #[test]
    fn should_collect_all_field_violations() {
        let result = Product::new(NewProductProps {
            name: "".to_string(),
            description: " ".to_string(),
            price: f64::INFINITY,
            image: "".to_string(),
            category: ProductCategory::Battery,
            stock: 0,
        });

        let Err(ProductError::Validation(violations)) = result else {
            panic!("expected validation failure");
        };
        let fields: Vec<&str> = violations.iter().map(|v| v.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "description", "price", "image"]);
    }

    #[test]
    fn should_reject_negative_price() {
        let mut invalid = props();
        invalid.price = -0.01;
        assert!(matches!(
            Product::new(invalid),
            Err(ProductError::Validation(_))
        ));
    }

    #[test]
    fn should_compute_page_count() {
        let page = ProductPage {
            products: vec![],
            total: 101,
            page: 1,
            limit: 50,
        };
        assert_eq!(page.pages(), 3);
    }
}
