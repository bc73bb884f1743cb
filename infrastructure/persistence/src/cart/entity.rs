use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;

use business::domain::cart::model::{Cart, CartItem, UserSnapshot};
use business::domain::shared::value_objects::UserId;

/// JSONB shape of one cart line. The whole item list is stored inside the
/// cart row, keeping the aggregate a single document per user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartItemRecord {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

impl CartItemRecord {
    pub fn from_domain(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            image: item.image.clone(),
            quantity: item.quantity,
            added_at: item.added_at,
        }
    }

    pub fn into_domain(self) -> CartItem {
        CartItem::from_repository(
            self.product_id,
            self.name,
            self.description,
            self.price,
            self.image,
            self.quantity,
            self.added_at,
        )
    }
}

#[derive(Debug, FromRow)]
pub struct CartEntity {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub items: Json<Vec<CartItemRecord>>,
    pub total_items: i64,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CartEntity {
    pub fn into_domain(self) -> Cart {
        Cart::from_repository(
            UserId::new(self.user_id),
            UserSnapshot::new(self.first_name, self.last_name, self.email),
            self.items.0.into_iter().map(|r| r.into_domain()).collect(),
            self.total_items.max(0) as u64,
            self.total_amount,
            self.created_at,
            self.updated_at,
        )
    }
}
