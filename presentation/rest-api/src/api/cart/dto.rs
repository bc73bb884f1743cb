use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::cart::model::{Cart, CartItem, UserSnapshot};

#[derive(Debug, Clone, Object)]
pub struct AddCartItemRequest {
    /// Catalog identifier of the product being added
    pub product_id: String,
    /// Product name captured at add time
    pub name: String,
    /// Product description captured at add time
    pub description: String,
    /// Unit price captured at add time; merging keeps the first price
    pub price: f64,
    /// Image URL captured at add time
    pub image: String,
    /// Units to add (minimum 1)
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateCartItemRequest {
    /// Absolute quantity, not an increment (minimum 1)
    pub quantity: i64,
}

#[derive(Debug, Clone, Object)]
pub struct CartItemResponse {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
    /// Line subtotal (price x quantity)
    pub amount: f64,
    pub added_at: DateTime<Utc>,
}

impl From<&CartItem> for CartItemResponse {
    fn from(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id.clone(),
            name: item.name.clone(),
            description: item.description.clone(),
            price: item.price,
            image: item.image.clone(),
            quantity: item.quantity,
            amount: item.line_amount(),
            added_at: item.added_at,
        }
    }
}

/// Owner details denormalized into the cart.
#[derive(Debug, Clone, Object)]
pub struct CartOwnerResponse {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl From<&UserSnapshot> for CartOwnerResponse {
    fn from(snapshot: &UserSnapshot) -> Self {
        Self {
            first_name: snapshot.first_name.clone(),
            last_name: snapshot.last_name.clone(),
            email: snapshot.email.clone(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct CartResponse {
    pub user_id: String,
    pub user: CartOwnerResponse,
    pub items: Vec<CartItemResponse>,
    /// Sum of all line quantities
    pub total_items: u64,
    /// Sum of all line subtotals
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Cart> for CartResponse {
    fn from(cart: Cart) -> Self {
        Self {
            user_id: cart.user_id.to_string(),
            user: (&cart.user_snapshot).into(),
            items: cart.items.iter().map(CartItemResponse::from).collect(),
            total_items: cart.total_items,
            total_amount: cart.total_amount,
            created_at: cart.created_at,
            updated_at: cart.updated_at,
        }
    }
}
