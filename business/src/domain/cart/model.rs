use chrono::{DateTime, Utc};

use super::errors::CartError;
use crate::domain::shared::validation::ViolationList;
use crate::domain::shared::value_objects::UserId;

/// Denormalized copy of the owner's identity, stored inside the cart for
/// display. Captured at creation and only refreshed when detected stale
/// (empty first name), so a renamed user can keep an outdated snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSnapshot {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl UserSnapshot {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }
}

/// One product line inside a cart. Display fields and price are captured
/// at add-time and never re-synced from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub quantity: u32,
    pub added_at: DateTime<Utc>,
}

pub struct NewCartItemProps {
    pub product_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    /// Signed so out-of-range requests reach validation instead of being
    /// rejected earlier by a type conversion.
    pub quantity: i64,
}

impl CartItem {
    pub fn new(props: NewCartItemProps) -> Result<Self, CartError> {
        let mut violations = ViolationList::new();
        if props.product_id.trim().is_empty() {
            violations.add("product_id", "cart_item.product_id_required");
        }
        if props.name.trim().is_empty() {
            violations.add("name", "cart_item.name_required");
        }
        if props.description.trim().is_empty() {
            violations.add("description", "cart_item.description_required");
        }
        if props.image.trim().is_empty() {
            violations.add("image", "cart_item.image_required");
        }
        if !props.price.is_finite() || props.price < 0.0 {
            violations.add("price", "cart_item.price_invalid");
        }
        let quantity = if props.quantity < 1 {
            violations.add("quantity", "cart_item.quantity_min");
            0
        } else {
            match u32::try_from(props.quantity) {
                Ok(quantity) => quantity,
                Err(_) => {
                    violations.add("quantity", "cart_item.quantity_max");
                    0
                }
            }
        };
        violations.into_result().map_err(CartError::Validation)?;

        Ok(Self {
            product_id: props.product_id,
            name: props.name,
            description: props.description,
            price: props.price,
            image: props.image,
            quantity,
            added_at: Utc::now(),
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        product_id: String,
        name: String,
        description: String,
        price: f64,
        image: String,
        quantity: u32,
        added_at: DateTime<Utc>,
    ) -> Self {
        Self {
            product_id,
            name,
            description,
            price,
            image,
            quantity,
            added_at,
        }
    }

    pub fn line_amount(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// The single cart document owned by one user: insertion-ordered items,
/// a user-identity snapshot, and derived totals.
///
/// `total_items` and `total_amount` are never set by callers; every
/// mutator ends in [`Cart::recompute`], which also stamps `updated_at`.
#[derive(Debug, Clone)]
pub struct Cart {
    pub user_id: UserId,
    pub user_snapshot: UserSnapshot,
    pub items: Vec<CartItem>,
    pub total_items: u64,
    pub total_amount: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Cart {
    pub fn new(user_id: UserId, user_snapshot: UserSnapshot) -> Self {
        let now = Utc::now();
        Self {
            user_id,
            user_snapshot,
            items: Vec::new(),
            total_items: 0,
            total_amount: 0.0,
            created_at: now,
            updated_at: now,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        user_id: UserId,
        user_snapshot: UserSnapshot,
        items: Vec<CartItem>,
        total_items: u64,
        total_amount: f64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id,
            user_snapshot,
            items,
            total_items,
            total_amount,
            created_at,
            updated_at,
        }
    }

    /// Adds a validated item. If the product is already in the cart the
    /// quantities merge onto the existing line; its price, name and
    /// `added_at` stay as captured by the first add.
    pub fn add_item(&mut self, item: CartItem) {
        match self
            .items
            .iter_mut()
            .find(|existing| existing.product_id == item.product_id)
        {
            // Saturating keeps the merged line in range instead of wrapping.
            Some(existing) => existing.quantity = existing.quantity.saturating_add(item.quantity),
            None => self.items.push(item),
        }
        self.recompute();
    }

    /// Sets an absolute quantity on an existing line (not an increment).
    pub fn set_item_quantity(&mut self, product_id: &str, quantity: i64) -> Result<(), CartError> {
        let mut violations = ViolationList::new();
        let quantity = if quantity < 1 {
            violations.add("quantity", "cart_item.quantity_min");
            0
        } else {
            match u32::try_from(quantity) {
                Ok(quantity) => quantity,
                Err(_) => {
                    violations.add("quantity", "cart_item.quantity_max");
                    0
                }
            }
        };
        violations.into_result().map_err(CartError::Validation)?;

        let item = self
            .items
            .iter_mut()
            .find(|item| item.product_id == product_id)
            .ok_or(CartError::ItemNotFound)?;
        item.quantity = quantity;
        self.recompute();
        Ok(())
    }

    /// Removes a line if present. Removing an unknown product is a no-op
    /// that still recomputes, so the call is idempotent.
    pub fn remove_item(&mut self, product_id: &str) {
        self.items.retain(|item| item.product_id != product_id);
        self.recompute();
    }

    pub fn clear(&mut self) {
        self.items.clear();
        self.recompute();
    }

    /// A snapshot without a first name predates the snapshot field and
    /// should be repaired from the user directory on the next mutation.
    /// A changed but non-empty name is not detected; that staleness is
    /// accepted behavior.
    pub fn snapshot_is_stale(&self) -> bool {
        self.user_snapshot.first_name.trim().is_empty()
    }

    pub fn refresh_snapshot(&mut self, user_snapshot: UserSnapshot) {
        self.user_snapshot = user_snapshot;
        self.updated_at = Utc::now();
    }

    pub fn owner_full_name(&self) -> String {
        format!(
            "{} {}",
            self.user_snapshot.first_name, self.user_snapshot.last_name
        )
    }

    /// Rederives both totals from the item list and stamps the mutation
    /// time. Every mutator ends here.
    fn recompute(&mut self) {
        self.total_items = self
            .items
            .iter()
            .map(|item| u64::from(item.quantity))
            .sum();
        self.total_amount = self.items.iter().map(CartItem::line_amount).sum();
        self.updated_at = Utc::now();
    }
}
