use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::types::Json;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use super::entity::{CartEntity, CartItemRecord};

pub struct CartRepositoryPostgres {
    pool: PgPool,
}

impl CartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for CartRepositoryPostgres {
    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<Cart>, RepositoryError> {
        let entity = sqlx::query_as::<_, CartEntity>(
            "SELECT user_id, first_name, last_name, email, items, total_items, total_amount, created_at, updated_at FROM carts WHERE user_id = $1",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entity.map(|e| e.into_domain()))
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let items: Vec<CartItemRecord> =
            cart.items.iter().map(CartItemRecord::from_domain).collect();

        // Full-document replace keyed by user; last write wins.
        sqlx::query(
            r#"INSERT INTO carts (user_id, first_name, last_name, email, items, total_items, total_amount, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            ON CONFLICT (user_id) DO UPDATE SET
                first_name = EXCLUDED.first_name,
                last_name = EXCLUDED.last_name,
                email = EXCLUDED.email,
                items = EXCLUDED.items,
                total_items = EXCLUDED.total_items,
                total_amount = EXCLUDED.total_amount,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(cart.user_id.as_str())
        .bind(&cart.user_snapshot.first_name)
        .bind(&cart.user_snapshot.last_name)
        .bind(&cart.user_snapshot.email)
        .bind(Json(items))
        .bind(cart.total_items as i64)
        .bind(cart.total_amount)
        .bind(cart.created_at)
        .bind(cart.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
