use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::product::model::{CategoryCount, Product, ProductPage, ProductStats};
use business::domain::product::repository::{ProductQuery, ProductRepository};
use business::domain::product::value_objects::ProductCategory;

use super::entity::ProductEntity;

pub struct ProductRepositoryPostgres {
    pool: PgPool,
}

impl ProductRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProductRepository for ProductRepositoryPostgres {
    async fn find(&self, query: &ProductQuery) -> Result<ProductPage, RepositoryError> {
        let category = query.category.map(|c| c.to_string());
        let search = query.search.as_ref().map(|s| format!("%{s}%"));
        let offset = i64::from(query.page.saturating_sub(1)) * i64::from(query.limit);

        let total: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM products
            WHERE ($1::text IS NULL OR category = $1)
              AND ($2::text IS NULL OR name ILIKE $2 OR description ILIKE $2)
              AND (NOT $3 OR is_active)"#,
        )
        .bind(&category)
        .bind(&search)
        .bind(query.only_active)
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let entities = sqlx::query_as::<_, ProductEntity>(
            r#"SELECT id, name, description, price, image, category, stock, is_active, created_at, updated_at
            FROM products
            WHERE ($1::text IS NULL OR category = $1)
              AND ($2::text IS NULL OR name ILIKE $2 OR description ILIKE $2)
              AND (NOT $3 OR is_active)
            ORDER BY created_at DESC
            LIMIT $4 OFFSET $5"#,
        )
        .bind(&category)
        .bind(&search)
        .bind(query.only_active)
        .bind(i64::from(query.limit))
        .bind(offset)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(ProductPage {
            products: entities.into_iter().map(|e| e.into_domain()).collect(),
            total: total.max(0) as u64,
            page: query.page,
            limit: query.limit,
        })
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Product, RepositoryError> {
        let entity = sqlx::query_as::<_, ProductEntity>(
            "SELECT id, name, description, price, image, category, stock, is_active, created_at, updated_at FROM products WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        entity.map(|e| e.into_domain()).ok_or(RepositoryError::NotFound)
    }

    async fn save(&self, product: &Product) -> Result<(), RepositoryError> {
        sqlx::query(
            r#"INSERT INTO products (id, name, description, price, image, category, stock, is_active, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                price = EXCLUDED.price,
                image = EXCLUDED.image,
                category = EXCLUDED.category,
                stock = EXCLUDED.stock,
                is_active = EXCLUDED.is_active,
                updated_at = EXCLUDED.updated_at"#,
        )
        .bind(product.id)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(&product.image)
        .bind(product.category.to_string())
        .bind(product.stock as i32)
        .bind(product.is_active)
        .bind(product.created_at)
        .bind(product.updated_at)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn stats(&self) -> Result<ProductStats, RepositoryError> {
        let (total, active): (i64, i64) =
            sqlx::query_as("SELECT COUNT(*), COUNT(*) FILTER (WHERE is_active) FROM products")
                .fetch_one(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        let rows: Vec<(String, i64)> = sqlx::query_as(
            "SELECT category, COUNT(*) FROM products WHERE is_active GROUP BY category ORDER BY category",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let categories = rows
            .into_iter()
            .filter_map(|(category, count)| {
                category
                    .parse::<ProductCategory>()
                    .ok()
                    .map(|category| CategoryCount {
                        category,
                        count: count.max(0) as u64,
                    })
            })
            .collect();

        Ok(ProductStats {
            total: total.max(0) as u64,
            active: active.max(0) as u64,
            inactive: (total - active).max(0) as u64,
            categories,
        })
    }
}
