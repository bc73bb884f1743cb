use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::Product;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::delete::{DeleteProductParams, DeleteProductUseCase};

pub struct DeleteProductUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteProductUseCase for DeleteProductUseCaseImpl {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError> {
        self.logger
            .info(&format!("Deleting product: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => ProductError::NotFound,
                other => ProductError::Repository(other),
            })?;

        if params.permanent {
            self.repository.delete(params.id).await?;
            self.logger
                .info(&format!("Product permanently deleted: {}", params.id));
            return Ok(());
        }

        // Regular delete only deactivates; the row stays restorable
        // through an update with is_active = true.
        let deactivated = Product::from_repository(
            existing.id,
            existing.name,
            existing.description,
            existing.price,
            existing.image,
            existing.category,
            existing.stock,
            false,
            existing.created_at,
            Utc::now(),
        );
        self.repository.save(&deactivated).await?;

        self.logger.info(&format!("Product deactivated: {}", params.id));
        Ok(())
    }
}
