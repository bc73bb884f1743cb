use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductStats;
use crate::domain::product::repository::ProductRepository;
use crate::domain::product::use_cases::get_stats::GetProductStatsUseCase;

pub struct GetProductStatsUseCaseImpl {
    pub repository: Arc<dyn ProductRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductStatsUseCase for GetProductStatsUseCaseImpl {
    async fn execute(&self) -> Result<ProductStats, ProductError> {
        self.logger.debug("Computing product stats");

        let stats = self.repository.stats().await?;

        self.logger.debug(&format!(
            "Product stats: {} total, {} active",
            stats.total, stats.active
        ));
        Ok(stats)
    }
}
