use async_trait::async_trait;

use crate::domain::product::errors::ProductError;
use crate::domain::product::model::ProductStats;

#[async_trait]
pub trait GetProductStatsUseCase: Send + Sync {
    async fn execute(&self) -> Result<ProductStats, ProductError>;
}
