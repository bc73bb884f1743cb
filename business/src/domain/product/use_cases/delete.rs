use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::product::errors::ProductError;

pub struct DeleteProductParams {
    pub id: Uuid,
    /// Default deletion deactivates the product so it can be restored;
    /// a permanent delete removes the row.
    pub permanent: bool,
}

#[async_trait]
pub trait DeleteProductUseCase: Send + Sync {
    async fn execute(&self, params: DeleteProductParams) -> Result<(), ProductError>;
}
