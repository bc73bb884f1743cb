use crate::domain::shared::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("product.validation")]
    Validation(Vec<FieldViolation>),
    #[error("product.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
