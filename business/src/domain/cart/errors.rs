use crate::domain::shared::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.validation")]
    Validation(Vec<FieldViolation>),
    #[error("cart.user_not_found")]
    UserNotFound,
    #[error("cart.not_found")]
    NotFound,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
