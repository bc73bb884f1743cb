use crate::domain::shared::validation::FieldViolation;

#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.validation")]
    Validation(Vec<FieldViolation>),
    #[error("user.email_taken")]
    EmailTaken,
    #[error("user.invalid_credentials")]
    InvalidCredentials,
    #[error("user.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
