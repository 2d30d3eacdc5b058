use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Commande not found")]
    NotFound,
    #[error("Internal error: {0}")]
    Internal(String),
}
