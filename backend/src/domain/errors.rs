//! Error types surfaced by the pet domain services.

#[derive(Debug, thiserror::Error)]
pub enum PetValidationError {
    #[error("Pet id in path ({path_id}) does not match id in body ({body_id})")]
    IdMismatch { path_id: i64, body_id: i64 },
    #[error("Hunger level cannot be negative (got {0})")]
    NegativeHunger(i64),
    #[error("Happiness level cannot be negative (got {0})")]
    NegativeHappiness(i64),
    #[error("Pet id must be between 1 and 2147483647 (got {0})")]
    InvalidId(i64),
    #[error("Birthday must be an RFC 3339 timestamp: {0}")]
    InvalidBirthday(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PetError {
    #[error("Pet not found: {0}")]
    NotFound(i64),
    #[error(transparent)]
    Validation(#[from] PetValidationError),
    #[error("Pet id {0} is already taken")]
    IdentifierConflict(i64),
    #[error("Pet {0} was modified by another request")]
    ConcurrencyConflict(i64),
    #[error(transparent)]
    Storage(#[from] anyhow::Error),
}

pub type PetResult<T> = Result<T, PetError>;
