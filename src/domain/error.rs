//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent violations of container and element rules.
/// Cursor precondition violations are not listed here: they are contract
/// bugs and panic instead.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("container is full: capacity {capacity} reached")]
    CapacityExceeded { capacity: usize },

    #[error("invalid container capacity: {0}")]
    InvalidCapacity(usize),

    #[error("invalid price for {name}: {price}")]
    InvalidPrice { name: String, price: f64 },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
