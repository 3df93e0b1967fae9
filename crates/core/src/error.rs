//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every kind is recoverable: the interactive layer reports it and asks
/// again. Terminal failures belong elsewhere.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A number parsed but fell outside its inclusive bounds.
    #[error("{value} is outside {min}..={max}")]
    OutOfRange { value: i64, min: i64, max: i64 },

    /// A number was expected but the token did not parse as one.
    #[error("not a number: {0:?}")]
    NotANumber(String),

    /// The token is not one of the known rarities.
    #[error("unknown rarity: {0:?}")]
    InvalidRarity(String),

    /// A name had the wrong number of characters.
    #[error("name must be {min}-{max} characters, got {actual}")]
    NameLength { actual: usize, min: usize, max: usize },

    /// A menu selection did not name any option.
    #[error("invalid selection: {0:?}")]
    InvalidSelection(String),

    /// A 1-based position did not address an existing entry.
    #[error("position {position} is outside 1..={len}")]
    PositionOutOfRange { position: usize, len: usize },
}

impl DomainError {
    pub fn out_of_range(value: i64, min: i64, max: i64) -> Self {
        Self::OutOfRange { value, min, max }
    }

    pub fn not_a_number(token: impl Into<String>) -> Self {
        Self::NotANumber(token.into())
    }

    pub fn invalid_rarity(token: impl Into<String>) -> Self {
        Self::InvalidRarity(token.into())
    }

    pub fn invalid_selection(token: impl Into<String>) -> Self {
        Self::InvalidSelection(token.into())
    }
}
