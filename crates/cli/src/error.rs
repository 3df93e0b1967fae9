use thiserror::Error;

use itemshop_core::DomainError;

pub type ShopResult<T> = Result<T, ShopError>;

/// Failures that end an interactive session.
///
/// Bad operator input never shows up here; it is reported and re-prompted
/// where it is read.
#[derive(Debug, Error)]
pub enum ShopError {
    #[error("terminal io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input closed before the session ended")]
    InputClosed,

    #[error(transparent)]
    Domain(#[from] DomainError),
}
