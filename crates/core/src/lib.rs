//! `itemshop-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no terminal or IO concerns).

pub mod bounded;
pub mod error;
pub mod value_object;

pub use bounded::{parse_bounded, Bounds};
pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
