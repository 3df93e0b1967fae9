//! Bounded integer parsing shared by every numeric rule.

use crate::error::{DomainError, DomainResult};

/// Inclusive integer bounds.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Bounds {
    pub min: i32,
    pub max: i32,
}

impl Bounds {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Check an already-parsed value against the bounds.
    pub fn check(&self, value: i32) -> DomainResult<i32> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(DomainError::out_of_range(
                value.into(),
                self.min.into(),
                self.max.into(),
            ))
        }
    }
}

/// Parse a whitespace-free token as a 32-bit signed integer within `bounds`.
///
/// Anything `i32` cannot represent (including overflow) counts as
/// not-a-number rather than out of range.
pub fn parse_bounded(token: &str, bounds: Bounds) -> DomainResult<i32> {
    let value: i32 = token
        .parse()
        .map_err(|_| DomainError::not_a_number(token))?;
    bounds.check(value)
}
