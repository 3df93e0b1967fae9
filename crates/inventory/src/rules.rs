//! Field-level validation rules.
//!
//! Each attribute of an item is a value object whose only constructor runs
//! the matching rule, so an item assembled from them can never hold an
//! out-of-bounds field.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use itemshop_core::{parse_bounded, Bounds, DomainError, DomainResult, ValueObject};

pub const NAME_MIN_CHARS: usize = 4;
pub const NAME_MAX_CHARS: usize = 25;

pub const LEVEL_MIN: i32 = 1;
pub const LEVEL_MAX: i32 = 1000;

pub const PRICE_MIN: i32 = 1000;
pub const PRICE_MAX: i32 = 9_999_999;

pub const POINTS_MIN: i32 = 0;
pub const POINTS_MAX: i32 = i32::MAX;

pub const LEVEL_BOUNDS: Bounds = Bounds::new(LEVEL_MIN, LEVEL_MAX);
pub const PRICE_BOUNDS: Bounds = Bounds::new(PRICE_MIN, PRICE_MAX);
pub const POINTS_BOUNDS: Bounds = Bounds::new(POINTS_MIN, POINTS_MAX);

/// Whether `name` has an acceptable number of characters (not bytes).
pub fn is_valid_name(name: &str) -> bool {
    (NAME_MIN_CHARS..=NAME_MAX_CHARS).contains(&name.chars().count())
}

/// Item name, 4 to 25 characters. Embedded spaces are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemName(String);

impl ItemName {
    pub fn new(name: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(DomainError::NameLength {
                actual: name.chars().count(),
                min: NAME_MIN_CHARS,
                max: NAME_MAX_CHARS,
            });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemName {}

impl TryFrom<String> for ItemName {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ItemName> for String {
    fn from(value: ItemName) -> Self {
        value.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Item quality classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    pub const ALL: [Rarity; 4] = [
        Rarity::Common,
        Rarity::Rare,
        Rarity::Epic,
        Rarity::Legendary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        }
    }
}

impl ValueObject for Rarity {}

/// Exact, case-sensitive match against the rarity names.
impl FromStr for Rarity {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Rarity::ALL
            .into_iter()
            .find(|rarity| rarity.as_str() == s)
            .ok_or_else(|| DomainError::invalid_rarity(s))
    }
}

impl core::fmt::Display for Rarity {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

macro_rules! impl_bounded_value {
    ($t:ident, $bounds:expr, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(try_from = "i32", into = "i32")]
        pub struct $t(i32);

        impl $t {
            pub const BOUNDS: Bounds = $bounds;

            pub fn new(value: i32) -> DomainResult<Self> {
                Self::BOUNDS.check(value).map(Self)
            }

            /// Parse an input token, distinguishing non-numeric from out-of-range.
            pub fn parse(token: &str) -> DomainResult<Self> {
                parse_bounded(token, Self::BOUNDS).map(Self)
            }

            pub fn get(&self) -> i32 {
                self.0
            }
        }

        impl ValueObject for $t {}

        impl TryFrom<i32> for $t {
            type Error = DomainError;

            fn try_from(value: i32) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }

        impl From<$t> for i32 {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

impl_bounded_value!(Level, LEVEL_BOUNDS, "Item level, 1 to 1000 inclusive.");
impl_bounded_value!(Price, PRICE_BOUNDS, "Item price, 1000 to 9999999 inclusive.");
impl_bounded_value!(
    Points,
    POINTS_BOUNDS,
    "Attack or defense points, 0 up to `i32::MAX` inclusive."
);
