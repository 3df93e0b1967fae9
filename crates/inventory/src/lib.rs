//! Shop inventory domain module.
//!
//! This crate contains the item model, its validation rules and the ordered
//! in-memory store, implemented purely as deterministic domain logic (no IO,
//! no terminal).

pub mod item;
pub mod rules;
pub mod store;

pub use item::{Armor, Item, ItemAttributes, ItemKind, Weapon, SEPARATOR};
pub use rules::{ItemName, Level, Points, Price, Rarity};
pub use store::{Inventory, NO_ITEMS};
