//! Interactive shop inventory manager.
//!
//! The [`Shop`] menu controller drives a line-oriented [`Console`] and owns
//! the [`Inventory`](itemshop_inventory::Inventory) for the whole session.

pub mod console;
pub mod error;
pub mod menu;
pub mod shop;

pub use console::Console;
pub use error::{ShopError, ShopResult};
pub use menu::{CategoryChoice, MainChoice, MenuState};
pub use shop::Shop;
