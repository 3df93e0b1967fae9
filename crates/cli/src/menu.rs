//! Menu states, selections and operator-facing text.

use core::str::FromStr;

use itemshop_core::{parse_bounded, Bounds, DomainError};
use itemshop_inventory::ItemKind;
use itemshop_inventory::rules::{NAME_MAX_CHARS, NAME_MIN_CHARS};

pub const MAIN_MENU: &str = "Menu:\n1. Add new Item\n2. View all added items\n3. Delete Item\n4. Exit";
pub const MAIN_PROMPT: &str = "Enter your choice (1-4): ";
pub const MAIN_INVALID: &str = "Invalid choice. Please enter a number between 1 and 4.";

pub const CATEGORY_MENU: &str = "Choose category:\n1. Weapon\n2. Armor";
pub const CATEGORY_INVALID: &str = "Invalid choice. Please enter 1 or 2.";

pub const NOT_A_NUMBER_RETRY: &str = "Invalid input. Enter a valid number: ";
pub const DELETED: &str = "Item deleted successfully:";
pub const FAREWELL: &str = "Thank you for using the program!";

/// Where the controller is. `MainMenu` is both the start and the return point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuState {
    MainMenu,
    AddCategoryMenu,
    AddWeaponFlow,
    AddArmorFlow,
    ViewFlow,
    DeleteFlow,
    Exit,
}

impl MenuState {
    pub fn add_flow(kind: ItemKind) -> Self {
        match kind {
            ItemKind::Weapon => MenuState::AddWeaponFlow,
            ItemKind::Armor => MenuState::AddArmorFlow,
        }
    }
}

/// Top-level menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainChoice {
    AddItem,
    ViewItems,
    DeleteItem,
    Exit,
}

impl MainChoice {
    pub fn next_state(self) -> MenuState {
        match self {
            MainChoice::AddItem => MenuState::AddCategoryMenu,
            MainChoice::ViewItems => MenuState::ViewFlow,
            MainChoice::DeleteItem => MenuState::DeleteFlow,
            MainChoice::Exit => MenuState::Exit,
        }
    }
}

impl FromStr for MainChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_bounded(s, Bounds::new(1, 4)) {
            Ok(1) => Ok(MainChoice::AddItem),
            Ok(2) => Ok(MainChoice::ViewItems),
            Ok(3) => Ok(MainChoice::DeleteItem),
            Ok(4) => Ok(MainChoice::Exit),
            _ => Err(DomainError::invalid_selection(s)),
        }
    }
}

/// Add-item category selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryChoice(pub ItemKind);

impl FromStr for CategoryChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_bounded(s, Bounds::new(1, 2)) {
            Ok(1) => Ok(CategoryChoice(ItemKind::Weapon)),
            Ok(2) => Ok(CategoryChoice(ItemKind::Armor)),
            _ => Err(DomainError::invalid_selection(s)),
        }
    }
}

pub fn name_prompt(kind: ItemKind) -> String {
    format!("Enter {kind} name ({NAME_MIN_CHARS}-{NAME_MAX_CHARS} characters): ")
}

pub fn rarity_prompt(kind: ItemKind) -> String {
    format!("Enter {kind} Rarity (Common, Rare, Epic, Legendary): ")
}

pub fn level_prompt(kind: ItemKind, bounds: Bounds) -> String {
    format!("Enter {kind} Level ({}-{}): ", bounds.min, bounds.max)
}

pub fn price_prompt(kind: ItemKind, bounds: Bounds) -> String {
    format!("Enter {kind} Price ({}-{}): ", bounds.min, bounds.max)
}

pub fn points_prompt(kind: ItemKind) -> String {
    format!("Enter {}: ", kind.points_label())
}

pub fn added(kind: ItemKind) -> String {
    format!("{kind} added successfully!")
}

pub fn delete_prompt(len: usize) -> String {
    format!("Choose an item to delete (1-{len}): ")
}

/// Re-prompt text for a rejected value, chosen by error kind.
///
/// `field_prompt` is the original prompt for the field being read.
pub fn retry_prompt(error: &DomainError, field_prompt: &str) -> String {
    match error {
        DomainError::NotANumber(_) => NOT_A_NUMBER_RETRY.to_string(),
        DomainError::OutOfRange { min, max, .. } => {
            format!("Invalid input. Enter a number between {min} and {max}: ")
        }
        DomainError::InvalidRarity(_) => format!("Invalid rarity. {field_prompt}"),
        DomainError::NameLength { .. } => format!("Invalid length. {field_prompt}"),
        DomainError::InvalidSelection(_) | DomainError::PositionOutOfRange { .. } => {
            field_prompt.to_string()
        }
    }
}
