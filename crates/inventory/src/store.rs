//! Ordered in-memory item store.

use itemshop_core::{DomainError, DomainResult};

use crate::item::Item;

/// Notice rendered in place of a listing when the store holds nothing.
pub const NO_ITEMS: &str = "No items in the list.";

/// Insertion order is display order and deletion-position order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add an item at the end.
    pub fn append(&mut self, item: Item) {
        tracing::debug!(
            kind = %item.kind(),
            name = %item.name(),
            position = self.items.len() + 1,
            "item appended"
        );
        self.items.push(item);
    }

    /// The full ordered sequence.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    /// Remove the item at a 1-based `position`, keeping the others in order.
    ///
    /// Callers are expected to have bounded `position` to `1..=len`; anything
    /// else is rejected and leaves the store untouched.
    pub fn remove_at(&mut self, position: usize) -> DomainResult<Item> {
        let len = self.items.len();
        if position == 0 || position > len {
            return Err(DomainError::PositionOutOfRange { position, len });
        }
        let item = self.items.remove(position - 1);
        tracing::debug!(
            kind = %item.kind(),
            name = %item.name(),
            position,
            "item removed"
        );
        Ok(item)
    }

    /// Render every item description in order, or the no-items notice.
    pub fn render(&self) -> String {
        if self.items.is_empty() {
            return format!("{NO_ITEMS}\n");
        }
        self.items.iter().map(Item::describe).collect()
    }
}
