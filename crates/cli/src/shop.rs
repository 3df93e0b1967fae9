//! Menu controller: the interactive add/view/delete loop.

use std::io::{BufRead, Write};

use itemshop_core::{parse_bounded, Bounds, DomainResult};
use itemshop_inventory::{
    Armor, Inventory, Item, ItemAttributes, ItemKind, ItemName, Level, Points, Price, Rarity,
    Weapon,
};

use crate::console::Console;
use crate::error::ShopResult;
use crate::menu::{self, CategoryChoice, MainChoice, MenuState};

/// Owns the inventory for the lifetime of the session.
pub struct Shop<R, W> {
    console: Console<R, W>,
    inventory: Inventory,
}

impl<R: BufRead, W: Write> Shop<R, W> {
    pub fn new(console: Console<R, W>) -> Self {
        Self {
            console,
            inventory: Inventory::new(),
        }
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn into_parts(self) -> (Inventory, W) {
        (self.inventory, self.console.into_output())
    }

    /// Run from the main menu until the operator exits.
    ///
    /// Only terminal failures are returned; bad input is handled in place.
    pub fn run(&mut self) -> ShopResult<()> {
        tracing::info!("session started");
        let mut state = MenuState::MainMenu;
        while let Some(next) = self.step(state)? {
            tracing::trace!(from = ?state, to = ?next, "menu transition");
            state = next;
        }
        tracing::info!(items = self.inventory.len(), "session ended");
        Ok(())
    }

    /// Execute one state and return the next, or `None` once exited.
    pub fn step(&mut self, state: MenuState) -> ShopResult<Option<MenuState>> {
        let next = match state {
            MenuState::MainMenu => self.main_menu()?,
            MenuState::AddCategoryMenu => self.category_menu()?,
            MenuState::AddWeaponFlow => self.add_item(ItemKind::Weapon)?,
            MenuState::AddArmorFlow => self.add_item(ItemKind::Armor)?,
            MenuState::ViewFlow => self.view_items()?,
            MenuState::DeleteFlow => self.delete_item()?,
            MenuState::Exit => {
                self.console.say(menu::FAREWELL)?;
                return Ok(None);
            }
        };
        Ok(Some(next))
    }

    fn main_menu(&mut self) -> ShopResult<MenuState> {
        self.console.say(menu::MAIN_MENU)?;
        self.console.prompt(menu::MAIN_PROMPT)?;
        let token = self.console.next_token()?;
        match token.parse::<MainChoice>() {
            Ok(choice) => Ok(choice.next_state()),
            Err(e) => {
                tracing::debug!(error = %e, "main menu selection rejected");
                self.console.say(menu::MAIN_INVALID)?;
                Ok(MenuState::MainMenu)
            }
        }
    }

    /// A bad selection here abandons the add and goes back to the main menu.
    fn category_menu(&mut self) -> ShopResult<MenuState> {
        self.console.say(menu::CATEGORY_MENU)?;
        let token = self.console.next_token()?;
        match token.parse::<CategoryChoice>() {
            Ok(CategoryChoice(kind)) => Ok(MenuState::add_flow(kind)),
            Err(e) => {
                tracing::debug!(error = %e, "category selection rejected");
                self.console.say(menu::CATEGORY_INVALID)?;
                Ok(MenuState::MainMenu)
            }
        }
    }

    fn add_item(&mut self, kind: ItemKind) -> ShopResult<MenuState> {
        let name = self.read_line_until(&menu::name_prompt(kind), |line| ItemName::new(line))?;
        let rarity = self.read_token_until(&menu::rarity_prompt(kind), |t| t.parse::<Rarity>())?;
        let level = self.read_token_until(&menu::level_prompt(kind, Level::BOUNDS), Level::parse)?;
        let price = self.read_token_until(&menu::price_prompt(kind, Price::BOUNDS), Price::parse)?;
        let points = self.read_token_until(&menu::points_prompt(kind), Points::parse)?;

        let attributes = ItemAttributes::new(name, rarity, level, price);
        let item: Item = match kind {
            ItemKind::Weapon => Weapon::new(attributes, points).into(),
            ItemKind::Armor => Armor::new(attributes, points).into(),
        };
        tracing::info!(kind = %kind, name = %item.name(), "item added");
        self.inventory.append(item);

        self.console.say(&menu::added(kind))?;
        Ok(MenuState::MainMenu)
    }

    fn view_items(&mut self) -> ShopResult<MenuState> {
        self.console.print(&self.inventory.render())?;
        Ok(MenuState::MainMenu)
    }

    fn delete_item(&mut self) -> ShopResult<MenuState> {
        self.console.print(&self.inventory.render())?;
        if self.inventory.is_empty() {
            return Ok(MenuState::MainMenu);
        }

        let len = self.inventory.len();
        let bounds = Bounds::new(1, i32::try_from(len).unwrap_or(i32::MAX));
        let position = self.read_token_until(&menu::delete_prompt(len), |t| {
            parse_bounded(t, bounds)
        })?;

        // Bounded to 1..=len above, so the conversion and removal hold.
        let removed = self.inventory.remove_at(position as usize)?;
        tracing::info!(kind = %removed.kind(), name = %removed.name(), position, "item deleted");

        self.console.say(menu::DELETED)?;
        self.console.print(&removed.describe())?;
        Ok(MenuState::MainMenu)
    }

    /// Prompt, then read whole lines until `validate` accepts one.
    fn read_line_until<T>(
        &mut self,
        prompt: &str,
        validate: impl Fn(String) -> DomainResult<T>,
    ) -> ShopResult<T> {
        self.console.prompt(prompt)?;
        loop {
            let line = self.console.next_line()?;
            match validate(line) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(error = %e, "input rejected");
                    self.console.prompt(&menu::retry_prompt(&e, prompt))?;
                }
            }
        }
    }

    /// Prompt, then read tokens until `parse` accepts one.
    fn read_token_until<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> DomainResult<T>,
    ) -> ShopResult<T> {
        self.console.prompt(prompt)?;
        loop {
            let token = self.console.next_token()?;
            match parse(&token) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    tracing::debug!(error = %e, "input rejected");
                    self.console.prompt(&menu::retry_prompt(&e, prompt))?;
                }
            }
        }
    }
}
