use serde::{Deserialize, Serialize};

use crate::rules::{ItemName, Level, Points, Price, Rarity};

/// Line closing every item description.
pub const SEPARATOR: &str = "--------------------";

/// Attributes shared by every item kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemAttributes {
    pub name: ItemName,
    pub rarity: Rarity,
    pub level: Level,
    pub price: Price,
}

impl ItemAttributes {
    pub fn new(name: ItemName, rarity: Rarity, level: Level, price: Price) -> Self {
        Self {
            name,
            rarity,
            level,
            price,
        }
    }
}

/// Item kind discriminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    Weapon,
    Armor,
}

impl ItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Weapon => "Weapon",
            ItemKind::Armor => "Armor",
        }
    }

    /// Label of the kind-specific point value.
    pub fn points_label(&self) -> &'static str {
        match self {
            ItemKind::Weapon => "Attack Point",
            ItemKind::Armor => "Defense Point",
        }
    }
}

impl core::fmt::Display for ItemKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weapon {
    attributes: ItemAttributes,
    attack_point: Points,
}

impl Weapon {
    pub fn new(attributes: ItemAttributes, attack_point: Points) -> Self {
        Self {
            attributes,
            attack_point,
        }
    }

    pub fn attack_point(&self) -> Points {
        self.attack_point
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Armor {
    attributes: ItemAttributes,
    defense_point: Points,
}

impl Armor {
    pub fn new(attributes: ItemAttributes, defense_point: Points) -> Self {
        Self {
            attributes,
            defense_point,
        }
    }

    pub fn defense_point(&self) -> Points {
        self.defense_point
    }
}

/// A shop item. The set of kinds is closed.
///
/// Items are immutable once built; every field was validated when its value
/// object was constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Item {
    Weapon(Weapon),
    Armor(Armor),
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Weapon(_) => ItemKind::Weapon,
            Item::Armor(_) => ItemKind::Armor,
        }
    }

    pub fn attributes(&self) -> &ItemAttributes {
        match self {
            Item::Weapon(w) => &w.attributes,
            Item::Armor(a) => &a.attributes,
        }
    }

    pub fn name(&self) -> &ItemName {
        &self.attributes().name
    }

    pub fn rarity(&self) -> Rarity {
        self.attributes().rarity
    }

    pub fn level(&self) -> Level {
        self.attributes().level
    }

    pub fn price(&self) -> Price {
        self.attributes().price
    }

    /// The kind-specific value: attack for weapons, defense for armor.
    pub fn points(&self) -> Points {
        match self {
            Item::Weapon(w) => w.attack_point,
            Item::Armor(a) => a.defense_point,
        }
    }

    /// Deterministic multi-line rendering, each line newline-terminated.
    pub fn describe(&self) -> String {
        let kind = self.kind();
        let attrs = self.attributes();
        format!(
            "{kind}: {name}\nRarity: {rarity}\nLevel: {level}\nPrice: {price}\n{label}: {points}\n{SEPARATOR}\n",
            name = attrs.name,
            rarity = attrs.rarity,
            level = attrs.level,
            price = attrs.price,
            label = kind.points_label(),
            points = self.points(),
        )
    }
}

impl From<Weapon> for Item {
    fn from(value: Weapon) -> Self {
        Item::Weapon(value)
    }
}

impl From<Armor> for Item {
    fn from(value: Armor) -> Self {
        Item::Armor(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn attributes(name: &str, rarity: Rarity, level: i32, price: i32) -> ItemAttributes {
        ItemAttributes::new(
            ItemName::new(name).unwrap(),
            rarity,
            Level::new(level).unwrap(),
            Price::new(price).unwrap(),
        )
    }

    #[test]
    fn weapon_describe_lists_attack_point() {
        let item: Item = Weapon::new(
            attributes("IronSword", Rarity::Common, 10, 1000),
            Points::new(50).unwrap(),
        )
        .into();

        assert_eq!(
            item.describe(),
            "Weapon: IronSword\n\
             Rarity: Common\n\
             Level: 10\n\
             Price: 1000\n\
             Attack Point: 50\n\
             --------------------\n"
        );
    }

    #[test]
    fn armor_describe_lists_defense_point() {
        let item: Item = Armor::new(
            attributes("SteelPlate", Rarity::Epic, 500, 500000),
            Points::new(200).unwrap(),
        )
        .into();

        assert_eq!(
            item.describe(),
            "Armor: SteelPlate\n\
             Rarity: Epic\n\
             Level: 500\n\
             Price: 500000\n\
             Defense Point: 200\n\
             --------------------\n"
        );
    }

    #[test]
    fn accessors_expose_kind_and_points() {
        let weapon = Weapon::new(
            attributes("Long Bow", Rarity::Rare, 3, 2500),
            Points::new(7).unwrap(),
        );
        assert_eq!(weapon.attack_point().get(), 7);

        let item = Item::from(weapon);
        assert_eq!(item.kind(), ItemKind::Weapon);
        assert_eq!(item.name().as_str(), "Long Bow");
        assert_eq!(item.rarity(), Rarity::Rare);
        assert_eq!(item.level().get(), 3);
        assert_eq!(item.price().get(), 2500);
        assert_eq!(item.points().get(), 7);

        let armor = Armor::new(
            attributes("Buckler", Rarity::Legendary, 1000, 9_999_999),
            Points::new(0).unwrap(),
        );
        assert_eq!(armor.defense_point().get(), 0);
        assert_eq!(Item::from(armor).kind(), ItemKind::Armor);
    }

    #[test]
    fn describe_is_deterministic() {
        let item: Item = Armor::new(
            attributes("Tower Shield", Rarity::Rare, 42, 4200),
            Points::new(99).unwrap(),
        )
        .into();
        assert_eq!(item.describe(), item.clone().describe());
    }

    #[test]
    fn items_serialize_with_kind_tag() {
        let item: Item = Weapon::new(
            attributes("IronSword", Rarity::Common, 10, 1000),
            Points::new(50).unwrap(),
        )
        .into();

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "kind": "Weapon",
                "attributes": {
                    "name": "IronSword",
                    "rarity": "Common",
                    "level": 10,
                    "price": 1000
                },
                "attack_point": 50
            })
        );

        let back: Item = serde_json::from_value(value).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn deserializing_an_out_of_bounds_item_fails() {
        let value = serde_json::json!({
            "kind": "Armor",
            "attributes": {
                "name": "SteelPlate",
                "rarity": "Epic",
                "level": 0,
                "price": 500000
            },
            "defense_point": 200
        });
        assert!(serde_json::from_value::<Item>(value).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: every item built from accepted raw values stays within bounds.
        #[test]
        fn constructed_items_respect_field_bounds(
            name in "[A-Za-z][A-Za-z ]{2,30}",
            rarity in prop::sample::select(Rarity::ALL.to_vec()),
            level in any::<i32>(),
            price in any::<i32>(),
            points in any::<i32>(),
            weapon in any::<bool>(),
        ) {
            let built = (|| {
                let attrs = ItemAttributes::new(
                    ItemName::new(name.clone()).ok()?,
                    rarity,
                    Level::new(level).ok()?,
                    Price::new(price).ok()?,
                );
                let points = Points::new(points).ok()?;
                Some(if weapon {
                    Item::from(Weapon::new(attrs, points))
                } else {
                    Item::from(Armor::new(attrs, points))
                })
            })();

            if let Some(item) = built {
                let chars = item.name().as_str().chars().count();
                prop_assert!((4..=25).contains(&chars));
                prop_assert!(Rarity::ALL.contains(&item.rarity()));
                prop_assert!((1..=1000).contains(&item.level().get()));
                prop_assert!((1000..=9_999_999).contains(&item.price().get()));
                prop_assert!(item.points().get() >= 0);
            }
        }
    }
}
