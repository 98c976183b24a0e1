// Item system
//
// - Item kinds and their data
// - Factories for single items and bulk stacks
// - Inventory and hotbar carried by actors

pub mod inventory;

pub use inventory::{Hotbar, Inventory};

use glam::Vec3;
use std::collections::HashMap;
use std::fmt;

use crate::core::WorldId;

/// Every kind of item the arena knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    Rifle,
    Pistol,
    Shotgun,
    Sword,
    Ammo,
    AmmoPack,
    HealthPack,
    Armor,
}

impl ItemKind {
    /// Display name of a freshly made item
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Rifle => "Rifle",
            Self::Pistol => "Pistol",
            Self::Shotgun => "Shotgun",
            Self::Sword => "Sword",
            Self::Ammo => "Ammo",
            Self::AmmoPack => "Ammo Pack",
            Self::HealthPack => "Health Pack",
            Self::Armor => "Armor",
        }
    }

    /// Largest quantity one stack may hold
    pub fn stack_limit(&self) -> u32 {
        match self {
            Self::Ammo => 250,
            Self::AmmoPack => 50,
            Self::HealthPack => 5,
            Self::Rifle | Self::Pistol | Self::Shotgun | Self::Sword | Self::Armor => 1,
        }
    }

    /// Whether the item fires ammo when equipped
    pub fn uses_ammo(&self) -> bool {
        matches!(self, Self::Rifle | Self::Pistol | Self::Shotgun)
    }

    pub fn is_stackable(&self) -> bool {
        self.stack_limit() > 1
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Data describing an item, independent of where it is
#[derive(Debug, Clone, PartialEq)]
pub struct ItemData {
    pub name: String,
    pub kind: ItemKind,
    pub quantity: u32,
    /// Free-form attributes, e.g. `shop_name` and `price` for shop stock
    pub extra: HashMap<String, String>,
}

impl ItemData {
    pub fn new(kind: ItemKind, quantity: u32) -> Self {
        Self {
            name: kind.display_name().to_string(),
            kind,
            quantity,
            extra: HashMap::new(),
        }
    }

    /// Add an extra attribute, builder style
    pub fn with_extra(mut self, key: &str, value: impl Into<String>) -> Self {
        self.extra.insert(key.to_string(), value.into());
        self
    }

    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extra.get(key).map(String::as_str)
    }
}

impl fmt::Display for ItemData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.name, self.quantity)?;
        if let Some(price) = self.extra("price") {
            write!(f, " ({price} credits)")?;
        }
        Ok(())
    }
}

/// An item instance, either carried or lying in the world
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub data: ItemData,
    /// World id and node name once the item is placed in a level
    pub placement: Option<(WorldId, String)>,
    pub position: Vec3,
}

impl Item {
    /// Build a single item of `kind`
    pub fn factory(kind: ItemKind) -> Self {
        Self::from_data(ItemData::new(kind, 1))
    }

    /// Build `quantity` units of `kind`, split into stacks
    pub fn bulk_factory(kind: ItemKind, quantity: u32) -> Vec<Self> {
        let limit = kind.stack_limit();
        let mut stacks = Vec::new();
        let mut remaining = quantity;

        while remaining > 0 {
            let amount = remaining.min(limit);
            stacks.push(Self::from_data(ItemData::new(kind, amount)));
            remaining -= amount;
        }

        stacks
    }

    pub fn from_data(data: ItemData) -> Self {
        Self {
            data,
            placement: None,
            position: Vec3::ZERO,
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.data.kind
    }

    pub fn name(&self) -> &str {
        &self.data.name
    }

    pub fn quantity(&self) -> u32 {
        self.data.quantity
    }
}
