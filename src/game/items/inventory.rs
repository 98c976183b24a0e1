// Actor inventory and hotbar

use super::{Item, ItemKind};

/// Items carried by an actor
#[derive(Debug, Clone, Default)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Take an item, merging it into a matching stack when possible.
    /// Returns the slot the item ended up in.
    pub fn receive_item(&mut self, mut item: Item) -> usize {
        item.placement = None;

        if item.kind().is_stackable() {
            let limit = item.kind().stack_limit();
            if let Some(index) = self.items.iter().position(|held| {
                held.kind() == item.kind()
                    && held.name() == item.name()
                    && held.quantity() + item.quantity() <= limit
            }) {
                self.items[index].data.quantity += item.quantity();
                return index;
            }
        }

        self.items.push(item);
        self.items.len() - 1
    }

    /// Slot of the first item matching kind and name
    pub fn index_of(&self, kind: ItemKind, name: &str) -> Option<usize> {
        self.items
            .iter()
            .position(|item| item.kind() == kind && item.name() == name)
    }

    /// Total units held of `kind`
    pub fn count(&self, kind: ItemKind) -> u32 {
        self.items
            .iter()
            .filter(|item| item.kind() == kind)
            .map(Item::quantity)
            .sum()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Tracks which inventory slot is in hand
#[derive(Debug, Clone, Default)]
pub struct Hotbar {
    equipped: Option<usize>,
}

impl Hotbar {
    pub fn new() -> Self {
        Self { equipped: None }
    }

    pub fn equip(&mut self, index: usize) {
        self.equipped = Some(index);
    }

    pub fn unequip(&mut self) {
        self.equipped = None;
    }

    /// One-line summary of the item in hand
    pub fn info(&self, inventory: &Inventory) -> String {
        let Some(item) = self.equipped.and_then(|index| inventory.get(index)) else {
            return "Unarmed".to_string();
        };

        if item.kind().uses_ammo() {
            format!("{}\nAmmo: {}", item.name(), inventory.count(ItemKind::Ammo))
        } else if item.quantity() > 1 {
            format!("{} x{}", item.name(), item.quantity())
        } else {
            item.name().to_string()
        }
    }
}
