// Career progression: encounter results and shop stock

use crate::game::items::{ItemData, ItemKind};

/// How an encounter ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncounterOutcome {
    Completed,
    Failed,
}

/// Progression across encounters
#[derive(Debug, Default)]
pub struct Career {
    outcomes: Vec<EncounterOutcome>,
}

impl Career {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn complete_encounter(&mut self) {
        log::info!("Encounter complete");
        self.outcomes.push(EncounterOutcome::Completed);
    }

    pub fn fail_encounter(&mut self) {
        log::info!("Encounter failed");
        self.outcomes.push(EncounterOutcome::Failed);
    }

    /// Outcome of the most recent encounter
    pub fn last_outcome(&self) -> Option<EncounterOutcome> {
        self.outcomes.last().copied()
    }

    pub fn outcomes(&self) -> &[EncounterOutcome] {
        &self.outcomes
    }

    /// Stock offered between encounters
    pub fn shop_items() -> Vec<ItemData> {
        [
            (ItemKind::Rifle, 1, "rifle", 150),
            (ItemKind::Pistol, 1, "pistol", 60),
            (ItemKind::Shotgun, 1, "shotgun", 120),
            (ItemKind::Sword, 1, "sword", 80),
            (ItemKind::Ammo, 100, "ammo", 20),
            (ItemKind::AmmoPack, 10, "ammo_pack", 35),
            (ItemKind::HealthPack, 1, "health_pack", 40),
            (ItemKind::Armor, 1, "armor", 100),
        ]
        .into_iter()
        .map(|(kind, quantity, shop_name, price)| {
            ItemData::new(kind, quantity)
                .with_extra("shop_name", shop_name)
                .with_extra("price", price.to_string())
        })
        .collect()
    }
}
