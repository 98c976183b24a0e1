// Heads-up display
//
// Polls the session on a ~30 Hz tick and rewrites its labels: player stats,
// the item in hand, and the mode's objective. Also hosts the hand-of-cards
// strip and its draw timer.

use glam::Vec2;

use super::{scale_control, GridUnits, Label, Menu};
use crate::engine::game_loop::FixedTick;
use crate::game::actors::Actor;

/// Card slots in the hand strip
pub const HAND_SIZE: usize = 5;

/// How far a hidden hand peeks above the bottom edge, in height units
const HIDDEN_HAND_PEEK: f32 = 0.3;

/// What the HUD reads each refresh
pub trait HudSource {
    /// The tracked player, `None` if absent
    fn player(&self) -> Option<&Actor>;

    fn objective_text(&self) -> String;
}

#[derive(Debug)]
pub struct HudMenu {
    tick: FixedTick,
    viewport: Vec2,
    hand_active: bool,
    pub health_box: Label,
    pub item_box: Label,
    pub objective_box: Label,
    pub interaction_box: Label,
    pub draw_time_box: Label,
    pub card_boxes: [Label; HAND_SIZE],
}

impl Default for HudMenu {
    fn default() -> Self {
        Self::new()
    }
}

impl HudMenu {
    pub fn new() -> Self {
        Self {
            tick: FixedTick::default(),
            viewport: Vec2::ZERO,
            hand_active: true,
            health_box: Label::new("health"),
            item_box: Label::new("item"),
            objective_box: Label::new("Objective Info"),
            interaction_box: Label::new(""),
            draw_time_box: Label::new("DrawPile(0)"),
            card_boxes: std::array::from_fn(|_| Label::new("")),
        }
    }

    /// Per-frame entry point; refreshes when the tick fires
    pub fn process(&mut self, delta: f32, source: &dyn HudSource) -> bool {
        if !self.tick.advance(delta) {
            return false;
        }
        self.refresh(source);
        true
    }

    /// Rewrite every text label from `source`
    pub fn refresh(&mut self, source: &dyn HudSource) {
        let Some(player) = source.player() else {
            log::warn!("Player 1 doesn't exist.");
            return;
        };

        self.health_box.set_text(status_text(player));
        self.item_box.set_text(player.hotbar_info());
        self.objective_box.set_text(source.objective_text());
    }

    /// Raise or lower the hand strip
    pub fn toggle_hand_of_cards(&mut self, active: bool) {
        self.hand_active = active;
        self.place_cards(GridUnits::new(self.viewport));
    }

    pub fn hand_active(&self) -> bool {
        self.hand_active
    }

    /// Show up to five cards; extra cards are ignored
    pub fn update_hand_of_cards<S: AsRef<str>>(&mut self, cards: &[S]) {
        self.clear_hand_of_cards();
        for (slot, card) in self.card_boxes.iter_mut().zip(cards) {
            slot.set_text(card.as_ref());
        }
    }

    pub fn update_draw_time(&mut self, count: u32) {
        self.draw_time_box.set_text(format!("Next Card in ({count})"));
    }

    pub fn clear_hand_of_cards(&mut self) {
        for slot in &mut self.card_boxes {
            slot.set_text("");
        }
    }

    fn place_cards(&mut self, grid: GridUnits) {
        let GridUnits { height, wu, hu, .. } = grid;
        let y = if self.hand_active {
            height - hu
        } else {
            height - HIDDEN_HAND_PEEK * hu
        };

        for (i, card) in self.card_boxes.iter_mut().enumerate() {
            card.rect = scale_control(wu, 2.0 * hu, (3 + i) as f32 * wu, y);
        }
    }

    fn scale_controls(&mut self) {
        let grid = GridUnits::new(self.viewport);
        let GridUnits {
            height, wu, hu, ..
        } = grid;

        self.health_box.rect = scale_control(2.0 * wu, hu, wu, height - hu);
        self.objective_box.rect = scale_control(4.0 * wu, hu, 3.0 * wu, 0.0);
        self.interaction_box.rect = scale_control(4.0 * wu, hu, 3.0 * wu, 7.0 * hu);
        self.draw_time_box.rect = scale_control(2.0 * wu, hu, 0.0, height - hu);
        self.item_box.rect = scale_control(2.0 * wu, hu, 8.0 * wu, height - hu);
        self.place_cards(grid);
    }
}

impl Menu for HudMenu {
    fn init(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.scale_controls();
    }

    fn resize(&mut self, viewport: Vec2) {
        self.viewport = viewport;
        self.scale_controls();
    }

    fn clear(&mut self) {
        for label in [
            &mut self.health_box,
            &mut self.item_box,
            &mut self.objective_box,
            &mut self.interaction_box,
            &mut self.draw_time_box,
        ] {
            label.set_text("");
            label.visible = false;
        }
        for card in &mut self.card_boxes {
            card.set_text("");
            card.visible = false;
        }
    }
}

fn status_text(player: &Actor) -> String {
    let stat = |key: &str| player.stats.get_stat(key).unwrap_or(0);
    format!(
        "Block: {}\nHealth: {}/{}\nEnergy: {}/{}",
        stat("block"),
        stat("health"),
        stat("healthmax"),
        stat("stamina"),
        stat("staminamax")
    )
}
