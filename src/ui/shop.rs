// Shop menu shown between encounters

use glam::Vec2;
use log::{info, warn};
use std::collections::HashMap;

use super::{scale_control, Button, GridUnits, Menu};
use crate::game::career::Career;
use crate::game::items::ItemData;

/// Item buttons per row
const ROW_LEN: usize = 4;

/// Item buttons that fit on screen
const MAX_ITEM_BUTTONS: usize = 2 * ROW_LEN;

/// What a shop button does
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopAction {
    /// Leave the shop, completing the encounter
    Finish,
    /// Buy the item registered under this shop name
    Purchase(String),
}

pub struct ShopMenu {
    stock: Vec<ItemData>,
    finished_button: Option<Button<ShopAction>>,
    item_buttons: Vec<Button<ShopAction>>,
    items: HashMap<String, ItemData>,
}

impl ShopMenu {
    /// Shop offering `stock`; controls are built on `init`
    pub fn new(stock: Vec<ItemData>) -> Self {
        Self {
            stock,
            finished_button: None,
            item_buttons: Vec::new(),
            items: HashMap::new(),
        }
    }

    /// Shop offering the career catalogue
    pub fn with_career_stock() -> Self {
        Self::new(Career::shop_items())
    }

    fn init_controls(&mut self) {
        self.finished_button = Some(Button::new("Finish shopping", ShopAction::Finish));

        self.item_buttons.clear();
        self.items.clear();

        for item in &self.stock {
            let shop_name = item.extra("shop_name").unwrap_or(&item.name).to_string();
            self.item_buttons.push(Button::new(
                item.name.clone(),
                ShopAction::Purchase(shop_name.clone()),
            ));
            // First registration wins on duplicate shop names
            self.items.entry(shop_name).or_insert_with(|| item.clone());
        }

        if self.item_buttons.len() > MAX_ITEM_BUTTONS {
            warn!(
                "Shop has {} items, only {} fit on screen",
                self.item_buttons.len(),
                MAX_ITEM_BUTTONS
            );
        }
    }

    fn scale_controls(&mut self, viewport: Vec2) {
        let GridUnits {
            width,
            height,
            wu,
            hu,
        } = GridUnits::new(viewport);

        if let Some(finished) = self.finished_button.as_mut() {
            finished.rect = scale_control(2.0 * wu, hu, width - 2.0 * wu, height - hu);
        }

        for (i, button) in self.item_buttons.iter_mut().enumerate() {
            if i >= MAX_ITEM_BUTTONS {
                button.visible = false;
                continue;
            }
            let row = (i / ROW_LEN) as f32;
            let col = (i % ROW_LEN) as f32;
            button.visible = true;
            button.rect = scale_control(2.0 * wu, 2.0 * hu, col * 2.0 * wu, (2.0 + 2.0 * row) * hu);
        }
    }

    /// Look up the item sold under `name`, logging the transaction
    pub fn purchase_item(&self, name: &str) -> Option<&ItemData> {
        let Some(item) = self.items.get(name) else {
            warn!("Shop doesn't contain {}", name);
            return None;
        };

        info!("Purchasing {}", item);
        Some(item)
    }

    /// Carry out a button's action
    pub fn activate(&self, action: &ShopAction, career: &mut Career) {
        match action {
            ShopAction::Finish => career.complete_encounter(),
            ShopAction::Purchase(name) => {
                self.purchase_item(name);
            }
        }
    }

    /// Action of the visible button under `point`, if any
    pub fn click(&self, point: Vec2) -> Option<ShopAction> {
        self.finished_button
            .iter()
            .chain(self.item_buttons.iter())
            .find(|button| button.hit(point))
            .map(|button| button.action.clone())
    }

    pub fn finished_button(&self) -> Option<&Button<ShopAction>> {
        self.finished_button.as_ref()
    }

    pub fn item_buttons(&self) -> &[Button<ShopAction>] {
        &self.item_buttons
    }
}

impl Menu for ShopMenu {
    fn init(&mut self, viewport: Vec2) {
        self.init_controls();
        self.scale_controls(viewport);
    }

    fn resize(&mut self, viewport: Vec2) {
        self.scale_controls(viewport);
    }

    fn clear(&mut self) {
        self.finished_button = None;
        self.item_buttons.clear();
        self.items.clear();
    }
}
