// UI overlays
//
// Menus here own their controls' text and rectangles. Drawing and input
// capture are the host's job; it reads the controls back after each
// `init`/`resize`/refresh.

pub mod hud;
pub mod layout;
pub mod shop;
pub mod widgets;

pub use hud::{HudMenu, HudSource};
pub use layout::{scale_control, GridUnits, Rect, Viewport};
pub use shop::ShopMenu;
pub use widgets::{Button, Label};

use glam::Vec2;

/// Contract every overlay fulfils
pub trait Menu {
    /// Build controls and lay them out for `viewport`
    fn init(&mut self, viewport: Vec2);

    /// Re-lay out controls after the display area changed
    fn resize(&mut self, viewport: Vec2);

    /// Sub-menus stack on top of another menu instead of replacing it
    fn is_sub_menu(&self) -> bool {
        false
    }

    /// Drop every control
    fn clear(&mut self);
}
