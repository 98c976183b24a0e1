// Text labels and buttons handed to the host widget tree

use glam::Vec2;

use super::Rect;

/// Static text
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub rect: Rect,
    pub visible: bool,
}

impl Label {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rect: Rect::default(),
            visible: true,
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

/// Clickable text carrying the action it triggers
#[derive(Debug, Clone, PartialEq)]
pub struct Button<A> {
    pub text: String,
    pub rect: Rect,
    pub visible: bool,
    pub action: A,
}

impl<A> Button<A> {
    pub fn new(text: impl Into<String>, action: A) -> Self {
        Self {
            text: text.into(),
            rect: Rect::default(),
            visible: true,
            action,
        }
    }

    /// Check whether a click at `point` lands on this button
    pub fn hit(&self, point: Vec2) -> bool {
        self.visible && self.rect.contains(point)
    }
}
