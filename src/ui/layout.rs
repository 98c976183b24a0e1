// Relative grid layout for menus
//
// Menus divide the viewport into a 10x10 grid and place controls in grid
// units. The host widget tree only ever sees absolute pixel rectangles.

use glam::Vec2;

/// Cells per axis of the layout grid
pub const GRID_CELLS: f32 = 10.0;

/// Absolute pixel rectangle of a control
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Top-left corner
    pub position: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self { position, size }
    }

    /// Bottom-right corner
    pub fn max(&self) -> Vec2 {
        self.position + self.size
    }

    /// Check if a point is inside the rectangle
    pub fn contains(&self, point: Vec2) -> bool {
        let max = self.max();
        point.x >= self.position.x
            && point.x <= max.x
            && point.y >= self.position.y
            && point.y <= max.y
    }
}

/// Place a control: `width x height` with its top-left at `(x, y)`
pub fn scale_control(width: f32, height: f32, x: f32, y: f32) -> Rect {
    Rect::new(Vec2::new(x, y), Vec2::new(width, height))
}

/// Grid units for one viewport size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridUnits {
    pub width: f32,
    pub height: f32,
    /// Width unit, a tenth of the viewport width
    pub wu: f32,
    /// Height unit, a tenth of the viewport height
    pub hu: f32,
}

impl GridUnits {
    pub fn new(size: Vec2) -> Self {
        Self {
            width: size.x,
            height: size.y,
            wu: size.x / GRID_CELLS,
            hu: size.y / GRID_CELLS,
        }
    }
}

/// Display area the menus lay themselves out in
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    size: Vec2,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
        }
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn grid(&self) -> GridUnits {
        GridUnits::new(self.size)
    }

    /// Update the size, returns true if it changed
    pub fn set_size(&mut self, width: f32, height: f32) -> bool {
        let size = Vec2::new(width, height);
        if size == self.size {
            return false;
        }
        log::debug!("Viewport resized to {}x{}", width, height);
        self.size = size;
        true
    }
}
