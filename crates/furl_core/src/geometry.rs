//! Basic geometry types

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in logical points
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Top edge
    pub fn min_y(&self) -> f32 {
        self.y
    }

    /// Bottom edge
    pub fn max_y(&self) -> f32 {
        self.y + self.height
    }

    /// Return a copy moved by the given deltas
    pub fn translate(&self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}
