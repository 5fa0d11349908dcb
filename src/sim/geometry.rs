//! Axis-aligned collision detection and reflection
//!
//! Every entity is approximated by its bounding rectangle; the ball's circle
//! is tested through its bounding box.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle in arena coordinates (y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle of the given size centered on `center`
    pub fn centered(center: IVec2, width: i32, height: i32) -> Self {
        Self::new(center.x - width / 2, center.y - height / 2, width, height)
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.x + self.width / 2, self.y + self.height / 2)
    }
}

/// True iff the rectangles overlap, touching edges included
#[inline]
pub fn intersects(a: &Rect, b: &Rect) -> bool {
    a.left() <= b.right()
        && b.left() <= a.right()
        && a.top() <= b.bottom()
        && b.top() <= a.bottom()
}

/// Negate the horizontal velocity component
#[inline]
pub fn reflect_horizontal(velocity: IVec2) -> IVec2 {
    IVec2::new(-velocity.x, velocity.y)
}

/// Negate the vertical velocity component
#[inline]
pub fn reflect_vertical(velocity: IVec2) -> IVec2 {
    IVec2::new(velocity.x, -velocity.y)
}
