//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (wall order, row by row)
//! - No rendering or platform dependencies

pub mod geometry;
pub mod state;
pub mod tick;
pub mod wall;

pub use geometry::{Rect, intersects, reflect_horizontal, reflect_vertical};
pub use state::{
    Arena, Ball, Brick, BrickColor, GameEvent, GameOverReason, GamePhase, GameSession, Paddle,
    WallBounce,
};
pub use tick::{TickInput, activate, tick};
pub use wall::{BrickHit, BrickLayout, BrickWall, build_wall};
