//! Brick Breaker - A single-player arcade block-breaking game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, collisions, game state machine)
//! - `renderer`: Presentation adapter contract and frame composition
//! - `platform`: Input source contract and frame pacing
//! - `app`: Frame driver tying input, simulation and presentation together
//! - `settings`: Data-driven game configuration

pub mod app;
pub mod error;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use app::Game;
pub use error::{AppError, ConfigError, InputError, PresentError, SimError};
pub use settings::Settings;

/// Game configuration constants (reference defaults for `Settings`)
pub mod consts {
    /// Reference simulation rate
    pub const TICK_RATE_HZ: u32 = 60;

    /// Arena dimensions
    pub const ARENA_WIDTH: i32 = 800;
    pub const ARENA_HEIGHT: i32 = 600;

    /// Paddle defaults - sits near the bottom edge
    pub const PADDLE_WIDTH: i32 = 110;
    pub const PADDLE_HEIGHT: i32 = 22;
    /// Gap between the paddle's bottom edge and the arena's bottom edge
    pub const PADDLE_BOTTOM_MARGIN: i32 = 10;
    /// Horizontal movement per tick while a direction is held
    pub const PADDLE_SPEED: i32 = 7;

    /// Ball defaults
    pub const BALL_RADIUS: i32 = 10;
    /// Magnitude of both velocity components after a reset
    pub const BALL_SPEED: i32 = 4;

    /// Brick defaults
    pub const BRICK_WIDTH: i32 = 80;
    pub const BRICK_HEIGHT: i32 = 25;
    pub const BRICK_GAP: i32 = 5;
    pub const BRICK_HEALTH: u8 = 2;
    /// Top-left corner of the first brick
    pub const WALL_OFFSET_X: i32 = 10;
    pub const WALL_OFFSET_Y: i32 = 50;
    /// Points for a destroyed brick in row 0; row `n` is worth `(n + 1) *` this
    pub const ROW_POINTS: u32 = 10;
}
