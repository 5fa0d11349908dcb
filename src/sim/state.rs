//! Game state and core simulation types
//!
//! The `GameSession` aggregate exclusively owns every entity; the tick and
//! activation functions in `tick` are the only things that mutate it.

use glam::IVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, reflect_horizontal, reflect_vertical};
use super::wall::BrickWall;
use crate::error::{ConfigError, SimError};
use crate::settings::Settings;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title screen, waiting for an activation
    Start,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for an activation
    GameOver,
}

/// Why the last run ended (display only, scoring does not distinguish)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverReason {
    /// Ball fell below the arena
    BallLost,
    /// Every brick was destroyed
    WallCleared,
}

/// Fixed play-field bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Arena {
    pub width: i32,
    pub height: i32,
}

impl Arena {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> IVec2 {
        IVec2::new(self.width / 2, self.height / 2)
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}

/// The player's paddle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    /// Top-left corner
    pub pos: IVec2,
    pub width: i32,
    pub height: i32,
    /// Units moved per tick while a direction is held
    pub speed: i32,
}

impl Paddle {
    /// Create a paddle centered horizontally, `bottom_margin` above the floor
    pub fn new(arena: &Arena, width: i32, height: i32, bottom_margin: i32, speed: i32) -> Self {
        let mut paddle = Self {
            pos: IVec2::new(0, arena.height - height - bottom_margin),
            width,
            height,
            speed,
        };
        paddle.recenter(arena);
        paddle
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            &settings.arena(),
            settings.paddle_width,
            settings.paddle_height,
            settings.paddle_bottom_margin,
            settings.paddle_speed,
        )
    }

    /// Put the paddle back in the middle of the arena; the vertical position never changes
    pub fn recenter(&mut self, arena: &Arena) {
        self.pos.x = (arena.width - self.width) / 2;
    }

    pub fn bounds(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Apply held directions for one tick, then clamp into the arena.
    ///
    /// Left is applied before right, so holding both leaves the paddle where it was.
    pub fn move_horizontal(&mut self, left: bool, right: bool, arena_width: i32) {
        if left {
            self.pos.x -= self.speed;
        }
        if right {
            self.pos.x += self.speed;
        }
        self.pos.x = self.pos.x.clamp(0, (arena_width - self.width).max(0));
    }
}

/// Which arena walls the ball bounced off during `advance`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WallBounce {
    pub side: bool,
    pub top: bool,
}

impl WallBounce {
    pub fn any(&self) -> bool {
        self.side || self.top
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    /// Center of the ball
    pub pos: IVec2,
    /// Per-tick displacement
    pub vel: IVec2,
    pub radius: i32,
    /// Magnitude of each velocity component after a reset
    pub speed: i32,
}

impl Ball {
    /// Create a ball at rest in the middle of the arena; call `reset` before play
    pub fn new(arena: &Arena, radius: i32, speed: i32) -> Self {
        Self {
            pos: arena.center(),
            vel: IVec2::ZERO,
            radius,
            speed: speed.abs(),
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.pos, self.radius * 2, self.radius * 2)
    }

    /// Re-center the ball and serve it upward, left or right at random
    pub fn reset<R: Rng + ?Sized>(&mut self, arena: &Arena, rng: &mut R) {
        self.pos = arena.center();
        let vx = if rng.random_bool(0.5) {
            self.speed
        } else {
            -self.speed
        };
        self.vel = IVec2::new(vx, -self.speed);
    }

    /// Move one step and bounce off the side and top walls.
    ///
    /// There is no floor: falling out the bottom is detected by the session.
    pub fn advance(&mut self, arena: &Arena) -> WallBounce {
        self.pos += self.vel;

        let bounds = self.bounds();
        let walls = arena.bounds();
        let mut bounce = WallBounce::default();
        if bounds.left() <= walls.left() || bounds.right() >= walls.right() {
            self.vel = reflect_horizontal(self.vel);
            bounce.side = true;
        }
        if bounds.top() <= walls.top() {
            self.vel = reflect_vertical(self.vel);
            bounce.top = true;
        }
        bounce
    }

    /// True once the ball's top edge has passed the bottom of the arena
    pub fn is_lost(&self, arena: &Arena) -> bool {
        self.bounds().top() > arena.height
    }
}

/// Brick colors, one per row from the top
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BrickColor {
    Red,
    Orange,
    Yellow,
    Green,
    Cyan,
    Blue,
    Purple,
}

impl BrickColor {
    /// Row order, top to bottom
    pub const ALL: [BrickColor; 7] = [
        BrickColor::Red,
        BrickColor::Orange,
        BrickColor::Yellow,
        BrickColor::Green,
        BrickColor::Cyan,
        BrickColor::Blue,
        BrickColor::Purple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BrickColor::Red => "red",
            BrickColor::Orange => "orange",
            BrickColor::Yellow => "yellow",
            BrickColor::Green => "green",
            BrickColor::Cyan => "cyan",
            BrickColor::Blue => "blue",
            BrickColor::Purple => "purple",
        }
    }
}

/// A brick entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub rect: Rect,
    pub color: BrickColor,
    /// Awarded when the brick is destroyed
    pub points: u32,
    pub health: u8,
    pub max_health: u8,
}

impl Brick {
    pub fn new(rect: Rect, color: BrickColor, points: u32, health: u8) -> Self {
        Self {
            rect,
            color,
            points,
            health,
            max_health: health,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.rect
    }

    /// Take one hit. Returns the points awarded: the brick's value if this hit
    /// destroyed it, 0 otherwise.
    pub fn hit(&mut self) -> Result<u32, SimError> {
        if self.is_destroyed() {
            return Err(SimError::BrickDestroyed {
                x: self.rect.x,
                y: self.rect.y,
            });
        }
        self.health -= 1;
        if self.health == 0 {
            Ok(self.points)
        } else {
            Ok(0)
        }
    }

    pub fn is_destroyed(&self) -> bool {
        self.health == 0
    }

    /// Damaged but still standing (presentation hint)
    pub fn is_cracked(&self) -> bool {
        !self.is_destroyed() && self.health < self.max_health
    }
}

/// Notable things that happened during a tick or transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted { bricks: usize },
    WallBounce,
    PaddleBounce,
    BrickCracked { color: BrickColor },
    BrickDestroyed { color: BrickColor, points: u32 },
    GameOver { reason: GameOverReason, score: u32 },
    ReturnedToStart,
}

/// Complete game session (single owner of all entities)
#[derive(Debug, Clone)]
pub struct GameSession {
    pub settings: Settings,
    pub arena: Arena,
    /// Seed the RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: GamePhase,
    pub paddle: Paddle,
    pub ball: Ball,
    pub wall: BrickWall,
    /// Score of the current (or last) run
    pub score: u32,
    /// Highest score reached during this process
    pub best_score: u32,
    /// Ticks simulated in the current run
    pub time_ticks: u64,
    /// Completed runs
    pub games_played: u32,
    pub game_over_reason: Option<GameOverReason>,
    events: Vec<GameEvent>,
}

impl GameSession {
    /// Create a session on the start screen
    pub fn new(settings: Settings, seed: u64) -> Result<Self, ConfigError> {
        settings.validate()?;
        let arena = settings.arena();
        Ok(Self {
            arena,
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Start,
            paddle: Paddle::from_settings(&settings),
            ball: Ball::new(&arena, settings.ball_radius, settings.ball_speed),
            wall: BrickWall::default(),
            score: 0,
            best_score: 0,
            time_ticks: 0,
            games_played: 0,
            game_over_reason: None,
            events: Vec::new(),
            settings,
        })
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Events recorded since the last call
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
