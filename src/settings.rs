//! Game settings
//!
//! Every tunable of the simulation, loaded from an optional JSON file.
//! Missing fields fall back to the reference values in `consts`.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Upper bound for either arena dimension; keeps all layout arithmetic in `i32`
pub const MAX_ARENA_SIZE: i32 = 100_000;

/// Game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Arena ===
    pub arena_width: i32,
    pub arena_height: i32,

    // === Paddle ===
    pub paddle_width: i32,
    pub paddle_height: i32,
    pub paddle_bottom_margin: i32,
    /// Units moved per tick while a direction is held
    pub paddle_speed: i32,

    // === Ball ===
    pub ball_radius: i32,
    /// Magnitude of each velocity component on reset
    pub ball_speed: i32,

    // === Bricks ===
    pub brick_width: i32,
    pub brick_height: i32,
    pub brick_gap: i32,
    pub brick_health: u8,
    pub wall_offset_x: i32,
    pub wall_offset_y: i32,

    // === Timing ===
    pub tick_rate_hz: u32,

    /// RNG seed; a fresh one is drawn when absent
    pub seed: Option<u64>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,

            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_bottom_margin: PADDLE_BOTTOM_MARGIN,
            paddle_speed: PADDLE_SPEED,

            ball_radius: BALL_RADIUS,
            ball_speed: BALL_SPEED,

            brick_width: BRICK_WIDTH,
            brick_height: BRICK_HEIGHT,
            brick_gap: BRICK_GAP,
            brick_health: BRICK_HEALTH,
            wall_offset_x: WALL_OFFSET_X,
            wall_offset_y: WALL_OFFSET_Y,

            tick_rate_hz: TICK_RATE_HZ,

            seed: None,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file and validate them
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Settings =
            serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        settings.validate()?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject settings the simulation cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
            ConfigError::Invalid {
                field,
                reason: reason.into(),
            }
        }

        if !(1..=MAX_ARENA_SIZE).contains(&self.arena_width)
            || !(1..=MAX_ARENA_SIZE).contains(&self.arena_height)
        {
            return Err(invalid(
                "arena_width",
                format!("arena dimensions must be in 1..={MAX_ARENA_SIZE}"),
            ));
        }
        let (width, height) = (self.arena_width, self.arena_height);

        if !(1..=width).contains(&self.paddle_width) {
            return Err(invalid("paddle_width", format!("must be in 1..={width}")));
        }
        if !(1..=height).contains(&self.paddle_height) {
            return Err(invalid("paddle_height", format!("must be in 1..={height}")));
        }
        if !(0..=height - self.paddle_height).contains(&self.paddle_bottom_margin) {
            return Err(invalid(
                "paddle_bottom_margin",
                "paddle does not fit in the arena",
            ));
        }
        if !(1..=width).contains(&self.paddle_speed) {
            return Err(invalid("paddle_speed", format!("must be in 1..={width}")));
        }

        let shorter_side = width.min(height);
        if !(1..=shorter_side / 2).contains(&self.ball_radius) {
            return Err(invalid("ball_radius", "ball does not fit in the arena"));
        }
        if !(1..=shorter_side).contains(&self.ball_speed) {
            return Err(invalid(
                "ball_speed",
                format!("must be in 1..={shorter_side}"),
            ));
        }

        if !(1..=width).contains(&self.brick_width) {
            return Err(invalid("brick_width", format!("must be in 1..={width}")));
        }
        if !(1..=height).contains(&self.brick_height) {
            return Err(invalid("brick_height", format!("must be in 1..={height}")));
        }
        if !(0..=width).contains(&self.brick_gap) {
            return Err(invalid("brick_gap", format!("must be in 0..={width}")));
        }
        if !(0..=width).contains(&self.wall_offset_x) {
            return Err(invalid("wall_offset_x", format!("must be in 0..={width}")));
        }
        if !(0..=height).contains(&self.wall_offset_y) {
            return Err(invalid("wall_offset_y", format!("must be in 0..={height}")));
        }
        if self.brick_health == 0 {
            return Err(invalid("brick_health", "must be at least 1"));
        }
        if self.tick_rate_hz == 0 {
            return Err(invalid("tick_rate_hz", "must be at least 1"));
        }
        Ok(())
    }

    /// Arena described by these settings
    pub fn arena(&self) -> crate::sim::Arena {
        crate::sim::Arena::new(self.arena_width, self.arena_height)
    }

    /// Duration of one frame at the configured tick rate
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / f64::from(self.tick_rate_hz))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(settings.arena_width, 800);
        assert_eq!(settings.paddle_speed, 7);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"arena_width": 1000, "seed": 7}"#)
            .expect("partial settings should parse");
        assert_eq!(settings.arena_width, 1000);
        assert_eq!(settings.arena_height, ARENA_HEIGHT);
        assert_eq!(settings.seed, Some(7));
    }

    #[test]
    fn test_validate_rejects_oversized_paddle() {
        let settings = Settings {
            paddle_width: 900,
            ..Default::default()
        };
        let err = settings.validate().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Invalid {
                field: "paddle_width",
                ..
            }
        ));
    }

    #[test]
    fn test_validate_rejects_zero_ball_speed() {
        let settings = Settings {
            ball_speed: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    fn rejected_field(settings: Settings) -> &'static str {
        match settings.validate() {
            Err(ConfigError::Invalid { field, .. }) => field,
            other => panic!("expected an invalid setting, got {other:?}"),
        }
    }

    #[test]
    fn test_validate_rejects_extreme_ball_speed() {
        let settings = Settings {
            ball_speed: i32::MIN,
            ..Default::default()
        };
        assert_eq!(rejected_field(settings), "ball_speed");

        let settings = Settings {
            ball_speed: -4,
            ..Default::default()
        };
        assert_eq!(rejected_field(settings), "ball_speed");

        let settings = Settings {
            ball_speed: 601,
            ..Default::default()
        };
        assert_eq!(rejected_field(settings), "ball_speed");
    }

    #[test]
    fn test_validate_rejects_huge_ball_radius() {
        let settings = Settings {
            ball_radius: i32::MAX,
            ..Default::default()
        };
        assert_eq!(rejected_field(settings), "ball_radius");

        let settings = Settings {
            ball_radius: 301,
            ..Default::default()
        };
        assert_eq!(rejected_field(settings), "ball_radius");
    }

    #[test]
    fn test_validate_rejects_paddle_outside_arena() {
        let settings = Settings {
            paddle_bottom_margin: -1,
            ..Default::default()
        };
        assert_eq!(rejected_field(settings), "paddle_bottom_margin");

        let settings = Settings {
            paddle_bottom_margin: i32::MAX,
            ..Default::default()
        };
        assert_eq!(rejected_field(settings), "paddle_bottom_margin");

        let settings = Settings {
            paddle_height: i32::MAX,
            ..Default::default()
        };
        assert_eq!(rejected_field(settings), "paddle_height");
    }

    #[test]
    fn test_validate_rejects_non_positive_paddle_speed() {
        for paddle_speed in [0, -7, i32::MIN] {
            let settings = Settings {
                paddle_speed,
                ..Default::default()
            };
            assert_eq!(rejected_field(settings), "paddle_speed");
        }
    }

    #[test]
    fn test_validate_rejects_oversized_bricks() {
        let settings = Settings {
            brick_width: i32::MAX,
            ..Default::default()
        };
        assert_eq!(rejected_field(settings), "brick_width");

        let settings = Settings {
            brick_height: 601,
            ..Default::default()
        };
        assert_eq!(rejected_field(settings), "brick_height");

        let settings = Settings {
            brick_gap: i32::MAX,
            ..Default::default()
        };
        assert_eq!(rejected_field(settings), "brick_gap");

        let settings = Settings {
            wall_offset_x: i32::MAX,
            ..Default::default()
        };
        assert_eq!(rejected_field(settings), "wall_offset_x");

        let settings = Settings {
            wall_offset_y: -1,
            ..Default::default()
        };
        assert_eq!(rejected_field(settings), "wall_offset_y");
    }

    #[test]
    fn test_validate_rejects_huge_arena() {
        let settings = Settings {
            arena_width: i32::MAX,
            ..Default::default()
        };
        assert_eq!(rejected_field(settings), "arena_width");
    }

    #[test]
    fn test_boundary_settings_still_build_a_wall() {
        let settings = Settings {
            brick_width: 800,
            brick_gap: 800,
            wall_offset_x: 0,
            ..Default::default()
        };
        assert!(settings.validate().is_ok());
        let wall = crate::sim::build_wall(
            settings.arena_width,
            &crate::sim::BrickLayout::from_settings(&settings),
        );
        assert_eq!(wall.len(), 7);
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_round_trip_from_disk() {
        let path = std::env::temp_dir().join(format!(
            "brick_breaker_settings_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, r#"{"tick_rate_hz": 30, "brick_health": 3}"#)
            .expect("temp file should be writable");
        let settings = Settings::load(&path).expect("settings should load");
        let _ = std::fs::remove_file(&path);

        assert_eq!(settings.tick_rate_hz, 30);
        assert_eq!(settings.brick_health, 3);
        assert_eq!(settings.frame_duration(), std::time::Duration::from_secs_f64(1.0 / 30.0));
    }

    #[test]
    fn test_load_rejects_bad_json() {
        let path = std::env::temp_dir().join(format!(
            "brick_breaker_bad_settings_{}.json",
            std::process::id()
        ));
        std::fs::write(&path, "{ not json").expect("temp file should be writable");
        let err = Settings::load(&path).unwrap_err();
        let _ = std::fs::remove_file(&path);
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
