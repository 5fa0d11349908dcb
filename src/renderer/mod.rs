//! Presentation adapter contract
//!
//! The core never draws pixels itself. It hands entities and text to a
//! `Presenter` in a fixed order per phase; how they end up on screen is the
//! presenter's business.

pub mod headless;

pub use headless::{DrawCall, RecordingPresenter};

use glam::IVec2;
use serde::{Deserialize, Serialize};

use crate::error::PresentError;
use crate::sim::{Ball, Brick, BrickColor, GameOverReason, GamePhase, GameSession, Paddle, Rect};

/// Stable identifier for every visual an asset provider must supply
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VisualId {
    Paddle,
    Ball,
    Brick { color: BrickColor, cracked: bool },
}

impl VisualId {
    /// Every visual variant the game can request
    pub fn catalog() -> Vec<VisualId> {
        let mut ids = vec![VisualId::Paddle, VisualId::Ball];
        for color in BrickColor::ALL {
            ids.push(VisualId::Brick {
                color,
                cracked: false,
            });
            ids.push(VisualId::Brick {
                color,
                cracked: true,
            });
        }
        ids
    }

    /// Asset-style name, e.g. `brick_red_cracked`
    pub fn name(&self) -> String {
        match self {
            VisualId::Paddle => "paddle".to_string(),
            VisualId::Ball => "ball".to_string(),
            VisualId::Brick { color, cracked } => {
                if *cracked {
                    format!("brick_{}_cracked", color.as_str())
                } else {
                    format!("brick_{}", color.as_str())
                }
            }
        }
    }
}

/// Anything the presenter can be asked to draw
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Paddle(&'a Paddle),
    Ball(&'a Ball),
    Brick(&'a Brick),
}

impl Entity<'_> {
    pub fn bounds(&self) -> Rect {
        match self {
            Entity::Paddle(p) => p.bounds(),
            Entity::Ball(b) => b.bounds(),
            Entity::Brick(b) => b.bounds(),
        }
    }

    pub fn visual(&self) -> VisualId {
        match self {
            Entity::Paddle(_) => VisualId::Paddle,
            Entity::Ball(_) => VisualId::Ball,
            Entity::Brick(b) => VisualId::Brick {
                color: b.color,
                cracked: b.is_cracked(),
            },
        }
    }
}

/// Font size classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextSize {
    Title,
    Body,
    Hud,
}

/// Drawing surface implemented outside the core
pub trait Presenter {
    /// Begin a frame
    fn clear(&mut self) -> Result<(), PresentError>;

    fn draw_entity(&mut self, entity: Entity<'_>, visual: VisualId) -> Result<(), PresentError>;

    /// Draw `text` centered on `position`
    fn draw_text(&mut self, text: &str, size: TextSize, position: IVec2)
    -> Result<(), PresentError>;

    /// Flush the completed frame
    fn present(&mut self) -> Result<(), PresentError>;
}

/// Compose one frame for the session's current phase
pub fn render_frame<P: Presenter + ?Sized>(
    session: &GameSession,
    presenter: &mut P,
) -> Result<(), PresentError> {
    let center = session.arena.center();
    presenter.clear()?;

    match session.phase {
        GamePhase::Start => {
            presenter.draw_text("Breakout", TextSize::Title, center - IVec2::new(0, 60))?;
            presenter.draw_text(
                "Press any key to start",
                TextSize::Body,
                center + IVec2::new(0, 20),
            )?;
            if session.best_score > 0 {
                let best = format!("Best: {}", session.best_score);
                presenter.draw_text(&best, TextSize::Hud, center + IVec2::new(0, 70))?;
            }
        }
        GamePhase::Playing => {
            let paddle = Entity::Paddle(&session.paddle);
            presenter.draw_entity(paddle, paddle.visual())?;
            let ball = Entity::Ball(&session.ball);
            presenter.draw_entity(ball, ball.visual())?;
            for brick in &session.wall {
                let brick = Entity::Brick(brick);
                presenter.draw_entity(brick, brick.visual())?;
            }
            let score = format!("Score: {}", session.score);
            presenter.draw_text(&score, TextSize::Hud, IVec2::new(70, 20))?;
        }
        GamePhase::GameOver => {
            let headline = match session.game_over_reason {
                Some(GameOverReason::WallCleared) => "Wall Cleared!",
                _ => "Game Over",
            };
            presenter.draw_text(headline, TextSize::Title, center - IVec2::new(0, 60))?;
            let score = format!("Final Score: {}", session.score);
            presenter.draw_text(&score, TextSize::Body, center + IVec2::new(0, 10))?;
            presenter.draw_text(
                "Press any key to continue",
                TextSize::Body,
                center + IVec2::new(0, 60),
            )?;
        }
    }

    presenter.present()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::activate;

    fn texts(frame: &[DrawCall]) -> Vec<&str> {
        frame
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_catalog_covers_every_variant() {
        let catalog = VisualId::catalog();
        assert_eq!(catalog.len(), 2 + 7 * 2);
        let names: std::collections::HashSet<String> =
            catalog.iter().map(|v| v.name()).collect();
        assert_eq!(names.len(), catalog.len());
        assert!(names.contains("brick_purple_cracked"));
    }

    #[test]
    fn test_start_screen_frame() {
        let session = GameSession::new(Settings::default(), 1).expect("valid settings");
        let mut presenter = RecordingPresenter::new();
        render_frame(&session, &mut presenter).expect("frame renders");

        let frame = presenter.last_frame();
        assert_eq!(frame.first(), Some(&DrawCall::Clear));
        assert_eq!(texts(frame), vec!["Breakout", "Press any key to start"]);
        assert_eq!(presenter.frames_presented(), 1);
    }

    #[test]
    fn test_playing_frame_draws_entities_in_order() {
        let mut session = GameSession::new(Settings::default(), 1).expect("valid settings");
        activate(&mut session);
        let mut presenter = RecordingPresenter::new();
        render_frame(&session, &mut presenter).expect("frame renders");

        let visuals: Vec<VisualId> = presenter
            .last_frame()
            .iter()
            .filter_map(|call| match call {
                DrawCall::Entity { visual, .. } => Some(*visual),
                _ => None,
            })
            .collect();
        assert_eq!(visuals.len(), 2 + 63);
        assert_eq!(visuals[0], VisualId::Paddle);
        assert_eq!(visuals[1], VisualId::Ball);
        assert_eq!(
            visuals[2],
            VisualId::Brick {
                color: BrickColor::Red,
                cracked: false
            }
        );
        assert_eq!(texts(presenter.last_frame()), vec!["Score: 0"]);
    }

    #[test]
    fn test_cracked_brick_uses_cracked_visual() {
        let mut session = GameSession::new(Settings::default(), 1).expect("valid settings");
        activate(&mut session);
        session.wall.hit_all(&[0]).expect("brick 0 exists");

        let brick = session.wall.get(0).expect("brick 0 survives one hit");
        assert_eq!(
            Entity::Brick(brick).visual(),
            VisualId::Brick {
                color: BrickColor::Red,
                cracked: true
            }
        );
    }

    #[test]
    fn test_game_over_frame_shows_score() {
        let mut session = GameSession::new(Settings::default(), 1).expect("valid settings");
        session.phase = GamePhase::GameOver;
        session.score = 140;
        let mut presenter = RecordingPresenter::new();
        render_frame(&session, &mut presenter).expect("frame renders");
        assert_eq!(
            texts(presenter.last_frame()),
            vec!["Game Over", "Final Score: 140", "Press any key to continue"]
        );
    }
}
