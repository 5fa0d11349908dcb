//! Fixed timestep simulation tick and phase transitions
//!
//! `activate` is driven once per activation event, `tick` once per frame
//! while playing.

use super::geometry::{intersects, reflect_vertical};
use super::state::{GameEvent, GameOverReason, GamePhase, GameSession};
use super::wall::{BrickLayout, build_wall};
use crate::error::SimError;

/// Held-direction snapshot for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
}

/// Handle one activation event (key press, click)
pub fn activate(session: &mut GameSession) {
    match session.phase {
        GamePhase::Start => start_run(session),
        // Activations are ignored mid-game
        GamePhase::Playing => {}
        // Pure phase change; the reset happens on the next activation
        GamePhase::GameOver => {
            session.phase = GamePhase::Start;
            session.push_event(GameEvent::ReturnedToStart);
            log::info!("Back to start screen");
        }
    }
}

/// Reset everything for a fresh run and enter `Playing`
fn start_run(session: &mut GameSession) {
    session.score = 0;
    session.time_ticks = 0;
    session.game_over_reason = None;
    session.paddle.recenter(&session.arena);
    session.ball.reset(&session.arena, &mut session.rng);
    session.wall = build_wall(
        session.arena.width,
        &BrickLayout::from_settings(&session.settings),
    );
    session.phase = GamePhase::Playing;

    let bricks = session.wall.len();
    session.push_event(GameEvent::GameStarted { bricks });
    log::info!(
        "Run {} started: {} bricks, ball velocity ({}, {})",
        session.games_played + 1,
        bricks,
        session.ball.vel.x,
        session.ball.vel.y
    );
}

/// Advance the game by one fixed step.
///
/// Order matters: paddle input, ball motion, paddle contact, brick contacts,
/// then the terminal checks. At most one vertical bounce is applied per tick,
/// however many things the ball touched.
pub fn tick(session: &mut GameSession, input: &TickInput) -> Result<(), SimError> {
    if session.phase != GamePhase::Playing {
        return Err(SimError::NotPlaying {
            phase: session.phase,
        });
    }
    session.time_ticks += 1;

    let arena = session.arena;
    session
        .paddle
        .move_horizontal(input.left, input.right, arena.width);

    if session.ball.advance(&arena).any() {
        session.push_event(GameEvent::WallBounce);
    }

    let mut bounced = false;
    if intersects(&session.ball.bounds(), &session.paddle.bounds()) {
        session.ball.vel = reflect_vertical(session.ball.vel);
        bounced = true;
        session.push_event(GameEvent::PaddleBounce);
    }

    let touching = session.wall.overlapping(&session.ball.bounds());
    if !touching.is_empty() {
        if !bounced {
            session.ball.vel = reflect_vertical(session.ball.vel);
        }
        for hit in session.wall.hit_all(&touching)? {
            session.score += hit.points;
            if hit.destroyed {
                log::debug!("{} brick destroyed (+{})", hit.color.as_str(), hit.points);
                session.push_event(GameEvent::BrickDestroyed {
                    color: hit.color,
                    points: hit.points,
                });
            } else {
                session.push_event(GameEvent::BrickCracked { color: hit.color });
            }
        }
    }

    if session.ball.is_lost(&arena) {
        end_run(session, GameOverReason::BallLost);
    } else if session.wall.is_empty() {
        end_run(session, GameOverReason::WallCleared);
    }

    Ok(())
}

fn end_run(session: &mut GameSession, reason: GameOverReason) {
    session.phase = GamePhase::GameOver;
    session.game_over_reason = Some(reason);
    session.games_played += 1;
    session.best_score = session.best_score.max(session.score);
    session.push_event(GameEvent::GameOver {
        reason,
        score: session.score,
    });
    log::info!(
        "Game over ({:?}) after {} ticks: score {}, best {}",
        reason,
        session.time_ticks,
        session.score,
        session.best_score
    );
}
