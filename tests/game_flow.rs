//! End-to-end runs through the frame driver

use brick_breaker::app::{Game, RunLimits};
use brick_breaker::platform::{Autopilot, FramePacer, ScriptedFrame, ScriptedInput};
use brick_breaker::renderer::{DrawCall, RecordingPresenter};
use brick_breaker::sim::{GameOverReason, GamePhase, GameSession};
use brick_breaker::{AppError, Settings, SimError};
use glam::IVec2;

fn session(seed: u64) -> GameSession {
    GameSession::new(Settings::default(), seed).expect("default settings are valid")
}

fn autopilot_game(seed: u64, limits: RunLimits) -> Game<Autopilot, RecordingPresenter> {
    Game::new(
        session(seed),
        Autopilot::new(2),
        RecordingPresenter::new(),
        FramePacer::unpaced(),
    )
    .with_limits(limits)
}

#[test]
fn autopilot_plays_a_complete_game() {
    let limits = RunLimits {
        max_frames: Some(200_000),
        max_games: Some(1),
    };
    let mut game = Game::new(
        session(2024),
        Autopilot::default(),
        RecordingPresenter::new(),
        FramePacer::unpaced(),
    )
    .with_limits(limits);
    let summary = game.run().expect("run succeeds");

    assert_eq!(summary.games_played, 1);
    assert_eq!(game.session.phase, GamePhase::GameOver);
    assert_eq!(game.session.game_over_reason, Some(GameOverReason::WallCleared));
    assert!(game.session.wall.is_empty());
    // 9 columns x (10 + 20 + ... + 70)
    assert_eq!(summary.last_score, 2520);
    assert_eq!(summary.best_score, 2520);
}

#[test]
fn same_seed_same_run() {
    let limits = RunLimits {
        max_frames: Some(5_000),
        max_games: None,
    };
    let mut a = autopilot_game(77, limits);
    let mut b = autopilot_game(77, limits);
    let summary_a = a.run().expect("run succeeds");
    let summary_b = b.run().expect("run succeeds");

    assert_eq!(summary_a, summary_b);
    assert_eq!(a.session.ball, b.session.ball);
    assert_eq!(a.session.wall, b.session.wall);
    assert_eq!(a.presenter().last_frame(), b.presenter().last_frame());
}

#[test]
fn game_over_then_restart_cycle() {
    // Start, then let the ball fall: the paddle is parked at the far left
    let mut frames = vec![ScriptedFrame::activate()];
    frames.extend(std::iter::repeat_n(ScriptedFrame::hold(true, false), 60));
    let mut game = Game::new(
        session(5),
        ScriptedInput::new(frames),
        RecordingPresenter::new(),
        FramePacer::unpaced(),
    );

    game.frame().expect("frame");
    assert_eq!(game.session.phase, GamePhase::Playing);

    // Send the ball straight down past the right side of the paddle
    game.session.ball.pos = IVec2::new(700, 560);
    game.session.ball.vel = IVec2::new(4, 4);
    game.session.score = 30;
    while game.session.phase == GamePhase::Playing {
        game.frame().expect("frame");
    }
    assert_eq!(game.session.game_over_reason, Some(GameOverReason::BallLost));
    assert_eq!(game.session.best_score, 30);

    let texts: Vec<String> = game
        .presenter()
        .last_frame()
        .iter()
        .filter_map(|call| match call {
            DrawCall::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect();
    assert_eq!(texts[0], "Game Over");
    assert_eq!(texts[1], "Final Score: 30");

    // GameOver -> Start keeps score and wall untouched
    let wall = game.session.wall.clone();
    brick_breaker::sim::activate(&mut game.session);
    assert_eq!(game.session.phase, GamePhase::Start);
    assert_eq!(game.session.score, 30);
    assert_eq!(game.session.wall, wall);

    // Start -> Playing resets the run but keeps the best score
    brick_breaker::sim::activate(&mut game.session);
    assert_eq!(game.session.phase, GamePhase::Playing);
    assert_eq!(game.session.score, 0);
    assert_eq!(game.session.wall.len(), 63);
    assert_eq!(game.session.best_score, 30);
}

#[test]
fn ticking_outside_playing_is_rejected() {
    let mut s = session(1);
    let err = brick_breaker::sim::tick(&mut s, &Default::default()).unwrap_err();
    assert!(matches!(err, SimError::NotPlaying { phase: GamePhase::Start }));
    let app_err: AppError = err.into();
    assert!(app_err.to_string().contains("not playing"));
}
