//! Frame driver
//!
//! One iteration per frame: drain input, tick once if playing, draw once.
//! Quit requests are honoured after the current iteration finishes.

use std::ops::ControlFlow;

use crate::error::AppError;
use crate::platform::{FramePacer, InputEvent, InputSource};
use crate::renderer::{Presenter, render_frame};
use crate::sim::{GameEvent, GamePhase, GameSession, activate, tick};

/// Optional stopping points for unattended runs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunLimits {
    pub max_frames: Option<u64>,
    pub max_games: Option<u32>,
}

/// What a finished run looked like
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    pub games_played: u32,
    pub best_score: u32,
    pub last_score: u32,
    pub seed: u64,
}

/// Game instance holding all state plus its collaborators
pub struct Game<I, P> {
    pub session: GameSession,
    input: I,
    presenter: P,
    pacer: FramePacer,
    limits: RunLimits,
    frames: u64,
}

impl<I: InputSource, P: Presenter> Game<I, P> {
    pub fn new(session: GameSession, input: I, presenter: P, pacer: FramePacer) -> Self {
        Self {
            session,
            input,
            presenter,
            pacer,
            limits: RunLimits::default(),
            frames: 0,
        }
    }

    pub fn with_limits(mut self, limits: RunLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn input(&self) -> &I {
        &self.input
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run frames until quit or a limit is reached
    pub fn run(&mut self) -> Result<RunSummary, AppError> {
        log::info!(
            "Starting frame loop at {:?} per frame (seed {})",
            self.pacer.frame_duration(),
            self.session.seed
        );
        while self.frame()?.is_continue() {
            self.pacer.wait();
        }

        let summary = self.summary();
        log::info!(
            "Frame loop finished: {} frames, {} games, best score {}",
            summary.frames,
            summary.games_played,
            summary.best_score
        );
        Ok(summary)
    }

    /// Run a single frame
    pub fn frame(&mut self) -> Result<ControlFlow<()>, AppError> {
        let mut quit = false;
        for event in self.input.poll_events()? {
            match event {
                InputEvent::Activate => activate(&mut self.session),
                InputEvent::Quit => {
                    log::info!("Quit requested");
                    quit = true;
                }
            }
        }

        if self.session.phase == GamePhase::Playing {
            let held = self.input.held();
            tick(&mut self.session, &held)?;
        }

        for event in self.session.take_events() {
            log_event(&event);
        }

        render_frame(&self.session, &mut self.presenter)?;
        self.input.observe(&self.session);
        self.frames += 1;
        log::trace!("Frame {} done ({:?})", self.frames, self.session.phase);

        if quit || self.limit_reached() {
            Ok(ControlFlow::Break(()))
        } else {
            Ok(ControlFlow::Continue(()))
        }
    }

    fn limit_reached(&self) -> bool {
        let frames_done = self.limits.max_frames.is_some_and(|max| self.frames >= max);
        let games_done = self
            .limits
            .max_games
            .is_some_and(|max| self.session.games_played >= max);
        frames_done || games_done
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            frames: self.frames,
            games_played: self.session.games_played,
            best_score: self.session.best_score,
            last_score: self.session.score,
            seed: self.session.seed,
        }
    }
}

fn log_event(event: &GameEvent) {
    match event {
        GameEvent::WallBounce | GameEvent::PaddleBounce => log::trace!("{:?}", event),
        GameEvent::BrickCracked { color } => log::trace!("{} brick cracked", color.as_str()),
        _ => log::debug!("{:?}", event),
    }
}
