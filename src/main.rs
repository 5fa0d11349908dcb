//! Brick Breaker headless runner
//!
//! Runs the full frame loop with the autopilot at the controls and a
//! recording presenter standing in for a window.

use std::path::PathBuf;

use clap::Parser;
use rand::Rng;

use brick_breaker::app::{Game, RunLimits, RunSummary};
use brick_breaker::platform::{Autopilot, FramePacer};
use brick_breaker::renderer::RecordingPresenter;
use brick_breaker::sim::GameSession;
use brick_breaker::{AppError, Settings};

#[derive(Debug, Parser)]
#[command(name = "brick-breaker", version, about = "Arcade brick breaker (headless autopilot run)")]
struct Args {
    /// JSON settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed (overrides the config file)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Stop after this many frames
    #[arg(short, long)]
    frames: Option<u64>,

    /// Stop after this many completed games (defaults to 1 when no frame limit is given)
    #[arg(short, long)]
    games: Option<u32>,

    /// Run as fast as possible instead of at the tick rate
    #[arg(long)]
    unpaced: bool,
}

fn run(args: Args) -> Result<RunSummary, AppError> {
    let settings = match &args.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let seed = args
        .seed
        .or(settings.seed)
        .unwrap_or_else(|| rand::rng().random());

    let pacer = if args.unpaced {
        FramePacer::unpaced()
    } else {
        FramePacer::new(settings.frame_duration())
    };
    let limits = RunLimits {
        max_frames: args.frames,
        max_games: args.games.or(if args.frames.is_none() { Some(1) } else { None }),
    };

    let session = GameSession::new(settings, seed)?;
    let mut game = Game::new(session, Autopilot::default(), RecordingPresenter::new(), pacer)
        .with_limits(limits);
    game.run()
}

fn main() {
    env_logger::init();
    log::info!("Brick Breaker (headless) starting...");

    let args = Args::parse();
    match run(args) {
        Ok(summary) => {
            println!(
                "seed {}: {} frames, {} games, best score {}, last score {}",
                summary.seed,
                summary.frames,
                summary.games_played,
                summary.best_score,
                summary.last_score
            );
        }
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
