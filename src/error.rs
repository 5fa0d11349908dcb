//! Error types
//!
//! The simulation itself only fails on caller-ordering bugs; everything else
//! comes from collaborators (config files, presenters, input sources).

use std::path::PathBuf;

use thiserror::Error;

use crate::sim::GamePhase;

/// Precondition violations inside the simulation core
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// A tick was requested outside the `Playing` phase
    #[error("tick requested while not playing (phase: {phase:?})")]
    NotPlaying { phase: GamePhase },

    /// `hit()` on a brick whose health is already depleted
    #[error("brick at ({x}, {y}) was already destroyed")]
    BrickDestroyed { x: i32, y: i32 },

    /// The same brick was listed twice for one batch of hits
    #[error("brick index {index} listed more than once")]
    DuplicateBrickIndex { index: usize },

    /// A collision referenced a brick that is not in the wall
    #[error("brick index {index} out of range (wall holds {len})")]
    BrickIndexOutOfRange { index: usize, len: usize },
}

/// Configuration loading and validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for `Settings`
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A setting is out of range
    #[error("invalid setting `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Presentation adapter failure
#[derive(Debug, Error)]
#[error("presentation failed: {message}")]
pub struct PresentError {
    pub message: String,
}

impl PresentError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Input source failure
#[derive(Debug, Error)]
#[error("input source failed: {message}")]
pub struct InputError {
    pub message: String,
}

impl InputError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Anything that can stop the frame driver
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Sim(#[from] SimError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Present(#[from] PresentError),

    #[error(transparent)]
    Input(#[from] InputError),
}
