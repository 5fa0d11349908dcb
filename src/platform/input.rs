//! Input source contract

use std::collections::VecDeque;

use crate::error::InputError;
use crate::sim::{GameSession, TickInput};

/// Discrete input occurrences (as opposed to held state)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Any key press / click
    Activate,
    /// Window closed or quit requested
    Quit,
}

/// Where the frame driver gets its input from
pub trait InputSource {
    /// Drain every pending event without blocking
    fn poll_events(&mut self) -> Result<Vec<InputEvent>, InputError>;

    /// Current held-direction snapshot
    fn held(&self) -> TickInput;

    /// Called once per frame after the session was updated
    fn observe(&mut self, _session: &GameSession) {}
}

/// One frame of pre-recorded input
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedFrame {
    pub events: Vec<InputEvent>,
    pub held: TickInput,
}

impl ScriptedFrame {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn activate() -> Self {
        Self {
            events: vec![InputEvent::Activate],
            held: TickInput::default(),
        }
    }

    pub fn hold(left: bool, right: bool) -> Self {
        Self {
            events: Vec::new(),
            held: TickInput { left, right },
        }
    }
}

/// Replays a fixed input script, then requests quit
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<ScriptedFrame>,
    held: TickInput,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = ScriptedFrame>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            held: TickInput::default(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>, InputError> {
        match self.frames.pop_front() {
            Some(frame) => {
                self.held = frame.held;
                Ok(frame.events)
            }
            None => {
                self.held = TickInput::default();
                Ok(vec![InputEvent::Quit])
            }
        }
    }

    fn held(&self) -> TickInput {
        self.held
    }
}
