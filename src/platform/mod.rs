//! Platform abstraction layer
//!
//! Handles the outside world for the frame driver:
//! - Input events and held directions
//! - Frame pacing
//! - A self-playing input source for headless/demo runs

pub mod autopilot;
pub mod input;
pub mod time;

pub use autopilot::Autopilot;
pub use input::{InputEvent, InputSource, ScriptedFrame, ScriptedInput};
pub use time::FramePacer;
