//! Idle/demo mode - the computer plays the game
//!
//! Tracks the ball with the paddle and presses "any key" on the start and
//! game-over screens after a short pause.

use crate::error::InputError;
use crate::sim::{GamePhase, GameSession, TickInput};

use super::input::{InputEvent, InputSource};

/// Frames to linger on the start/game-over screens
pub const DEFAULT_SCREEN_DELAY: u32 = 90;

/// Self-playing input source
#[derive(Debug, Clone)]
pub struct Autopilot {
    held: TickInput,
    activate_pending: bool,
    screen_delay: u32,
    frames_on_screen: u32,
    frame: u64,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self::new(DEFAULT_SCREEN_DELAY)
    }
}

impl Autopilot {
    pub fn new(screen_delay: u32) -> Self {
        Self {
            held: TickInput::default(),
            activate_pending: false,
            screen_delay,
            frames_on_screen: 0,
            frame: 0,
        }
    }

    /// Where along the paddle to aim: sways across the middle half so the
    /// ball doesn't settle into one loop
    fn aim_offset(&self, paddle_width: i32) -> i32 {
        let t = self.frame as f32 * 0.01;
        let sway = t.sin() * 0.7 + (t * 0.37).sin() * 0.3;
        (sway * paddle_width as f32 * 0.25) as i32
    }
}

impl InputSource for Autopilot {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>, InputError> {
        if std::mem::take(&mut self.activate_pending) {
            Ok(vec![InputEvent::Activate])
        } else {
            Ok(Vec::new())
        }
    }

    fn held(&self) -> TickInput {
        self.held
    }

    fn observe(&mut self, session: &GameSession) {
        self.frame += 1;

        if session.phase != GamePhase::Playing {
            self.held = TickInput::default();
            self.frames_on_screen += 1;
            if self.frames_on_screen >= self.screen_delay {
                self.frames_on_screen = 0;
                self.activate_pending = true;
            }
            return;
        }
        self.frames_on_screen = 0;

        let paddle = session.paddle.bounds();
        let target = session.ball.pos.x + self.aim_offset(paddle.width);
        let center = paddle.center().x;
        let deadzone = session.paddle.speed;

        self.held = TickInput {
            left: target < center - deadzone,
            right: target > center + deadzone,
        };
    }
}
