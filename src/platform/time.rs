//! Frame pacing
//!
//! The driver runs exactly one tick per frame, so a late frame is never
//! caught up with extra ticks: the schedule simply restarts from now.

use std::time::{Duration, Instant};

/// Sleeps between frames to hold the target rate
#[derive(Debug, Clone)]
pub struct FramePacer {
    frame: Duration,
    next_deadline: Option<Instant>,
    late_frames: u64,
}

impl FramePacer {
    pub fn new(frame: Duration) -> Self {
        Self {
            frame,
            next_deadline: None,
            late_frames: 0,
        }
    }

    /// Pacer that never sleeps (headless/fast runs)
    pub fn unpaced() -> Self {
        Self::new(Duration::ZERO)
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Frames that started after their deadline
    pub fn late_frames(&self) -> u64 {
        self.late_frames
    }

    /// Block until the next frame is due
    pub fn wait(&mut self) {
        if self.frame.is_zero() {
            return;
        }

        let now = Instant::now();
        let deadline = match self.next_deadline {
            Some(deadline) => deadline,
            None => {
                self.next_deadline = Some(now + self.frame);
                return;
            }
        };

        if deadline > now {
            std::thread::sleep(deadline - now);
            self.next_deadline = Some(deadline + self.frame);
        } else {
            let behind = now - deadline;
            if behind > self.frame {
                log::warn!("Frame pacing fell behind by {:?}", behind);
            }
            self.late_frames += 1;
            self.next_deadline = Some(now + self.frame);
        }
    }
}
