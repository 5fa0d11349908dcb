//! Headless presenter
//!
//! Records the draw calls of the most recent frame instead of rasterizing
//! them. Used by the headless runner and by tests.

use glam::IVec2;

use super::{Entity, Presenter, TextSize, VisualId};
use crate::error::PresentError;
use crate::sim::Rect;

/// One recorded presenter call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCall {
    Clear,
    Entity {
        visual: VisualId,
        bounds: Rect,
    },
    Text {
        text: String,
        size: TextSize,
        position: IVec2,
    },
}

/// Presenter that keeps the last completed frame in memory
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    pending: Vec<DrawCall>,
    last_frame: Vec<DrawCall>,
    in_frame: bool,
    frames_presented: u64,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw calls of the most recently presented frame
    pub fn last_frame(&self) -> &[DrawCall] {
        &self.last_frame
    }

    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    fn record(&mut self, call: DrawCall) -> Result<(), PresentError> {
        if !self.in_frame {
            return Err(PresentError::new("draw call outside of a frame"));
        }
        self.pending.push(call);
        Ok(())
    }
}

impl Presenter for RecordingPresenter {
    fn clear(&mut self) -> Result<(), PresentError> {
        self.pending.clear();
        self.pending.push(DrawCall::Clear);
        self.in_frame = true;
        Ok(())
    }

    fn draw_entity(&mut self, entity: Entity<'_>, visual: VisualId) -> Result<(), PresentError> {
        self.record(DrawCall::Entity {
            visual,
            bounds: entity.bounds(),
        })
    }

    fn draw_text(
        &mut self,
        text: &str,
        size: TextSize,
        position: IVec2,
    ) -> Result<(), PresentError> {
        self.record(DrawCall::Text {
            text: text.to_string(),
            size,
            position,
        })
    }

    fn present(&mut self) -> Result<(), PresentError> {
        if !self.in_frame {
            return Err(PresentError::new("present without clear"));
        }
        self.in_frame = false;
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames_presented += 1;
        log::trace!(
            "Frame {} presented ({} draw calls)",
            self.frames_presented,
            self.last_frame.len()
        );
        Ok(())
    }
}
