//! Undo, redo and clear for the capture controller

use tracing::debug;

use crate::input::InkAction;
use crate::surface::{replay, InkSurface};

use super::{CaptureController, CaptureState};

impl<S: InkSurface> CaptureController<S> {
    /// Undo the last stroke
    ///
    /// Redraws the remaining strokes. Returns `Recognize` while strokes
    /// remain, `ClearResult` once the drawing is empty, and `None` if there
    /// was nothing to undo.
    pub fn undo(&mut self) -> InkAction {
        if !self.history.undo() {
            return InkAction::None;
        }

        replay(&mut self.surface, self.history.active());
        if self.history.is_empty() {
            debug!("Undo emptied the drawing");
            InkAction::ClearResult
        } else {
            InkAction::Recognize
        }
    }

    /// Redo the most recently undone stroke
    pub fn redo(&mut self) -> InkAction {
        if !self.history.redo() {
            return InkAction::None;
        }

        replay(&mut self.surface, self.history.active());
        InkAction::Recognize
    }

    /// Drop every stroke, including one still being drawn, and wipe the surface
    pub fn clear(&mut self) -> InkAction {
        if matches!(self.state, CaptureState::Drawing(_)) {
            debug!("Clear discarded the open stroke");
        }
        self.state = CaptureState::Idle;
        self.history.clear();
        self.surface.reset();
        InkAction::ClearResult
    }
}
