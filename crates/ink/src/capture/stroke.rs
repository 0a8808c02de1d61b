//! Pointer handling for the capture controller

use glam::Vec2;
use tracing::{debug, info};

use crate::input::{InkAction, PointerSink};
use crate::stroke::StrokeBuilder;
use crate::surface::{replay, InkSurface};

use super::{CaptureController, CaptureState};

impl<S: InkSurface> CaptureController<S> {
    /// Drop the open stroke without committing it
    ///
    /// The surface is redrawn from the history so the dropped segments
    /// disappear. Idle controllers are left untouched.
    pub fn cancel(&mut self) {
        if let CaptureState::Drawing(builder) = std::mem::take(&mut self.state) {
            debug!("Cancelled stroke {} ({} points)", builder.id(), builder.point_count());
            replay(&mut self.surface, self.history.active());
        }
    }
}

impl<S: InkSurface> PointerSink for CaptureController<S> {
    fn on_pointer_down(&mut self, point: Vec2) -> InkAction {
        if self.is_drawing() {
            // Single interaction at a time: a second start must not replace
            // the open stroke.
            debug!("pointer down at ({:.1}, {:.1}) while drawing, ignoring", point.x, point.y);
            return InkAction::None;
        }

        let id = self.allocate_stroke_id();
        debug!("Begin stroke {} at ({:.1}, {:.1})", id, point.x, point.y);
        self.state = CaptureState::Drawing(StrokeBuilder::new(id, point));
        InkAction::None
    }

    fn on_pointer_move(&mut self, point: Vec2) -> InkAction {
        let CaptureState::Drawing(builder) = &mut self.state else {
            return InkAction::None;
        };

        let previous = builder.push(point);
        self.surface.begin_segment(previous);
        self.surface.line_to(point);
        self.surface.finish_path();
        InkAction::None
    }

    fn on_pointer_up(&mut self) -> InkAction {
        let CaptureState::Drawing(builder) = std::mem::take(&mut self.state) else {
            debug!("pointer up with no open stroke, ignoring");
            return InkAction::None;
        };

        let stroke = builder.finish();
        info!(
            "Committed stroke {} ({} points, {} active)",
            stroke.id(),
            stroke.point_count(),
            self.history.len() + 1
        );
        self.history.commit(stroke);
        InkAction::Recognize
    }

    fn on_pointer_cancel(&mut self) -> InkAction {
        self.cancel();
        InkAction::None
    }
}
