//! Capture controller
//!
//! This module connects:
//! - Pointer input (via [`PointerSink`], fed by the input modalities)
//! - The open stroke being drawn
//! - The undo/redo [`History`]
//! - The rendering surface (incremental segments and full replay)
//!
//! Each operation returns an [`InkAction`](crate::input::InkAction) telling the caller whether the
//! drawing must be sent for recognition or the displayed result cleared.

mod stroke;
mod undo;

use scrawl_ipc::ControlState;

use crate::history::History;
use crate::input::PointerSink;
use crate::stroke::{StrokeBuilder, StrokeId};
use crate::surface::InkSurface;

/// Whether a stroke is open
#[derive(Debug, Clone, Default)]
pub(crate) enum CaptureState {
    #[default]
    Idle,
    Drawing(StrokeBuilder),
}

/// Turns pointer interactions into strokes and owns the stroke history
///
/// 1. `on_pointer_down` opens a stroke seeded with the pointer position
/// 2. `on_pointer_move` appends points and draws the new segment
/// 3. `on_pointer_up` seals the stroke and commits it to the history
/// 4. `undo` / `redo` / `clear` edit the history and redraw the surface
pub struct CaptureController<S: InkSurface> {
    /// Rendering surface
    pub(crate) surface: S,
    /// Committed strokes
    pub(crate) history: History,
    /// Open stroke, if any
    pub(crate) state: CaptureState,
    /// Next stroke ID to hand out
    pub(crate) next_stroke_id: u64,
}

impl<S: InkSurface> CaptureController<S> {
    /// Create a controller drawing on `surface` and recording into `history`
    pub fn new(surface: S, history: History) -> Self {
        Self {
            surface,
            history,
            state: CaptureState::Idle,
            next_stroke_id: 1,
        }
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Undo/redo availability, for enabling controls
    pub fn control_state(&self) -> ControlState {
        self.history.control_state()
    }

    /// Check if a stroke is currently open
    pub fn is_drawing(&self) -> bool {
        matches!(self.state, CaptureState::Drawing(_))
    }

    pub(crate) fn allocate_stroke_id(&mut self) -> StrokeId {
        let id = StrokeId(self.next_stroke_id);
        self.next_stroke_id += 1;
        id
    }

    /// Borrow the controller as a `PointerSink` trait object
    pub fn as_sink(&mut self) -> &mut dyn PointerSink {
        self
    }
}
