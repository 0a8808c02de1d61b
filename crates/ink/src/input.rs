//! Input modalities.
//!
//! Every modality (mouse, touch) translates its own events into the same
//! three pointer calls on a [`PointerSink`], so the capture logic exists
//! once no matter where the input comes from.

use glam::Vec2;
use scrawl_ipc::{MouseEvent, TouchEvent, TouchPoint};
use serde::{Deserialize, Serialize};

/// What downstream work an input or control operation calls for
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InkAction {
    /// Nothing to do
    None,
    /// Send the active strokes for recognition
    Recognize,
    /// The drawing is empty: clear the displayed result
    ClearResult,
}

/// Pointer capability set, in canvas coordinates
pub trait PointerSink {
    fn on_pointer_down(&mut self, point: Vec2) -> InkAction;
    fn on_pointer_move(&mut self, point: Vec2) -> InkAction;
    fn on_pointer_up(&mut self) -> InkAction;
    /// The pointer was lost mid-stroke; nothing is committed
    fn on_pointer_cancel(&mut self) -> InkAction;
}

/// Page position of the canvas' top-left corner
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasOrigin {
    pub left: f32,
    pub top: f32,
}

impl CanvasOrigin {
    pub fn new(left: f32, top: f32) -> Self {
        Self { left, top }
    }

    /// Convert page coordinates to canvas coordinates
    pub fn to_canvas(&self, page_x: f32, page_y: f32) -> Vec2 {
        Vec2::new(page_x - self.left, page_y - self.top)
    }
}

/// An input source that can drive a [`PointerSink`]
pub trait InputModality {
    type Event;

    fn dispatch(&mut self, event: &Self::Event, sink: &mut dyn PointerSink) -> InkAction;
}

/// Mouse adapter
///
/// Any button starts a stroke. A release ends it wherever it happens.
#[derive(Debug, Clone, Copy, Default)]
pub struct MouseInput {
    origin: CanvasOrigin,
}

impl MouseInput {
    pub fn new(origin: CanvasOrigin) -> Self {
        Self { origin }
    }
}

impl InputModality for MouseInput {
    type Event = MouseEvent;

    fn dispatch(&mut self, event: &MouseEvent, sink: &mut dyn PointerSink) -> InkAction {
        match *event {
            MouseEvent::ButtonDown { x, y, .. } => sink.on_pointer_down(self.origin.to_canvas(x, y)),
            MouseEvent::Move { x, y } => sink.on_pointer_move(self.origin.to_canvas(x, y)),
            MouseEvent::ButtonUp { .. } => sink.on_pointer_up(),
        }
    }
}

/// Touch adapter
///
/// Only the first reported contact draws. Events without contacts are
/// ignored, except `End`, which always closes the stroke, and `Cancel`,
/// which always drops it.
#[derive(Debug, Clone, Copy, Default)]
pub struct TouchInput {
    origin: CanvasOrigin,
}

impl TouchInput {
    pub fn new(origin: CanvasOrigin) -> Self {
        Self { origin }
    }

    fn primary(&self, touches: &[TouchPoint]) -> Option<Vec2> {
        touches
            .first()
            .map(|touch| self.origin.to_canvas(touch.page_x, touch.page_y))
    }
}

impl InputModality for TouchInput {
    type Event = TouchEvent;

    fn dispatch(&mut self, event: &TouchEvent, sink: &mut dyn PointerSink) -> InkAction {
        match event {
            TouchEvent::Start { touches } => match self.primary(touches) {
                Some(point) => sink.on_pointer_down(point),
                None => InkAction::None,
            },
            TouchEvent::Move { touches } => match self.primary(touches) {
                Some(point) => sink.on_pointer_move(point),
                None => InkAction::None,
            },
            TouchEvent::End => sink.on_pointer_up(),
            TouchEvent::Cancel => sink.on_pointer_cancel(),
        }
    }
}
