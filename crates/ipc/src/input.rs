//! Input event types for mouse and touch.
//!
//! Coordinates are page coordinates. The ink crate subtracts the canvas
//! origin before feeding them to the capture controller.

use serde::{Deserialize, Serialize};

/// Mouse input events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum MouseEvent {
    Move { x: f32, y: f32 },
    ButtonDown { button: MouseButton, x: f32, y: f32 },
    ButtonUp { button: MouseButton, x: f32, y: f32 },
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

/// A single contact point of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TouchPoint {
    pub page_x: f32,
    pub page_y: f32,
}

impl TouchPoint {
    pub fn new(page_x: f32, page_y: f32) -> Self {
        Self { page_x, page_y }
    }
}

/// Touch input events.
///
/// `touches` lists the contacts currently on the surface, in the order the
/// platform reports them. Only the first one drives the ink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TouchEvent {
    Start { touches: Vec<TouchPoint> },
    Move { touches: Vec<TouchPoint> },
    End,
    /// The platform took the contact away (`touchcancel`)
    Cancel,
}
