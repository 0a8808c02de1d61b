//! Recorded input scripts
//!
//! A script is a JSON list of events, optionally wrapped with the page
//! position of the canvas:
//!
//! ```json
//! {
//!   "origin": {"left": 8, "top": 8},
//!   "events": [
//!     {"event": "mouse_down", "x": 10, "y": 10},
//!     {"event": "mouse_move", "x": 40, "y": 12},
//!     {"event": "mouse_up"},
//!     {"event": "set_result_type", "result_type": "MATHML"},
//!     {"event": "undo"}
//!   ]
//! }
//! ```

use std::path::Path;

use ink::CanvasOrigin;
use scrawl_ipc::{ControlCommand, MouseButton, MouseEvent, ResultType, TouchEvent, TouchPoint};
use serde::{Deserialize, Serialize};

use crate::session::SessionInput;

#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Failed to read script: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse script: {0}")]
    Parse(#[from] serde_json::Error),
}

/// One recorded event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    MouseDown { x: f32, y: f32 },
    MouseMove { x: f32, y: f32 },
    MouseUp,
    TouchStart { touches: Vec<[f32; 2]> },
    TouchMove { touches: Vec<[f32; 2]> },
    TouchEnd,
    TouchCancel,
    Undo,
    Redo,
    Clear,
    SetResultType { result_type: ResultType },
}

impl ScriptEvent {
    /// Convert to the input a session consumes
    pub fn to_input(&self) -> SessionInput {
        let touches = |points: &[[f32; 2]]| -> Vec<TouchPoint> {
            points.iter().map(|&[x, y]| TouchPoint::new(x, y)).collect()
        };

        match self {
            Self::MouseDown { x, y } => SessionInput::Mouse(MouseEvent::ButtonDown {
                button: MouseButton::Left,
                x: *x,
                y: *y,
            }),
            Self::MouseMove { x, y } => SessionInput::Mouse(MouseEvent::Move { x: *x, y: *y }),
            // Release position does not matter to the ink
            Self::MouseUp => SessionInput::Mouse(MouseEvent::ButtonUp {
                button: MouseButton::Left,
                x: 0.0,
                y: 0.0,
            }),
            Self::TouchStart { touches: points } => SessionInput::Touch(TouchEvent::Start {
                touches: touches(points),
            }),
            Self::TouchMove { touches: points } => SessionInput::Touch(TouchEvent::Move {
                touches: touches(points),
            }),
            Self::TouchEnd => SessionInput::Touch(TouchEvent::End),
            Self::TouchCancel => SessionInput::Touch(TouchEvent::Cancel),
            Self::Undo => SessionInput::Control(ControlCommand::Undo),
            Self::Redo => SessionInput::Control(ControlCommand::Redo),
            Self::Clear => SessionInput::Control(ControlCommand::Clear),
            Self::SetResultType { result_type } => {
                SessionInput::Control(ControlCommand::SetResultType(*result_type))
            }
        }
    }
}

/// A loaded script
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub origin: CanvasOrigin,
    pub events: Vec<ScriptEvent>,
}

/// Accepted top-level shapes
#[derive(Deserialize)]
#[serde(untagged)]
enum ScriptDocument {
    Events(Vec<ScriptEvent>),
    Full(Script),
}

impl Script {
    pub fn from_json_str(source: &str) -> Result<Self, ScriptError> {
        let script = match serde_json::from_str(source)? {
            ScriptDocument::Events(events) => Script {
                origin: CanvasOrigin::default(),
                events,
            },
            ScriptDocument::Full(script) => script,
        };
        Ok(script)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ScriptError> {
        let source = std::fs::read_to_string(path)?;
        Self::from_json_str(&source)
    }
}
