//! Control commands issued by the UI buttons and the result-format selector.

use serde::{Deserialize, Serialize};

use crate::recognition::ResultType;

/// Commands that map 1:1 onto session operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum ControlCommand {
    /// Remove the most recent stroke
    Undo,
    /// Restore the most recently undone stroke
    Redo,
    /// Drop every stroke and the displayed result
    Clear,
    /// Switch the requested output format
    SetResultType(ResultType),
}

/// Enablement of the undo/redo controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ControlState {
    pub can_undo: bool,
    pub can_redo: bool,
}
