//! Wire types for scrawl
//!
//! Defines the message shapes exchanged between the ink core, the
//! recognition client and whatever drives the session (a UI or the
//! script replayer):
//! - [`InkComponent`], [`EquationInput`], [`RecognitionForm`] - request side
//! - [`RecognitionResponse`] - response side
//! - [`MouseEvent`], [`TouchEvent`] - raw input
//! - [`ControlCommand`], [`ControlState`] - undo/redo/clear controls

mod commands;
mod error;
mod input;
mod recognition;

pub use commands::*;
pub use error::IpcError;
pub use input::*;
pub use recognition::*;
