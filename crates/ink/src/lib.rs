//! scrawl ink system - stroke capture and undo/redo history
//!
//! This crate provides the core of the handwriting surface:
//! - [`stroke`] - Open [`StrokeBuilder`] and sealed [`Stroke`] records
//! - [`history`] - Active/undone stroke stacks
//! - [`capture`] - The Idle/Drawing state machine driven by pointer input
//! - [`input`] - Mouse and touch adapters feeding one [`PointerSink`]
//! - [`surface`] - Rendering collaborator and full replay
//!
//! Nothing here performs I/O. The controller reports what should happen
//! downstream (recognize, clear the result) through [`InkAction`].

pub mod capture;
pub mod history;
pub mod input;
pub mod stroke;
pub mod surface;

pub use capture::*;
pub use history::*;
pub use input::*;
pub use stroke::*;
pub use surface::*;
