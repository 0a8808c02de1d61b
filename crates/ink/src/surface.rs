//! Rendering collaborator for the ink.
//!
//! The controller draws each new segment as the pointer moves, and
//! redraws the whole drawing after undo/redo via [`replay`].

use glam::Vec2;

use crate::stroke::Stroke;

/// A canvas-like drawing surface
pub trait InkSurface {
    /// Start a path at `from`
    fn begin_segment(&mut self, from: Vec2);

    /// Extend the current path to `to`
    fn line_to(&mut self, to: Vec2);

    /// Render the path built since the last `begin_segment`
    fn finish_path(&mut self) {}

    /// Wipe the surface
    fn reset(&mut self);
}

impl<S: InkSurface + ?Sized> InkSurface for &mut S {
    fn begin_segment(&mut self, from: Vec2) {
        (**self).begin_segment(from);
    }

    fn line_to(&mut self, to: Vec2) {
        (**self).line_to(to);
    }

    fn finish_path(&mut self) {
        (**self).finish_path();
    }

    fn reset(&mut self) {
        (**self).reset();
    }
}

/// Surface that draws nothing, for headless sessions
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSurface;

impl InkSurface for NullSurface {
    fn begin_segment(&mut self, _from: Vec2) {}

    fn line_to(&mut self, _to: Vec2) {}

    fn reset(&mut self) {}
}

/// Draw a single stroke as one path
pub fn paint_stroke<S: InkSurface + ?Sized>(surface: &mut S, stroke: &Stroke) {
    let Some((first, rest)) = stroke.points().split_first() else {
        return;
    };
    surface.begin_segment(*first);
    for point in rest {
        surface.line_to(*point);
    }
    surface.finish_path();
}

/// Reset the surface and redraw every stroke in order
pub fn replay<S: InkSurface + ?Sized>(surface: &mut S, strokes: &[Stroke]) {
    surface.reset();
    for stroke in strokes {
        paint_stroke(surface, stroke);
    }
}
