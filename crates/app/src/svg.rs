//! SVG rendering surface
//!
//! Records the paths drawn by the capture controller the way a 2D canvas
//! would, and serializes the current picture as an SVG document.

use std::fmt::Write;

use glam::Vec2;
use ink::InkSurface;
use scrawl_config::CanvasConfig;

#[derive(Debug, Default)]
pub struct SvgSurface {
    /// Finished paths, in drawing order
    paths: Vec<Vec<Vec2>>,
    /// Path being built
    current: Vec<Vec2>,
}

impl SvgSurface {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Render the finished paths with the configured pen
    pub fn to_svg(&self, canvas: &CanvasConfig) -> String {
        let mut svg = format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
            w = canvas.width,
            h = canvas.height
        );
        for path in &self.paths {
            let Some((first, rest)) = path.split_first() else {
                continue;
            };
            let mut d = format!("M{} {}", first.x, first.y);
            for point in rest {
                let _ = write!(d, " L{} {}", point.x, point.y);
            }
            let _ = writeln!(
                svg,
                "  <path d=\"{d}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linecap=\"round\" stroke-linejoin=\"round\"/>",
                canvas.color, canvas.line_width
            );
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl InkSurface for SvgSurface {
    fn begin_segment(&mut self, from: Vec2) {
        self.current.clear();
        self.current.push(from);
    }

    fn line_to(&mut self, to: Vec2) {
        self.current.push(to);
    }

    fn finish_path(&mut self) {
        if !self.current.is_empty() {
            self.paths.push(std::mem::take(&mut self.current));
        }
    }

    fn reset(&mut self) {
        self.paths.clear();
        self.current.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ink::{CaptureController, History, PointerSink};

    #[test]
    fn test_svg_contains_paths() {
        let mut surface = SvgSurface::new();
        surface.begin_segment(Vec2::new(0.0, 0.0));
        surface.line_to(Vec2::new(10.0, 5.5));
        surface.finish_path();

        let svg = surface.to_svg(&CanvasConfig::new(100, 50));
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("viewBox=\"0 0 100 50\""));
        assert!(svg.contains("d=\"M0 0 L10 5.5\""));
        assert!(svg.contains("stroke=\"blue\""));
        assert!(svg.contains("stroke-width=\"2\""));
    }

    #[test]
    fn test_undo_redraws_only_active_strokes() {
        let mut ctrl = CaptureController::new(SvgSurface::new(), History::new());
        let _ = ctrl.on_pointer_down(Vec2::new(0.0, 0.0));
        let _ = ctrl.on_pointer_move(Vec2::new(1.0, 1.0));
        let _ = ctrl.on_pointer_move(Vec2::new(2.0, 2.0));
        let _ = ctrl.on_pointer_up();
        let _ = ctrl.on_pointer_down(Vec2::new(5.0, 5.0));
        let _ = ctrl.on_pointer_move(Vec2::new(6.0, 6.0));
        let _ = ctrl.on_pointer_up();
        // One path per incremental segment
        assert_eq!(ctrl.surface().path_count(), 3);

        let _ = ctrl.undo();
        // Replay draws each remaining stroke as a single path
        assert_eq!(ctrl.surface().path_count(), 1);
        let svg = ctrl.surface().to_svg(&CanvasConfig::default());
        assert!(svg.contains("d=\"M0 0 L1 1 L2 2\""));
        assert!(!svg.contains("M5 5"));

        let _ = ctrl.clear();
        assert_eq!(ctrl.surface().path_count(), 0);
    }
}
