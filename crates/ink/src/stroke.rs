//! Stroke records.
//!
//! A stroke is built point by point while the pointer is down
//! ([`StrokeBuilder`]) and sealed into an immutable [`Stroke`] when it is
//! released. A builder is always seeded with its first point, so a sealed
//! stroke is never empty.

use glam::Vec2;
use scrawl_ipc::InkComponent;

/// Session-unique stroke identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StrokeId(pub u64);

impl std::fmt::Display for StrokeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A finished stroke. Points cannot be changed once sealed.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    id: StrokeId,
    points: Vec<Vec2>,
}

impl Stroke {
    pub fn id(&self) -> StrokeId {
        self.id
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Number of points (always at least one)
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Wire form: `{"type": "stroke", "x": [...], "y": [...]}`
    pub fn to_component(&self) -> InkComponent {
        let (x, y) = self.points.iter().map(|p| (p.x, p.y)).unzip();
        InkComponent::Stroke { x, y }
    }
}

/// A stroke still being drawn.
#[derive(Debug, Clone)]
pub struct StrokeBuilder {
    id: StrokeId,
    points: Vec<Vec2>,
}

impl StrokeBuilder {
    /// Open a stroke at its first point
    pub fn new(id: StrokeId, start: Vec2) -> Self {
        Self {
            id,
            points: vec![start],
        }
    }

    pub fn id(&self) -> StrokeId {
        self.id
    }

    /// Append a point, returning the previous last point
    pub fn push(&mut self, point: Vec2) -> Vec2 {
        let previous = self.last_point();
        self.points.push(point);
        previous
    }

    pub fn last_point(&self) -> Vec2 {
        // Seeded in `new`, never drained.
        self.points[self.points.len() - 1]
    }

    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    /// Seal the stroke
    pub fn finish(self) -> Stroke {
        Stroke {
            id: self.id,
            points: self.points,
        }
    }
}
