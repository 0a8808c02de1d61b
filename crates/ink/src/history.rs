//! Undo/redo history of committed strokes.
//!
//! Two stacks: `active` holds the strokes that make up the drawing
//! (oldest first) and `undone` holds the strokes removed by undo (most
//! recently removed last). A committed stroke lives in exactly one of them.

use scrawl_ipc::{ControlState, InkComponent};
use tracing::debug;

use crate::stroke::Stroke;

#[derive(Debug, Clone, Default)]
pub struct History {
    /// Strokes currently part of the drawing, oldest first
    active: Vec<Stroke>,
    /// Strokes available for redo, most recently undone last
    undone: Vec<Stroke>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a freshly drawn stroke. New input invalidates redo.
    pub fn commit(&mut self, stroke: Stroke) {
        self.active.push(stroke);
        self.undone.clear();
    }

    /// Move the newest active stroke onto the undone stack.
    ///
    /// Returns false if there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(stroke) = self.active.pop() else {
            debug!("Undo: no active strokes");
            return false;
        };
        debug!("Undo stroke {}", stroke.id());
        self.undone.push(stroke);
        true
    }

    /// Move the most recently undone stroke back to the end of the drawing.
    ///
    /// Returns false if there was nothing to redo.
    pub fn redo(&mut self) -> bool {
        let Some(stroke) = self.undone.pop() else {
            debug!("Redo: no undone strokes");
            return false;
        };
        debug!("Redo stroke {}", stroke.id());
        self.active.push(stroke);
        true
    }

    /// Drop every stroke, active and undone
    pub fn clear(&mut self) {
        self.active.clear();
        self.undone.clear();
    }

    pub fn active(&self) -> &[Stroke] {
        &self.active
    }

    pub fn undone(&self) -> &[Stroke] {
        &self.undone
    }

    pub fn can_undo(&self) -> bool {
        !self.active.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.undone.is_empty()
    }

    /// Number of active strokes
    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// True when the drawing has no active strokes
    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn control_state(&self) -> ControlState {
        ControlState {
            can_undo: self.can_undo(),
            can_redo: self.can_redo(),
        }
    }

    /// Wire form of the active strokes, in drawing order
    pub fn to_components(&self) -> Vec<InkComponent> {
        self.active.iter().map(Stroke::to_component).collect()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use glam::Vec2;

    use super::*;
    use crate::stroke::{StrokeBuilder, StrokeId};

    fn stroke(id: u64, points: &[(f32, f32)]) -> Stroke {
        let (first, rest) = points.split_first().expect("test stroke needs a point");
        let mut builder = StrokeBuilder::new(StrokeId(id), Vec2::new(first.0, first.1));
        for &(x, y) in rest {
            builder.push(Vec2::new(x, y));
        }
        builder.finish()
    }

    fn ids(strokes: &[Stroke]) -> Vec<u64> {
        strokes.iter().map(|s| s.id().0).collect()
    }

    #[test]
    fn test_draw_undo_redo_scenario() {
        let mut history = History::new();
        let a = stroke(1, &[(0.0, 0.0), (1.0, 1.0)]);
        let b = stroke(2, &[(5.0, 5.0), (6.0, 7.0)]);

        history.commit(a);
        assert_eq!(ids(history.active()), vec![1]);
        assert!(history.undone().is_empty());

        history.commit(b);
        assert_eq!(ids(history.active()), vec![1, 2]);

        assert!(history.undo());
        assert_eq!(ids(history.active()), vec![1]);
        assert_eq!(ids(history.undone()), vec![2]);

        assert!(history.undo());
        assert!(history.active().is_empty());
        assert_eq!(ids(history.undone()), vec![2, 1]);

        assert!(history.redo());
        assert_eq!(ids(history.active()), vec![1]);
        assert_eq!(ids(history.undone()), vec![2]);
    }

    #[test]
    fn test_undo_on_empty_is_noop() {
        let mut history = History::new();
        assert!(!history.undo());
        assert!(history.is_empty());
        assert!(!history.can_redo());
    }

    #[test]
    fn test_redo_on_empty_is_noop() {
        let mut history = History::new();
        history.commit(stroke(1, &[(0.0, 0.0)]));
        assert!(!history.redo());
        assert_eq!(ids(history.active()), vec![1]);
    }

    #[test]
    fn test_commit_invalidates_redo() {
        let mut history = History::new();
        history.commit(stroke(1, &[(0.0, 0.0)]));
        history.commit(stroke(2, &[(1.0, 0.0)]));
        history.undo();
        history.undo();
        assert_eq!(history.undone().len(), 2);

        history.commit(stroke(3, &[(2.0, 0.0)]));
        assert_eq!(ids(history.active()), vec![3]);
        assert!(history.undone().is_empty());
        assert!(!history.redo());
    }

    #[test]
    fn test_clear_empties_both_stacks() {
        let mut history = History::new();
        history.commit(stroke(1, &[(0.0, 0.0)]));
        history.commit(stroke(2, &[(1.0, 0.0)]));
        history.undo();

        history.clear();
        assert!(history.active().is_empty());
        assert!(history.undone().is_empty());
        assert_eq!(history.control_state(), ControlState::default());
    }

    #[test]
    fn test_control_state_tracks_stacks() {
        let mut history = History::new();
        history.commit(stroke(1, &[(0.0, 0.0)]));
        assert_eq!(
            history.control_state(),
            ControlState {
                can_undo: true,
                can_redo: false
            }
        );
        history.undo();
        assert_eq!(
            history.control_state(),
            ControlState {
                can_undo: false,
                can_redo: true
            }
        );
    }

    #[test]
    fn test_components_follow_active_order() {
        let mut history = History::new();
        history.commit(stroke(1, &[(0.0, 0.0)]));
        history.commit(stroke(2, &[(3.0, 4.0)]));

        let components = history.to_components();
        assert_eq!(components.len(), 2);
        assert_eq!(
            components[1],
            InkComponent::Stroke {
                x: vec![3.0],
                y: vec![4.0]
            }
        );
    }

    #[derive(Debug, Clone, Copy)]
    enum Op {
        Commit,
        Undo,
        Redo,
        Clear,
    }

    /// Every sequence of up to `depth` operations, applied from scratch.
    fn for_each_sequence(depth: usize, mut check: impl FnMut(&[Op])) {
        const OPS: [Op; 4] = [Op::Commit, Op::Undo, Op::Redo, Op::Clear];
        let mut stack: Vec<Vec<Op>> = vec![Vec::new()];
        while let Some(seq) = stack.pop() {
            check(&seq);
            if seq.len() < depth {
                for op in OPS {
                    let mut next = seq.clone();
                    next.push(op);
                    stack.push(next);
                }
            }
        }
    }

    #[test]
    fn test_no_stroke_duplicated_or_lost() {
        for_each_sequence(7, |ops| {
            let mut history = History::new();
            let mut live: HashSet<u64> = HashSet::new();
            let mut next_id = 0;

            for op in ops {
                match op {
                    Op::Commit => {
                        next_id += 1;
                        // A commit discards whatever was waiting for redo.
                        for discarded in ids(history.undone()) {
                            live.remove(&discarded);
                        }
                        history.commit(stroke(next_id, &[(next_id as f32, 0.0)]));
                        live.insert(next_id);
                    }
                    Op::Undo => {
                        history.undo();
                    }
                    Op::Redo => {
                        history.redo();
                    }
                    Op::Clear => {
                        history.clear();
                        live.clear();
                        assert!(history.active().is_empty(), "active left after {ops:?}");
                        assert!(history.undone().is_empty(), "undone left after {ops:?}");
                    }
                }

                let all: Vec<u64> = ids(history.active())
                    .into_iter()
                    .chain(ids(history.undone()))
                    .collect();
                let unique: HashSet<u64> = all.iter().copied().collect();
                assert_eq!(all.len(), unique.len(), "duplicate stroke after {ops:?}");

                assert_eq!(unique, live, "stroke lost after {ops:?}");
            }
        });
    }

    #[test]
    fn test_undo_then_redo_restores_active() {
        for_each_sequence(6, |ops| {
            let mut history = History::new();
            let mut next_id = 0;
            for op in ops {
                match op {
                    Op::Commit => {
                        next_id += 1;
                        history.commit(stroke(next_id, &[(0.0, 0.0)]));
                    }
                    Op::Undo => {
                        history.undo();
                    }
                    Op::Redo => {
                        history.redo();
                    }
                    Op::Clear => history.clear(),
                }
            }

            let before = ids(history.active());
            let undone_before = ids(history.undone());
            if history.undo() {
                assert!(history.redo());
                assert_eq!(ids(history.active()), before, "after {ops:?}");
                assert_eq!(ids(history.undone()), undone_before, "after {ops:?}");
            }
        });
    }

    #[test]
    fn test_commit_and_undo_redo_preserve_every_stroke() {
        // Without intervening commits nothing is ever discarded: the union
        // of both stacks is exactly the set of committed strokes.
        let mut history = History::new();
        for id in 1..=4 {
            history.commit(stroke(id, &[(0.0, 0.0)]));
        }
        for op in [Op::Undo, Op::Undo, Op::Redo, Op::Undo, Op::Undo, Op::Undo, Op::Redo] {
            match op {
                Op::Undo => {
                    history.undo();
                }
                Op::Redo => {
                    history.redo();
                }
                Op::Commit | Op::Clear => unreachable!(),
            }
            let mut all: Vec<u64> = ids(history.active())
                .into_iter()
                .chain(ids(history.undone()))
                .collect();
            all.sort_unstable();
            assert_eq!(all, vec![1, 2, 3, 4]);
        }
    }
}
