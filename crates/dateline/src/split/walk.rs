//! Traversal phase: emit one ring per side by walking the arena.
//!
//! State machine
//! - `Step::Forward`: continue to the next vertex in ring order.
//! - `Step::AtCutJump`: at a cut whose successor lies on the other side,
//!   follow the connector to its partner cut instead.
//!
//! Start selection
//! - The first ring starts at vertex 0.
//! - Every cut reached by a jump is queued as a start for the other side;
//!   queued cuts that still have a visit left go first.
//! - Otherwise the lowest-index original vertex never visited.

use std::collections::VecDeque;

use crate::cfg::MAX_VISITS;
use crate::geom::{Point, Side};
use crate::rings::Ring;

use super::types::{Arena, SplitError, VertexId, VertexKind};

/// How to leave the current vertex.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Forward,
    AtCutJump,
}

/// Transition for a vertex of `kind` on a ring traced on `ring_side`, whose
/// successor in ring order lies on `next_side`.
#[inline]
pub fn transition(kind: VertexKind, ring_side: Side, next_side: Side) -> Step {
    match kind {
        VertexKind::Original => Step::Forward,
        // only touched the antimeridian
        VertexKind::Cut { .. } if next_side == ring_side => Step::Forward,
        VertexKind::Cut { .. } => Step::AtCutJump,
    }
}

/// Walk `arena` until every vertex is visited and return the emitted rings
/// in emission order. Each ring is closed.
pub fn walk(arena: &Arena) -> Result<Vec<Ring>, SplitError> {
    Walker::new(arena).run()
}

/// Runner carrying the per-ring bookkeeping.
struct Walker<'a> {
    arena: &'a Arena,
    visits: Vec<u8>,
    pending: VecDeque<VertexId>,
    rings: Vec<Ring>,
}

impl<'a> Walker<'a> {
    fn new(arena: &'a Arena) -> Self {
        Self {
            arena,
            visits: vec![0; arena.len()],
            pending: VecDeque::new(),
            rings: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Ring>, SplitError> {
        if self.arena.is_empty() {
            return Ok(self.rings);
        }
        let first = VertexId(0);
        let mut start = Some((first, self.arena.side(first)));
        while let Some((id, side)) = start {
            self.trace(id, side)?;
            start = self.next_start();
        }
        Ok(self.rings)
    }

    fn next_start(&mut self) -> Option<(VertexId, Side)> {
        while let Some(id) = self.pending.pop_front() {
            if self.visits[id.0] < MAX_VISITS {
                return Some((id, self.arena.side(id)));
            }
        }
        (0..self.arena.len())
            .map(VertexId)
            .find(|&id| self.visits[id.0] == 0 && !self.arena.vertex(id).is_cut())
            .map(|id| (id, self.arena.side(id)))
    }

    /// Emit one closed ring starting at `start`, traced on `side`.
    fn trace(&mut self, start: VertexId, side: Side) -> Result<(), SplitError> {
        self.visit(start)?;
        let mut points = vec![self.emit(start, side)];
        let mut current = start;
        loop {
            let next = self.advance(current, side);
            if next == start {
                break;
            }
            self.visit(next)?;
            points.push(self.emit(next, side));
            current = next;
        }
        let first = points[0];
        if points.len() == 1 || points.last() != Some(&first) {
            points.push(first);
        }
        self.rings.push(Ring::new(self.arena.origin, points));
        Ok(())
    }

    fn advance(&mut self, current: VertexId, side: Side) -> VertexId {
        let next = self.arena.next(current);
        let kind = self.arena.vertex(current).kind;
        match (transition(kind, side, self.arena.side(next)), kind) {
            (Step::AtCutJump, VertexKind::Cut { connector }) => {
                let target = self.arena.connectors[connector].other(current);
                tracing::trace!(
                    ring = self.arena.origin,
                    from = current.0,
                    to = target.0,
                    "jump across cut"
                );
                self.pending.push_back(target);
                target
            }
            _ => next,
        }
    }

    fn visit(&mut self, id: VertexId) -> Result<(), SplitError> {
        let count = &mut self.visits[id.0];
        if *count >= MAX_VISITS {
            return Err(SplitError::ExcessVisit {
                ring: self.arena.origin,
                vertex: id.0,
            });
        }
        *count += 1;
        Ok(())
    }

    /// Coordinates written for `id`; cuts are pinned to this side's boundary.
    fn emit(&self, id: VertexId, side: Side) -> Point {
        let v = self.arena.vertex(id);
        if v.is_cut() {
            Point::new(side.boundary_lon(), v.point.y)
        } else {
            v.point
        }
    }
}
