//! Data types for the ring splitter.
//!
//! Kept small and explicit so `build` and `walk` read as plain index
//! arithmetic over one vertex arena.

use std::fmt;

use crate::geom::{Point, Segment, Side};

/// Index into [`Arena::vertices`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(pub usize);

/// Virtual edge between two cut vertices, followed when traversal jumps
/// across the antimeridian. Never emitted as geometry.
pub type Connector = Segment<VertexId>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VertexKind {
    /// Vertex of the input ring.
    Original,
    /// Synthesized antimeridian vertex; index into [`Arena::connectors`].
    Cut { connector: usize },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vertex {
    pub point: Point,
    pub kind: VertexKind,
}

impl Vertex {
    #[inline]
    pub fn original(point: Point) -> Self {
        Self {
            point,
            kind: VertexKind::Original,
        }
    }
    #[inline]
    pub fn is_cut(&self) -> bool {
        matches!(self.kind, VertexKind::Cut { .. })
    }
}

/// All vertices of one ring (original + synthesized) in ring order, assigned
/// once after every crossing is known. The ring is stored open: the closing
/// duplicate is dropped and `next` wraps around.
#[derive(Clone, Debug)]
pub struct Arena {
    /// Row index of the source ring, used to identify it in errors.
    pub origin: usize,
    pub vertices: Vec<Vertex>,
    pub connectors: Vec<Connector>,
}

impl Arena {
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }
    #[inline]
    pub fn vertex(&self, id: VertexId) -> Vertex {
        self.vertices[id.0]
    }
    #[inline]
    pub fn next(&self, id: VertexId) -> VertexId {
        VertexId((id.0 + 1) % self.len())
    }
    #[inline]
    pub fn prev(&self, id: VertexId) -> VertexId {
        VertexId((id.0 + self.len() - 1) % self.len())
    }
    /// Side a vertex belongs to. A cut sits on the boundary, so it takes the
    /// side of the edge arriving at it.
    pub fn side(&self, id: VertexId) -> Side {
        let v = self.vertex(id);
        if v.is_cut() {
            Side::of(self.vertex(self.prev(id)).point.x)
        } else {
            Side::of(v.point.x)
        }
    }
    /// Number of cut vertices.
    #[inline]
    pub fn crossings(&self) -> usize {
        self.connectors.len() * 2
    }
}

/// Errors raised while splitting rings. `ring` is always the row index of
/// the ring's first vertex in the input.
#[derive(Clone, Debug, PartialEq)]
pub enum SplitError {
    /// A ring crosses the antimeridian an odd number of times.
    OddCrossings { ring: usize, crossings: usize },
    /// Traversal was about to reach a vertex a third time.
    ExcessVisit { ring: usize, vertex: usize },
    /// A crossing edge came out parallel to the antimeridian.
    DegenerateIntersection { ring: usize, edge: Segment },
    /// Trailing rows never returned to their opening coordinate.
    UnclosedRing { ring: usize, len: usize },
    /// Longitude and latitude sequences differ in length.
    LengthMismatch { x: usize, y: usize },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::OddCrossings { ring, crossings } => write!(
                f,
                "ring at row {} crosses the antimeridian {} times (expected an even count)",
                ring, crossings
            ),
            SplitError::ExcessVisit { ring, vertex } => write!(
                f,
                "ring at row {} revisits vertex {} a third time (malformed geometry)",
                ring, vertex
            ),
            SplitError::DegenerateIntersection { ring, edge } => write!(
                f,
                "ring at row {}: edge {:?} -> {:?} is parallel to the antimeridian",
                ring, edge.p1, edge.p2
            ),
            SplitError::UnclosedRing { ring, len } => write!(
                f,
                "ring at row {} never returns to its first point ({} trailing rows)",
                ring, len
            ),
            SplitError::LengthMismatch { x, y } => {
                write!(f, "longitude count {} != latitude count {}", x, y)
            }
        }
    }
}

impl std::error::Error for SplitError {}
