//! Construction phase: normalize, insert cut vertices, pair them.

use std::cmp::Ordering;

use crate::geom::{intersect, normalize, should_split, Point, Segment};
use crate::rings::Ring;

use super::types::{Arena, Connector, SplitError, Vertex, VertexId, VertexKind};

/// Build the vertex arena for one ring.
///
/// Every crossing edge gets a cut vertex right after its first endpoint.
/// Cuts are sorted by latitude (descending) and paired consecutively into
/// connectors.
pub fn build_arena(ring: &Ring) -> Result<Arena, SplitError> {
    let points: Vec<Point> = ring
        .open_points()
        .iter()
        .map(|p| Point::new(normalize(p.x), p.y))
        .collect();
    let n = points.len();

    let mut vertices = Vec::with_capacity(n + 2);
    let mut cuts: Vec<VertexId> = Vec::new();
    for (i, &p) in points.iter().enumerate() {
        vertices.push(Vertex::original(p));
        let edge = Segment::new(p, points[(i + 1) % n]);
        if !should_split(&edge) {
            continue;
        }
        let Some(point) = intersect(&edge) else {
            tracing::error!(ring = ring.origin, ?edge, "crossing edge parallel to antimeridian");
            return Err(SplitError::DegenerateIntersection {
                ring: ring.origin,
                edge,
            });
        };
        cuts.push(VertexId(vertices.len()));
        // connector index is patched once the cuts are paired
        vertices.push(Vertex {
            point,
            kind: VertexKind::Cut { connector: 0 },
        });
    }

    if cuts.len() % 2 != 0 {
        return Err(SplitError::OddCrossings {
            ring: ring.origin,
            crossings: cuts.len(),
        });
    }

    // Stable: equal latitudes keep ring order.
    cuts.sort_by(|a, b| {
        let (ya, yb) = (vertices[a.0].point.y, vertices[b.0].point.y);
        yb.partial_cmp(&ya).unwrap_or(Ordering::Equal)
    });
    let connectors: Vec<Connector> = cuts
        .chunks_exact(2)
        .map(|pair| Segment::new(pair[0], pair[1]))
        .collect();
    for (c, conn) in connectors.iter().enumerate() {
        for id in [conn.p1, conn.p2] {
            vertices[id.0].kind = VertexKind::Cut { connector: c };
        }
    }

    Ok(Arena {
        origin: ring.origin,
        vertices,
        connectors,
    })
}
