//! Ring splitter: cut rings at the antimeridian and re-stitch them per side.
//!
//! Purpose
//! - Insert a cut vertex on every edge whose short path crosses ±180°, pair
//!   the cuts into connectors, and walk the augmented ring so that each
//!   emitted ring stays on one side.
//!
//! Design
//! - Arena and index: all vertices (original + synthesized) live in one
//!   `Vec` assigned once; "next", "other" and "visited" are integer lookups.
//! - The walk is a two-state machine (`Step::{Forward, AtCutJump}`) driven by
//!   the current vertex kind and the side of its successor.
//!
//! Limitations
//! - Connectors pair cuts by descending latitude. This matches the short-path
//!   crossing heuristic but is unverified for rings whose crossings interleave
//!   in latitude (zig-zags across the cut).
//!
//! Layout
//! - `types.rs` (arena, connectors, errors), `build.rs` (construction),
//!   `walk.rs` (traversal).

mod build;
mod types;
mod walk;

pub use build::build_arena;
pub use types::{Arena, Connector, SplitError, Vertex, VertexId, VertexKind};
pub use walk::{transition, walk, Step};

use crate::rings::{extract_rings, Ring};

/// Split one ring into rings that never cross the antimeridian.
///
/// A ring without crossings comes back unchanged as the only element.
pub fn split_ring(ring: &Ring) -> Result<Vec<Ring>, SplitError> {
    let arena = build_arena(ring)?;
    let rings = walk(&arena)?;
    tracing::debug!(
        ring = ring.origin,
        crossings = arena.crossings(),
        rings = rings.len(),
        "split_ring"
    );
    Ok(rings)
}

/// Split every ring in parallel `xs`/`ys` columns and concatenate the result.
///
/// Output rings keep the relative order of their source rings.
pub fn split_coordinates(xs: &[f64], ys: &[f64]) -> Result<(Vec<f64>, Vec<f64>), SplitError> {
    let mut out_x = Vec::with_capacity(xs.len());
    let mut out_y = Vec::with_capacity(ys.len());
    for ring in extract_rings(xs, ys)? {
        for piece in split_ring(&ring?)? {
            for p in piece.points {
                out_x.push(p.x);
                out_y.push(p.y);
            }
        }
    }
    Ok((out_x, out_y))
}

#[cfg(test)]
mod tests;
