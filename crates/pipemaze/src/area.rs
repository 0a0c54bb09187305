//! Enclosed-area computation for a closed tile loop.
//!
//! The loop tiles are lattice points of a simple rectilinear polygon, so
//! the count of strictly-interior cells follows from two classics:
//!
//! 1. Shoelace formula for the polygon's area from its ordered vertices.
//! 2. Pick's theorem, `Area = Interior + Boundary/2 - 1`, rearranged to
//!    `Interior = Area - Boundary/2 + 1`.
//!
//! Subtracting the boundary count alone is tempting but wrong: it
//! under- or over-counts depending on how the loop turns. Pick's theorem
//! is exact for any simple lattice polygon.

use std::collections::HashSet;

use crate::tile::Coord;
use crate::walk::TileLoop;

/// Error raised when the area computation is handed a degenerate loop.
/// Not expected for loops produced by the walker; this is a contract
/// check for direct callers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoopError {
    #[error("loop is not closed (first and last coordinates differ)")]
    NotClosed,
    #[error("loop has {0} distinct vertices, need at least 3")]
    Degenerate(usize),
}

/// Count the grid cells strictly enclosed by the loop.
///
/// Direction-independent: a clockwise and a counter-clockwise traversal
/// of the same cycle give the same count (the shoelace sign is dropped).
pub fn enclosed_area(tile_loop: &TileLoop) -> Result<u64, LoopError> {
    if !tile_loop.is_closed() {
        return Err(LoopError::NotClosed);
    }

    let vertices = tile_loop.vertices();
    let distinct: HashSet<Coord> = vertices.iter().copied().collect();
    if distinct.len() < 3 {
        return Err(LoopError::Degenerate(distinct.len()));
    }

    // Pick's theorem with everything doubled to stay in integers:
    // Interior = (2*Area - Boundary + 2) / 2. The numerator is always
    // even for a lattice polygon.
    let double_area = shoelace_double_area(vertices).abs();
    let boundary = vertices.len() as i64;
    let interior = (double_area - boundary + 2) / 2;

    // Negative only if the loop self-intersects, which the walker's
    // visited set rules out.
    Ok(interior.max(0) as u64)
}

/// Twice the signed area of the polygon with the given ordered vertices,
/// the last vertex wrapping back to the first.
fn shoelace_double_area(vertices: &[Coord]) -> i64 {
    let mut sum = 0i64;
    for (i, a) in vertices.iter().enumerate() {
        let b = &vertices[(i + 1) % vertices.len()];
        sum += a.x as i64 * b.y as i64 - b.x as i64 * a.y as i64;
    }
    sum
}
