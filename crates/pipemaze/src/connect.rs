//! Pipe-to-pipe connectivity rules.
//!
//! A move between two adjacent tiles is legal only when both ends agree:
//! the source must have an open connector pointing at the target AND the
//! target must have one pointing back. A `-` sitting on top of an `L` is
//! adjacent but not connected; a `|` on top of an `L` is.
//!
//! The Start tile's shape is erased in the input, so in the raw table it
//! is a wildcard open in all four directions. The walker never relies on
//! the wildcard: it calls [`infer_start_shape`] first and walks with
//! Start's true shape, which rejects junk pipes that merely point at
//! Start from a third side.

use crate::grid::Grid;
use crate::tile::{Direction, Shape, Tile};

/// The directions in which a shape has an open connector.
///
/// Ground opens nowhere; Start is a wildcard (all four) until inferred.
pub fn open_directions(shape: Shape) -> &'static [Direction] {
    use Direction::{East, North, South, West};
    match shape {
        Shape::Ground => &[],
        Shape::Vertical => &[North, South],
        Shape::Horizontal => &[East, West],
        Shape::NorthEast => &[North, East],
        Shape::NorthWest => &[North, West],
        Shape::SouthEast => &[South, East],
        Shape::SouthWest => &[South, West],
        Shape::Start => &[North, West, East, South],
    }
}

/// Does `shape` open toward `direction`?
pub fn opens_toward(shape: Shape, direction: Direction) -> bool {
    open_directions(shape).contains(&direction)
}

/// Can a walk step from a tile of shape `source`, in `direction`, onto a
/// tile of shape `target`? True only when both ends agree.
pub fn connects(source: Shape, target: Shape, direction: Direction) -> bool {
    opens_toward(source, direction) && opens_toward(target, direction.opposite())
}

/// Tile-level wrapper around [`connects`]: legal traversal from `source`
/// onto the adjacent `target` lying in `direction`.
pub fn can_traverse(source: &Tile, target: &Tile, direction: Direction) -> bool {
    connects(source.shape, target.shape, direction)
}

/// The directions (in scan order) in which a neighbor of Start has an
/// open connector pointing back at Start.
pub fn start_openings(grid: &Grid) -> Vec<Direction> {
    let start = grid.start();
    let mut open = Vec::with_capacity(2);
    for (dir, neighbor) in grid.neighbors(start) {
        if opens_toward(neighbor.shape, dir.opposite()) {
            open.push(dir);
        }
    }
    open
}

/// Resolve the Start tile's true shape from its surroundings.
///
/// A well-formed maze has exactly two neighbors pointing back at Start,
/// and those two directions identify Start's real pipe shape; anything
/// else (a dead start, or an ambiguous one with three or four candidates)
/// yields `None`.
pub fn infer_start_shape(grid: &Grid) -> Option<Shape> {
    let open = start_openings(grid);
    if open.len() != 2 {
        return None;
    }
    shape_from_openings(open[0], open[1])
}

/// The pipe shape whose two open ends are exactly `a` and `b`.
fn shape_from_openings(a: Direction, b: Direction) -> Option<Shape> {
    use Direction::{East, North, South, West};
    // Normalized to scan order by the caller, but match both orders so the
    // helper stands on its own.
    match (a, b) {
        (North, South) | (South, North) => Some(Shape::Vertical),
        (East, West) | (West, East) => Some(Shape::Horizontal),
        (North, East) | (East, North) => Some(Shape::NorthEast),
        (North, West) | (West, North) => Some(Shape::NorthWest),
        (South, East) | (East, South) => Some(Shape::SouthEast),
        (South, West) | (West, South) => Some(Shape::SouthWest),
        _ => None,
    }
}
