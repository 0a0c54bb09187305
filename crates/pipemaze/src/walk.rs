//! The loop walker: traces the unique pipe cycle out of the Start tile.
//!
//! The walk is a strict sequential state machine. From Start it picks the
//! first connectable neighbor in scan order, then keeps stepping onto the
//! single unvisited tile each pipe leads to, until it comes back around
//! to Start. No search, no backtracking: a well-formed maze gives every
//! loop tile exactly one way forward.
//!
//! Distances are not trusted from the one-directional walk. Once the loop
//! is closed, each tile's distance from Start is the lesser of walking
//! forward or backward around the cycle, `min(i, L - i)` for position `i`
//! in a loop of `L` tiles, and the walker stamps that value (and the
//! `on_loop` flag) onto the grid's tiles in a single final pass.

use crate::connect::{connects, infer_start_shape, start_openings};
use crate::grid::Grid;
use crate::tile::{Coord, Shape};

/// Error raised when the walk cannot close a loop.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WalkError {
    #[error("start tile has {found} connecting neighbors, expected exactly 2")]
    StartConnections { found: usize },
    #[error("walk dead-ended at ({x}, {y}) before closing the loop")]
    DeadEnd { x: usize, y: usize },
}

/// An ordered traversal of the pipe cycle.
///
/// Stored closed: the Start coordinate appears as both the first and the
/// last element. [`TileLoop::vertices`] drops the closing repetition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileLoop {
    coords: Vec<Coord>,
}

impl TileLoop {
    /// Wrap an ordered coordinate sequence. No validation happens here;
    /// the area calculator checks closure and degeneracy at the point of
    /// use.
    pub fn from_coords(coords: Vec<Coord>) -> Self {
        Self { coords }
    }

    /// Is the sequence closed (first element repeated at the end)?
    pub fn is_closed(&self) -> bool {
        self.coords.len() >= 2 && self.coords.first() == self.coords.last()
    }

    /// The loop vertices in walk order, without the closing repetition of
    /// Start.
    pub fn vertices(&self) -> &[Coord] {
        if self.is_closed() {
            &self.coords[..self.coords.len() - 1]
        } else {
            &self.coords
        }
    }

    /// Number of tiles on the loop (the closing repetition not counted).
    pub fn len(&self) -> usize {
        self.vertices().len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices().is_empty()
    }

    /// Distance from Start for each loop position, taking the shorter way
    /// around the cycle: `min(i, L - i)`.
    pub fn distances_from_start(&self) -> Vec<u32> {
        let len = self.len();
        (0..len).map(|i| i.min(len - i) as u32).collect()
    }

    /// The maximum over all loop tiles of the distance from Start. Equals
    /// `L / 2` for a loop of `L` tiles.
    pub fn furthest_distance(&self) -> u32 {
        self.distances_from_start().into_iter().max().unwrap_or(0)
    }
}

/// Walk the cycle out of Start and back.
///
/// Infers Start's true shape first (see
/// [`infer_start_shape`](crate::connect::infer_start_shape)), so junk
/// pipes that merely point at Start from a third side can neither divert
/// the first step nor fake an early closure. On success every loop tile
/// in the grid has `distance_from_start` and `on_loop` set.
pub fn walk(grid: &mut Grid) -> Result<TileLoop, WalkError> {
    let Some(start_shape) = infer_start_shape(grid) else {
        return Err(WalkError::StartConnections {
            found: start_openings(grid).len(),
        });
    };

    let start = grid.start().coord;
    let width = grid.width();
    let mut visited = vec![false; width * grid.height()];
    visited[start.y * width + start.x] = true;

    let mut coords = vec![start];
    let mut current = start;
    let mut steps = 0usize;
    let mut closed = false;

    while !closed {
        // Start's symbol is the erased `S`; substitute the inferred shape
        // at both ends of the connectivity check.
        let true_shape = |coord: Coord, shape: Shape| -> Shape {
            if coord == start { start_shape } else { shape }
        };

        let current_tile = grid.tile(current);
        let source_shape = true_shape(current, current_tile.shape);

        let mut next: Option<Coord> = None;
        for (dir, neighbor) in grid.neighbors(current_tile) {
            let target = neighbor.coord;
            if !connects(source_shape, true_shape(target, neighbor.shape), dir) {
                continue;
            }
            if target == start {
                // Reaching Start through a connector closes the loop, but
                // only once the walk is clear of Start's own first step.
                if steps >= 3 {
                    closed = true;
                    break;
                }
                continue;
            }
            if !visited[target.y * width + target.x] {
                next = Some(target);
                break;
            }
        }

        if closed {
            break;
        }
        let Some(next) = next else {
            return Err(WalkError::DeadEnd {
                x: current.x,
                y: current.y,
            });
        };

        visited[next.y * width + next.x] = true;
        coords.push(next);
        current = next;
        steps += 1;
    }

    coords.push(start);
    let tile_loop = TileLoop::from_coords(coords);

    // Single write pass: the walk itself never trusts its one-directional
    // step count as a distance.
    let distances = tile_loop.distances_from_start();
    for (coord, distance) in tile_loop.vertices().iter().zip(distances) {
        let tile = grid.tile_mut(*coord);
        tile.distance_from_start = Some(distance);
        tile.on_loop = true;
    }

    Ok(tile_loop)
}
