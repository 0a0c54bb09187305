//! # pipemaze
//!
//! Loop discovery and enclosed-area analysis for grids of pipe tiles.
//!
//! Given rows of pipe symbols (`. | - L J F 7 S`), the crate finds the
//! single closed loop reachable from the `S` tile, the maximum distance
//! from `S` to any loop tile (taking the shorter way around), and the
//! number of grid cells the loop encloses.
//!
//! The stages run strictly in order, each consuming the previous one's
//! output:
//!
//! 1. [`Grid::build`] parses rows into an owned tile grid.
//! 2. [`connect`] decides which adjacent tiles a walk may cross between.
//! 3. [`walk`] traces the cycle into an ordered [`TileLoop`].
//! 4. [`enclosed_area`] turns the loop into an interior-cell count via
//!    the shoelace formula and Pick's theorem.
//!
//! [`solve`] runs all four for callers that just want the two numbers.

pub mod area;
pub mod connect;
pub mod grid;
pub mod tile;
pub mod walk;

// Re-export common types at crate root for convenience.
pub use area::{LoopError, enclosed_area};
pub use connect::{can_traverse, connects, infer_start_shape, open_directions};
pub use grid::{Grid, GridError};
pub use tile::{Coord, Direction, Shape, Tile};
pub use walk::{TileLoop, WalkError, walk};

/// Everything a maze yields: the two headline numbers plus the traversed
/// loop for callers that want to render or inspect it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub furthest_distance: u32,
    pub enclosed_area: u64,
    pub tile_loop: TileLoop,
}

impl Solution {
    /// Number of tiles on the loop.
    pub fn loop_len(&self) -> usize {
        self.tile_loop.len()
    }
}

/// Any failure from any stage of [`solve`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SolveError {
    #[error(transparent)]
    Grid(#[from] GridError),
    #[error(transparent)]
    Walk(#[from] WalkError),
    #[error(transparent)]
    Loop(#[from] LoopError),
}

/// Run the full pipeline on text rows: build the grid, walk the loop,
/// measure it.
pub fn solve<S: AsRef<str>>(rows: &[S]) -> Result<Solution, SolveError> {
    let mut grid = Grid::build(rows)?;
    let tile_loop = walk(&mut grid)?;
    let enclosed = enclosed_area(&tile_loop)?;
    Ok(Solution {
        furthest_distance: tile_loop.furthest_distance(),
        enclosed_area: enclosed,
        tile_loop,
    })
}
