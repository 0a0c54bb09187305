//! Grid construction and coordinate-indexed tile lookup.
//!
//! The grid is a single owned `Vec<Tile>` indexed by `y * width + x`.
//! It is structurally immutable after `build`: the only later writes are
//! the walker stamping `distance_from_start` / `on_loop` onto loop tiles.

use crate::tile::{Coord, Direction, Shape, Tile};

/// Error raised while parsing rows into a grid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid has no rows")]
    Empty,
    #[error("row {row} is {width} wide, expected {expected}")]
    RaggedRow {
        row: usize,
        width: usize,
        expected: usize,
    },
    #[error("unknown symbol '{symbol}' at ({x}, {y})")]
    UnknownSymbol { symbol: char, x: usize, y: usize },
    #[error("grid has no start tile")]
    NoStart,
    #[error("grid has more than one start tile ({0} found)")]
    MultipleStarts(usize),
}

/// A rectangular maze of pipe tiles with exactly one Start.
#[derive(Debug, Clone)]
pub struct Grid {
    tiles: Vec<Tile>,
    width: usize,
    height: usize,
    start: Coord,
}

impl Grid {
    /// Parse text rows into a grid.
    ///
    /// Fails if there are no rows, rows differ in width, any symbol is
    /// outside the pipe alphabet, or the number of Start tiles is not
    /// exactly one. Empty trailing lines are the caller's problem: every
    /// row given here must match the width of the first.
    pub fn build<S: AsRef<str>>(rows: &[S]) -> Result<Grid, GridError> {
        let Some(first) = rows.first() else {
            return Err(GridError::Empty);
        };
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(GridError::Empty);
        }

        let mut tiles = Vec::with_capacity(width * rows.len());
        let mut starts = Vec::new();

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let row_width = row.chars().count();
            if row_width != width {
                return Err(GridError::RaggedRow {
                    row: y,
                    width: row_width,
                    expected: width,
                });
            }

            for (x, symbol) in row.chars().enumerate() {
                let shape = Shape::from_symbol(symbol)
                    .ok_or(GridError::UnknownSymbol { symbol, x, y })?;
                if shape == Shape::Start {
                    starts.push(Coord::new(x, y));
                }
                tiles.push(Tile::new(Coord::new(x, y), shape));
            }
        }

        let start = match starts.len() {
            0 => return Err(GridError::NoStart),
            1 => starts[0],
            n => return Err(GridError::MultipleStarts(n)),
        };

        Ok(Grid {
            tiles,
            width,
            height: rows.len(),
            start,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Bounds-checked tile lookup. Out-of-range coordinates are `None`,
    /// never a panic, so edge tiles can probe off-grid neighbors freely.
    pub fn tile_at(&self, x: usize, y: usize) -> Option<&Tile> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(&self.tiles[y * self.width + x])
    }

    /// The unique Start tile.
    pub fn start(&self) -> &Tile {
        // The single-start invariant is enforced in build().
        &self.tiles[self.start.y * self.width + self.start.x]
    }

    /// In-bounds neighbors of a tile, paired with the direction from the
    /// tile toward each neighbor.
    ///
    /// Always yielded in scan order (North, West, East, South); the
    /// walker's first-step tie-break relies on this.
    pub fn neighbors(&self, tile: &Tile) -> Vec<(Direction, &Tile)> {
        let mut neighbors = Vec::with_capacity(4);
        for dir in Direction::SCAN_ORDER {
            let (dx, dy) = dir.offset();
            let x = tile.coord.x as i64 + dx;
            let y = tile.coord.y as i64 + dy;
            if x < 0 || y < 0 {
                continue;
            }
            if let Some(neighbor) = self.tile_at(x as usize, y as usize) {
                neighbors.push((dir, neighbor));
            }
        }
        neighbors
    }

    /// Unchecked-by-contract lookup for coordinates already known to be
    /// in bounds (loop coordinates always are).
    pub(crate) fn tile(&self, coord: Coord) -> &Tile {
        &self.tiles[coord.y * self.width + coord.x]
    }

    pub(crate) fn tile_mut(&mut self, coord: Coord) -> &mut Tile {
        &mut self.tiles[coord.y * self.width + coord.x]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE: [&str; 5] = [".....", ".S-7.", ".|.|.", ".L-J.", "....."];

    #[test]
    fn build_simple_grid() {
        let grid = Grid::build(&SIMPLE).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 5);
        assert_eq!(grid.start().coord, Coord::new(1, 1));
        assert_eq!(grid.start().shape, Shape::Start);
    }

    #[test]
    fn tile_lookup_in_and_out_of_bounds() {
        let grid = Grid::build(&SIMPLE).unwrap();
        assert_eq!(grid.tile_at(2, 1).unwrap().shape, Shape::Horizontal);
        assert_eq!(grid.tile_at(1, 2).unwrap().shape, Shape::Vertical);
        assert!(grid.tile_at(5, 0).is_none());
        assert!(grid.tile_at(0, 5).is_none());
    }

    #[test]
    fn neighbors_in_fixed_order() {
        let grid = Grid::build(&SIMPLE).unwrap();
        let start = grid.start();
        let dirs: Vec<Direction> = grid
            .neighbors(start)
            .iter()
            .map(|(dir, _)| *dir)
            .collect();
        assert_eq!(
            dirs,
            vec![
                Direction::North,
                Direction::West,
                Direction::East,
                Direction::South
            ]
        );
    }

    #[test]
    fn corner_tile_has_two_neighbors() {
        let grid = Grid::build(&SIMPLE).unwrap();
        let corner = grid.tile_at(0, 0).unwrap();
        let dirs: Vec<Direction> = grid
            .neighbors(corner)
            .iter()
            .map(|(dir, _)| *dir)
            .collect();
        assert_eq!(dirs, vec![Direction::East, Direction::South]);
    }

    #[test]
    fn empty_rows_rejected() {
        let rows: [&str; 0] = [];
        assert_eq!(Grid::build(&rows).unwrap_err(), GridError::Empty);
        assert_eq!(Grid::build(&[""]).unwrap_err(), GridError::Empty);
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Grid::build(&["S-7", "|.|", "L-J."]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                row: 2,
                width: 4,
                expected: 3
            }
        );
    }

    #[test]
    fn missing_start_rejected() {
        let err = Grid::build(&["F-7", "|.|", "L-J"]).unwrap_err();
        assert_eq!(err, GridError::NoStart);
    }

    #[test]
    fn multiple_starts_rejected() {
        let err = Grid::build(&["S-7", "|.|", "L-S"]).unwrap_err();
        assert_eq!(err, GridError::MultipleStarts(2));
    }

    #[test]
    fn unknown_symbol_rejected() {
        let err = Grid::build(&["S-7", "|#|", "L-J"]).unwrap_err();
        assert_eq!(
            err,
            GridError::UnknownSymbol {
                symbol: '#',
                x: 1,
                y: 1
            }
        );
    }
}
