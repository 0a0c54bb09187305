//! Core tile types: shapes, directions, and grid coordinates.
//!
//! A maze is a rectangular grid of pipe-shaped tiles. Each tile's shape
//! determines which of the four cardinal directions it connects to. The
//! shape alphabet is fixed and checked at parse time, so everything past
//! the parser works with a closed enum rather than raw symbols.

/// The four cardinal directions.
///
/// Declaration order matters nowhere, but [`Direction::SCAN_ORDER`] does:
/// the walker always scans neighbors North, West, East, South, and its
/// tie-break on the first step out of Start depends on that order staying
/// fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    West,
    East,
    South,
}

impl Direction {
    /// Fixed neighbor scan order: North, West, East, South.
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::East,
        Direction::South,
    ];

    /// The direction pointing back the way we came.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
        }
    }

    /// Coordinate delta for one step in this direction.
    ///
    /// y grows downward (row-major, row 0 at the top), so North is -y.
    pub fn offset(self) -> (i64, i64) {
        match self {
            Direction::North => (0, -1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
        }
    }
}

/// Tile shape, one per symbol in the maze alphabet.
///
/// The bend names read as the pair of directions the pipe opens toward:
/// `NorthEast` is the `L` symbol, open to the north and the east.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    /// `.` - not a pipe, connects nowhere.
    Ground,
    /// `|` - opens north and south.
    Vertical,
    /// `-` - opens east and west.
    Horizontal,
    /// `L` - opens north and east.
    NorthEast,
    /// `J` - opens north and west.
    NorthWest,
    /// `F` - opens south and east.
    SouthEast,
    /// `7` - opens south and west.
    SouthWest,
    /// `S` - the start tile; its true shape is erased in the input.
    Start,
}

impl Shape {
    /// Map an input symbol to its shape, or `None` for anything outside
    /// the eight-symbol alphabet.
    pub fn from_symbol(symbol: char) -> Option<Shape> {
        match symbol {
            '.' => Some(Shape::Ground),
            '|' => Some(Shape::Vertical),
            '-' => Some(Shape::Horizontal),
            'L' => Some(Shape::NorthEast),
            'J' => Some(Shape::NorthWest),
            'F' => Some(Shape::SouthEast),
            '7' => Some(Shape::SouthWest),
            'S' => Some(Shape::Start),
            _ => None,
        }
    }

    /// The input symbol for this shape.
    pub fn symbol(self) -> char {
        match self {
            Shape::Ground => '.',
            Shape::Vertical => '|',
            Shape::Horizontal => '-',
            Shape::NorthEast => 'L',
            Shape::NorthWest => 'J',
            Shape::SouthEast => 'F',
            Shape::SouthWest => '7',
            Shape::Start => 'S',
        }
    }
}

/// A grid coordinate, 0-indexed, row-major (x = column, y = row).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A single grid cell.
///
/// Tiles are owned by the [`Grid`](crate::Grid); everything else refers to
/// them by coordinate. `distance_from_start` and `on_loop` start unset and
/// are written exactly once, by the walker, after the loop closes.
#[derive(Debug, Clone)]
pub struct Tile {
    pub coord: Coord,
    pub shape: Shape,
    /// Steps from Start along the shorter way around the loop.
    /// `None` until the walker confirms this tile is on the loop.
    pub distance_from_start: Option<u32>,
    pub on_loop: bool,
}

impl Tile {
    pub fn new(coord: Coord, shape: Shape) -> Self {
        Self {
            coord,
            shape,
            distance_from_start: None,
            on_loop: false,
        }
    }
}
