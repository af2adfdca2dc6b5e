//! Cell coordinates, headings, and the [`Maze`] of known walls

pub mod standard_maze;
mod walls;

pub use walls::{BoundaryOrientation, Maze};

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// A cell of the maze
///
/// Row 0 is the northern edge and column 0 the western edge
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    /// Row - increases southwards
    pub row: usize,
    /// Column - increases eastwards
    pub column: usize,
}

impl Location {
    pub const fn new(row: usize, column: usize) -> Self {
        Self { row, column }
    }

    /// The cell one step in the given direction
    ///
    /// Returns None only when stepping north of row 0 or west of column 0; the upper bounds
    /// belong to the [`Maze`]
    pub fn step(&self, direction: Direction) -> Option<Location> {
        match direction {
            Direction::North => Some(Self::new(self.row.checked_sub(1)?, self.column)),
            Direction::East => Some(Self::new(self.row, self.column + 1)),
            Direction::South => Some(Self::new(self.row + 1, self.column)),
            Direction::West => Some(Self::new(self.row, self.column.checked_sub(1)?)),
        }
    }
}

/// Cardinal directions, numbered clockwise from north
#[derive(
    Copy,
    Clone,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    Serialize,
    Deserialize,
)]
#[repr(u8)]
pub enum Direction {
    /// -row
    #[default]
    North = 0,
    /// +column
    East = 1,
    /// +row
    South = 2,
    /// -column
    West = 3,
}

impl Direction {
    /// All directions in clockwise order starting at north
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The direction reached after the given number of clockwise quarter turns
    pub fn rotate_clockwise(self, quarter_turns: u8) -> Self {
        let index = (u8::from(self) as usize + quarter_turns as usize) % 4;
        Self::ALL[index]
    }

    pub fn opposite(self) -> Self {
        self.rotate_clockwise(2)
    }

    /// All four directions in clockwise order, starting with this one
    pub fn clockwise_from(self) -> [Direction; 4] {
        [0, 1, 2, 3].map(|quarter_turns| self.rotate_clockwise(quarter_turns))
    }

    /// The turn that takes a mouse facing this direction to face `target`
    pub fn turn_to(self, target: Direction) -> Turn {
        match (u8::from(target) + 4 - u8::from(self)) % 4 {
            0 => Turn::Straight,
            1 => Turn::Right,
            2 => Turn::Around,
            _ => Turn::Left,
        }
    }

    /// Arrow drawn at the mouse's cell by [`crate::render::MazeView`]
    pub fn glyph(self) -> char {
        match self {
            Direction::North => '^',
            Direction::East => '>',
            Direction::South => 'v',
            Direction::West => '<',
        }
    }
}

/// A change of heading, relative to the current one
///
/// This is also how the side sensors name the walls they see
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    Straight,
    Right,
    Around,
    Left,
}

impl Turn {
    /// Signed rotation, clockwise positive
    pub fn degrees(self) -> i16 {
        match self {
            Turn::Straight => 0,
            Turn::Right => 90,
            Turn::Around => 180,
            Turn::Left => -90,
        }
    }

    /// The absolute direction this turn points to from `heading`
    pub fn apply(self, heading: Direction) -> Direction {
        match self {
            Turn::Straight => heading,
            Turn::Right => heading.rotate_clockwise(1),
            Turn::Around => heading.rotate_clockwise(2),
            Turn::Left => heading.rotate_clockwise(3),
        }
    }
}

/// Where the mouse is and which way it faces
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    pub location: Location,
    pub heading: Direction,
}

impl Pose {
    pub const fn new(row: usize, column: usize, heading: Direction) -> Self {
        Self {
            location: Location::new(row, column),
            heading,
        }
    }
}
