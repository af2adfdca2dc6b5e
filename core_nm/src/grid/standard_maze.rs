use crate::grid::{Direction, Location, Maze, Pose};
use crate::MazeError;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Named maze layouts, laid out for a 4 by 6 maze
#[derive(Copy, Clone, Debug, Default, PartialOrd, PartialEq, Ord, Eq, Serialize, Deserialize)]
pub enum StandardMaze {
    /// The course the NanoMouse was built to run
    #[default]
    NanoMouse,
    /// Only the perimeter
    Blank,
    /// One corridor through every cell
    Serpentine,
}

impl StandardMaze {
    /// Get a list of all available mazes
    pub fn get_all() -> [Self; 3] {
        [Self::NanoMouse, Self::Blank, Self::Serpentine]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::NanoMouse => "nanomouse",
            Self::Blank => "blank",
            Self::Serpentine => "serpentine",
        }
    }

    /// The interior walls of this layout, each named once from one of its two cells
    pub fn walls(&self) -> &'static [(Location, Direction)] {
        match self {
            Self::NanoMouse => &NANO_MOUSE_WALLS,
            Self::Blank => &[],
            Self::Serpentine => &SERPENTINE_WALLS,
        }
    }

    /// Adds the walls of this layout to `maze`
    ///
    /// Fails if the maze is too small to hold them; walls before the failing one stay added
    pub fn apply<const ROWS: usize, const COLUMNS: usize>(
        &self,
        maze: &mut Maze<ROWS, COLUMNS>,
    ) -> Result<(), MazeError> {
        for &(cell, direction) in self.walls() {
            maze.add_wall(cell, direction)?;
        }
        Ok(())
    }

    /// A fresh [`Maze`] containing this layout
    pub fn build<const ROWS: usize, const COLUMNS: usize>(
        &self,
    ) -> Result<Maze<ROWS, COLUMNS>, MazeError> {
        let mut maze = Maze::new();
        self.apply(&mut maze)?;
        Ok(maze)
    }

    /// Where the mouse is placed at the start of a run
    pub fn default_start(&self) -> Pose {
        match self {
            Self::Serpentine => Pose::new(0, 0, Direction::East),
            _ => Pose::new(3, 0, Direction::North),
        }
    }

    /// The cell the mouse is trying to reach
    pub fn default_target(&self) -> Location {
        match self {
            Self::NanoMouse => Location::new(1, 2),
            Self::Blank => Location::new(0, 5),
            Self::Serpentine => Location::new(3, 0),
        }
    }
}

impl FromStr for StandardMaze {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::get_all()
            .into_iter()
            .find(|maze| maze.name().eq_ignore_ascii_case(s))
            .ok_or(MazeError::UnrecognizedName)
    }
}

const fn wall(row: usize, column: usize, direction: Direction) -> (Location, Direction) {
    (Location::new(row, column), direction)
}

#[rustfmt::skip]
const NANO_MOUSE_WALLS: [(Location, Direction); 12] = [
    wall(0, 2, Direction::South),
    wall(0, 3, Direction::South),
    wall(0, 4, Direction::South),
    wall(1, 3, Direction::South),
    wall(2, 4, Direction::South),

    wall(1, 0, Direction::East),
    wall(3, 0, Direction::East),
    wall(1, 1, Direction::East),
    wall(2, 1, Direction::East),
    wall(2, 2, Direction::East),
    wall(2, 3, Direction::East),
    wall(2, 4, Direction::East),
];

#[rustfmt::skip]
const SERPENTINE_WALLS: [(Location, Direction); 15] = [
    wall(0, 0, Direction::South), wall(0, 1, Direction::South), wall(0, 2, Direction::South),
    wall(0, 3, Direction::South), wall(0, 4, Direction::South),

    wall(1, 1, Direction::South), wall(1, 2, Direction::South), wall(1, 3, Direction::South),
    wall(1, 4, Direction::South), wall(1, 5, Direction::South),

    wall(2, 0, Direction::South), wall(2, 1, Direction::South), wall(2, 2, Direction::South),
    wall(2, 3, Direction::South), wall(2, 4, Direction::South),
];
