use crate::constants::UNREACHABLE;
use crate::grid::{Direction, Location};
use crate::MazeError;
use log::trace;
use serde::{Deserialize, Serialize};

/// Which way a boundary runs
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BoundaryOrientation {
    /// Separates a cell from its east and west neighbors, indexed by `(row, boundary column)`
    Vertical,
    /// Separates a cell from its north and south neighbors, indexed by `(boundary row, column)`
    Horizontal,
}

/// The walls the mouse knows about
///
/// Each physical boundary is stored once, so the east wall of a cell is always the same bit as
/// the west wall of its eastern neighbor. Boundaries on the perimeter are walled from
/// construction onwards, and no operation clears a wall.
///
/// Vertical boundaries are numbered `0..=COLUMNS` in each row and horizontal boundaries
/// `0..=ROWS` in each column. Boundary 0 of either kind is the north or west perimeter and is
/// not stored.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Maze<const ROWS: usize, const COLUMNS: usize> {
    /// `east[row][column]` is vertical boundary `column + 1`
    east: [[bool; COLUMNS]; ROWS],
    /// `south[row][column]` is horizontal boundary `row + 1`
    south: [[bool; COLUMNS]; ROWS],
}

impl<const ROWS: usize, const COLUMNS: usize> Default for Maze<ROWS, COLUMNS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROWS: usize, const COLUMNS: usize> Maze<ROWS, COLUMNS> {
    const NOT_EMPTY: () = assert!(ROWS > 0 && COLUMNS > 0, "a maze needs at least one cell");
    /// Every distance, the longest path's included, stays below [`UNREACHABLE`]
    const DISTANCES_FIT: () = assert!(
        ROWS < UNREACHABLE as usize
            && COLUMNS < UNREACHABLE as usize
            && ROWS * COLUMNS < UNREACHABLE as usize,
        "a maze needs fewer cells than the unreachable distance"
    );

    /// A maze with only the perimeter walled
    pub fn new() -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::NOT_EMPTY;
        #[allow(clippy::let_unit_value)]
        let () = Self::DISTANCES_FIT;

        let mut east = [[false; COLUMNS]; ROWS];
        let mut south = [[false; COLUMNS]; ROWS];
        for row in east.iter_mut() {
            row[COLUMNS - 1] = true;
        }
        south[ROWS - 1] = [true; COLUMNS];

        Self { east, south }
    }

    pub const fn rows(&self) -> usize {
        ROWS
    }

    pub const fn columns(&self) -> usize {
        COLUMNS
    }

    pub fn contains(&self, cell: Location) -> bool {
        cell.row < ROWS && cell.column < COLUMNS
    }

    /// Fails with [`MazeError::CellOutOfBounds`] if the cell is not in the maze
    pub fn check_cell(&self, cell: Location) -> Result<(), MazeError> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(MazeError::CellOutOfBounds {
                row: cell.row,
                column: cell.column,
            })
        }
    }

    /// Whether the boundary of `cell` on the given side is walled
    pub fn wall_exists(&self, cell: Location, direction: Direction) -> Result<bool, MazeError> {
        self.check_cell(cell)?;
        Ok(self.walled(cell, direction))
    }

    /// Marks the boundary of `cell` on the given side as walled
    ///
    /// Returns whether the wall is new; adding a known wall changes nothing
    pub fn add_wall(&mut self, cell: Location, direction: Direction) -> Result<bool, MazeError> {
        self.check_cell(cell)?;
        if self.walled(cell, direction) {
            return Ok(false);
        }
        // the perimeter is always walled, so both neighbors exist here
        let Location { row, column } = cell;
        match direction {
            Direction::North => self.south[row - 1][column] = true,
            Direction::East => self.east[row][column] = true,
            Direction::South => self.south[row][column] = true,
            Direction::West => self.east[row][column - 1] = true,
        }
        trace!("Added wall {direction:?} of ({row}, {column})");
        Ok(true)
    }

    /// The neighbor of `cell` in the given direction, if no wall is known between them
    pub fn open_neighbor(
        &self,
        cell: Location,
        direction: Direction,
    ) -> Result<Option<Location>, MazeError> {
        self.check_cell(cell)?;
        Ok(self.passage(cell, direction))
    }

    /// Vertical boundary `boundary` (`0..=COLUMNS`) in the given row
    pub fn vertical_wall(&self, row: usize, boundary: usize) -> Result<bool, MazeError> {
        if row >= ROWS || boundary > COLUMNS {
            return Err(MazeError::BoundaryOutOfBounds {
                orientation: BoundaryOrientation::Vertical,
                row,
                column: boundary,
            });
        }
        Ok(boundary == 0 || self.east[row][boundary - 1])
    }

    /// Horizontal boundary `boundary` (`0..=ROWS`) in the given column
    pub fn horizontal_wall(&self, boundary: usize, column: usize) -> Result<bool, MazeError> {
        if boundary > ROWS || column >= COLUMNS {
            return Err(MazeError::BoundaryOutOfBounds {
                orientation: BoundaryOrientation::Horizontal,
                row: boundary,
                column,
            });
        }
        Ok(boundary == 0 || self.south[boundary - 1][column])
    }

    /// Number of walled boundaries that are not on the perimeter
    pub fn interior_wall_count(&self) -> usize {
        let east = self
            .east
            .iter()
            .map(|row| row[..COLUMNS - 1].iter().filter(|w| **w).count())
            .sum::<usize>();
        let south = self.south[..ROWS - 1]
            .iter()
            .map(|row| row.iter().filter(|w| **w).count())
            .sum::<usize>();
        east + south
    }

    /// Same as [`Self::wall_exists`] for a cell already known to be in the maze
    pub(crate) fn walled(&self, cell: Location, direction: Direction) -> bool {
        let Location { row, column } = cell;
        match direction {
            Direction::North => row == 0 || self.south[row - 1][column],
            Direction::East => self.east[row][column],
            Direction::South => self.south[row][column],
            Direction::West => column == 0 || self.east[row][column - 1],
        }
    }

    /// Same as [`Self::open_neighbor`] for a cell already known to be in the maze
    pub(crate) fn passage(&self, cell: Location, direction: Direction) -> Option<Location> {
        if self.walled(cell, direction) {
            None
        } else {
            cell.step(direction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn all_cells<const R: usize, const C: usize>() -> impl Iterator<Item = Location> {
        (0..R).flat_map(|row| (0..C).map(move |column| Location::new(row, column)))
    }

    #[test]
    fn perimeter_is_walled() {
        let maze: Maze<3, 5> = Maze::new();
        for cell in all_cells::<3, 5>() {
            assert_eq!(maze.wall_exists(cell, Direction::North), Ok(cell.row == 0));
            assert_eq!(maze.wall_exists(cell, Direction::South), Ok(cell.row == 2));
            assert_eq!(maze.wall_exists(cell, Direction::West), Ok(cell.column == 0));
            assert_eq!(maze.wall_exists(cell, Direction::East), Ok(cell.column == 4));
        }
        assert_eq!(maze.interior_wall_count(), 0);
    }

    #[test]
    fn boundary_indexing() {
        let mut maze: Maze<2, 3> = Maze::new();
        for row in 0..2 {
            assert_eq!(maze.vertical_wall(row, 0), Ok(true));
            assert_eq!(maze.vertical_wall(row, 1), Ok(false));
            assert_eq!(maze.vertical_wall(row, 3), Ok(true));
        }
        for column in 0..3 {
            assert_eq!(maze.horizontal_wall(0, column), Ok(true));
            assert_eq!(maze.horizontal_wall(1, column), Ok(false));
            assert_eq!(maze.horizontal_wall(2, column), Ok(true));
        }

        maze.add_wall(Location::new(1, 1), Direction::East).unwrap();
        maze.add_wall(Location::new(1, 2), Direction::North).unwrap();
        assert_eq!(maze.vertical_wall(1, 2), Ok(true));
        assert_eq!(maze.horizontal_wall(1, 2), Ok(true));
        assert_eq!(maze.vertical_wall(0, 2), Ok(false));
    }

    #[test]
    fn shared_boundaries() {
        let mut maze: Maze<3, 3> = Maze::new();
        let center = Location::new(1, 1);
        for direction in Direction::ALL {
            maze.add_wall(center, direction).unwrap();
            let neighbor = center.step(direction).unwrap();
            assert_eq!(maze.wall_exists(neighbor, direction.opposite()), Ok(true));
        }
        assert_eq!(maze.interior_wall_count(), 4);
        assert_eq!(maze.open_neighbor(center, Direction::East), Ok(None));
        assert_eq!(
            maze.open_neighbor(Location::new(0, 0), Direction::East),
            Ok(Some(Location::new(0, 1)))
        );
    }

    #[test]
    fn add_wall_is_idempotent() {
        let mut maze: Maze<2, 2> = Maze::new();
        let cell = Location::new(0, 0);
        assert_eq!(maze.add_wall(cell, Direction::South), Ok(true));
        let once = maze.clone();
        assert_eq!(maze.add_wall(cell, Direction::South), Ok(false));
        assert_eq!(maze, once);

        // the perimeter is already there
        assert_eq!(maze.add_wall(cell, Direction::North), Ok(false));
        assert_eq!(maze, once);
    }

    #[test]
    fn walls_are_permanent() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut maze: Maze<5, 4> = Maze::new();
        let mut seen: Vec<(Location, Direction)> = vec![];

        for _ in 0..60 {
            let cell = Location::new(rng.gen_range(0..5), rng.gen_range(0..4));
            let direction = Direction::ALL[rng.gen_range(0..4)];
            maze.add_wall(cell, direction).unwrap();
            seen.push((cell, direction));

            for &(cell, direction) in &seen {
                assert_eq!(maze.wall_exists(cell, direction), Ok(true));
            }
            for cell in all_cells::<5, 4>() {
                if cell.row == 0 {
                    assert_eq!(maze.wall_exists(cell, Direction::North), Ok(true));
                }
                if cell.column == 3 {
                    assert_eq!(maze.wall_exists(cell, Direction::East), Ok(true));
                }
            }
        }
    }

    #[test]
    fn out_of_range() {
        let mut maze: Maze<2, 2> = Maze::new();
        let outside = Location::new(2, 0);
        let err = Err(MazeError::CellOutOfBounds { row: 2, column: 0 });
        assert_eq!(maze.wall_exists(outside, Direction::North), err);
        assert_eq!(maze.add_wall(outside, Direction::North), err);
        assert_eq!(
            maze.open_neighbor(Location::new(0, 9), Direction::West),
            Err(MazeError::CellOutOfBounds { row: 0, column: 9 })
        );
        assert_eq!(
            maze.vertical_wall(0, 3),
            Err(MazeError::BoundaryOutOfBounds {
                orientation: BoundaryOrientation::Vertical,
                row: 0,
                column: 3
            })
        );
        assert!(maze.horizontal_wall(3, 0).is_err());
        assert!(maze.horizontal_wall(0, 2).is_err());
    }
}
