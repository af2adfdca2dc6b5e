use crate::constants::MAX_PATH_LENGTH;
use crate::grid::{BoundaryOrientation, Direction};

/// Everything that can go wrong while updating or querying the maze
#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MazeError {
    #[error("cell ({row}, {column}) is outside the maze")]
    CellOutOfBounds { row: usize, column: usize },
    #[error("{orientation:?} boundary ({row}, {column}) is outside the maze")]
    BoundaryOutOfBounds {
        orientation: BoundaryOrientation,
        row: usize,
        column: usize,
    },
    /// The mouse's cell is not connected to the target through known open boundaries
    #[error("no known path from ({row}, {column}) to the target")]
    NoPath { row: usize, column: usize },
    /// A completed move was reported through a wall the maze already knows about
    #[error("a wall blocks the move {direction:?} from ({row}, {column})")]
    Blocked {
        row: usize,
        column: usize,
        direction: Direction,
    },
    #[error("path does not fit in {} cells", MAX_PATH_LENGTH)]
    PathTooLong,
    #[error("unrecognized name")]
    UnrecognizedName,
}
