//! Picking the next heading from a solved [`DistanceField`]

use crate::constants::{MAX_PATH_LENGTH, UNREACHABLE};
use crate::flood_fill::DistanceField;
use crate::grid::{Direction, Location, Maze, Pose};
use crate::MazeError;

/// The heading the mouse should take next
///
/// Neighbors are considered clockwise starting with the current heading, skipping any behind a
/// known wall. The first one with the lowest distance wins, so the mouse keeps going straight
/// whenever that is as good as turning.
///
/// Fails with [`MazeError::NoPath`] if the mouse's cell is not connected to the target.
pub fn choose_heading<const ROWS: usize, const COLUMNS: usize>(
    pose: &Pose,
    field: &DistanceField<ROWS, COLUMNS>,
    maze: &Maze<ROWS, COLUMNS>,
) -> Result<Direction, MazeError> {
    maze.check_cell(pose.location)?;
    best_step(pose, field, maze)
        .map(|(direction, _)| direction)
        .ok_or(MazeError::NoPath {
            row: pose.location.row,
            column: pose.location.column,
        })
}

/// The cells the mouse would pass through following [`choose_heading`] from `start` until it
/// reaches the target, target included
///
/// `field` must have been solved on `maze` as it is now. A field solved before walls were
/// added can lead the path into a loop, which ends in [`MazeError::PathTooLong`].
pub fn plan_path<const ROWS: usize, const COLUMNS: usize>(
    start: Pose,
    field: &DistanceField<ROWS, COLUMNS>,
    maze: &Maze<ROWS, COLUMNS>,
) -> Result<heapless::Vec<Location, MAX_PATH_LENGTH>, MazeError> {
    maze.check_cell(start.location)?;

    let mut path = heapless::Vec::new();
    let mut pose = start;
    // on a field solved for this maze each step lowers the distance by one
    while field.at(pose.location) != 0 {
        let (heading, next) = best_step(&pose, field, maze).ok_or(MazeError::NoPath {
            row: pose.location.row,
            column: pose.location.column,
        })?;
        path.push(next).map_err(|_| MazeError::PathTooLong)?;
        pose = Pose {
            location: next,
            heading,
        };
    }
    Ok(path)
}

fn best_step<const ROWS: usize, const COLUMNS: usize>(
    pose: &Pose,
    field: &DistanceField<ROWS, COLUMNS>,
    maze: &Maze<ROWS, COLUMNS>,
) -> Option<(Direction, Location)> {
    if field.at(pose.location) == UNREACHABLE {
        return None;
    }

    let mut best: Option<(Direction, Location, u16)> = None;
    for direction in pose.heading.clockwise_from() {
        let Some(next) = maze.passage(pose.location, direction) else {
            continue;
        };
        let value = field.at(next);
        if value < best.map_or(UNREACHABLE, |(_, _, v)| v) {
            best = Some((direction, next, value));
        }
    }
    best.map(|(direction, next, _)| (direction, next))
}
