//! Wavefront solve from the target cell over the known walls
//!
//! Every cell gets the number of boundary crossings between it and the target, or
//! [`UNREACHABLE`] if the known walls separate them. The field is rebuilt from nothing on every
//! solve.

use crate::constants::UNREACHABLE;
use crate::grid::{Direction, Location, Maze};
use crate::MazeError;
use core::str::FromStr;
use log::debug;
use serde::{Deserialize, Serialize};
#[cfg(feature = "std")]
use std::collections::VecDeque;

/// How [`DistanceField::solve`] walks the maze; both produce the same distances
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolverKind {
    /// Sweep the whole grid, growing the wavefront by one ring per sweep, until a sweep
    /// changes nothing
    #[default]
    Relaxation,
    /// Breadth first search with a queue
    #[cfg(feature = "std")]
    Queue,
}

impl FromStr for SolverKind {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("relaxation") {
            Ok(Self::Relaxation)
        } else {
            #[cfg(feature = "std")]
            if s.eq_ignore_ascii_case("queue") {
                return Ok(Self::Queue);
            }
            Err(MazeError::UnrecognizedName)
        }
    }
}

/// Work done by one solve
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveStats {
    /// Full grid sweeps, including the last one that found nothing new; zero for
    /// [`SolverKind::Queue`]
    pub passes: usize,
    /// Cells connected to the target, the target included
    pub reachable: usize,
}

/// Hop counts from every cell to one target
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DistanceField<const ROWS: usize, const COLUMNS: usize> {
    target: Location,
    values: [[u16; COLUMNS]; ROWS],
    stats: SolveStats,
}

impl<const ROWS: usize, const COLUMNS: usize> DistanceField<ROWS, COLUMNS> {
    /// Floods `maze` outwards from `target`
    pub fn solve(
        maze: &Maze<ROWS, COLUMNS>,
        target: Location,
        kind: SolverKind,
    ) -> Result<Self, MazeError> {
        maze.check_cell(target)?;

        let mut field = Self {
            target,
            values: [[UNREACHABLE; COLUMNS]; ROWS],
            stats: SolveStats::default(),
        };
        field.values[target.row][target.column] = 0;

        match kind {
            SolverKind::Relaxation => field.relax(maze),
            #[cfg(feature = "std")]
            SolverKind::Queue => field.breadth_first(maze),
        }

        field.stats.reachable = field
            .values
            .iter()
            .flatten()
            .filter(|v| **v != UNREACHABLE)
            .count();
        debug!(
            "Solved for ({}, {}) with {:?}: {} passes, {} of {} cells reachable",
            target.row,
            target.column,
            kind,
            field.stats.passes,
            field.stats.reachable,
            ROWS * COLUMNS
        );

        Ok(field)
    }

    /// Each pass extends every cell on the current wavefront into its open, unvisited
    /// neighbors. Cells finalized during a pass wait for the next pass, so pass `n` settles
    /// exactly the cells at distance `n`.
    fn relax(&mut self, maze: &Maze<ROWS, COLUMNS>) {
        let mut wavefront = 0;
        loop {
            self.stats.passes += 1;
            let mut changed = false;
            for row in 0..ROWS {
                for column in 0..COLUMNS {
                    if self.values[row][column] != wavefront {
                        continue;
                    }
                    let cell = Location::new(row, column);
                    for direction in Direction::ALL {
                        if let Some(next) = maze.passage(cell, direction) {
                            if self.values[next.row][next.column] == UNREACHABLE {
                                self.values[next.row][next.column] = wavefront + 1;
                                changed = true;
                            }
                        }
                    }
                }
            }
            if !changed {
                break;
            }
            wavefront += 1;
        }
    }

    #[cfg(feature = "std")]
    fn breadth_first(&mut self, maze: &Maze<ROWS, COLUMNS>) {
        let mut queue = VecDeque::from([self.target]);
        while let Some(cell) = queue.pop_front() {
            let next_value = self.at(cell) + 1;
            for direction in Direction::ALL {
                if let Some(next) = maze.passage(cell, direction) {
                    if self.values[next.row][next.column] == UNREACHABLE {
                        self.values[next.row][next.column] = next_value;
                        queue.push_back(next);
                    }
                }
            }
        }
    }

    pub fn target(&self) -> Location {
        self.target
    }

    pub fn stats(&self) -> SolveStats {
        self.stats
    }

    /// The raw distances, indexed `[row][column]`, with [`UNREACHABLE`] for separated cells
    pub fn values(&self) -> &[[u16; COLUMNS]; ROWS] {
        &self.values
    }

    /// The raw distance at `cell`, [`UNREACHABLE`] if it is separated from the target
    pub fn value(&self, cell: Location) -> Result<u16, MazeError> {
        self.check_cell(cell)?;
        Ok(self.at(cell))
    }

    /// The distance at `cell`, or None if it is separated from the target
    pub fn distance(&self, cell: Location) -> Result<Option<u16>, MazeError> {
        Ok(Some(self.value(cell)?).filter(|v| *v != UNREACHABLE))
    }

    pub fn is_reachable(&self, cell: Location) -> Result<bool, MazeError> {
        Ok(self.distance(cell)?.is_some())
    }

    /// Same as [`Self::value`] for a cell already known to be in the maze
    pub(crate) fn at(&self, cell: Location) -> u16 {
        self.values[cell.row][cell.column]
    }

    fn check_cell(&self, cell: Location) -> Result<(), MazeError> {
        if cell.row < ROWS && cell.column < COLUMNS {
            Ok(())
        } else {
            Err(MazeError::CellOutOfBounds {
                row: cell.row,
                column: cell.column,
            })
        }
    }
}
