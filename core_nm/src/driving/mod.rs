//! The seams between the navigation core and the mouse's hardware
//!
//! Sensing and driving happen elsewhere; [`drive_to_target`] is the control loop that connects
//! them to a [`MazeController`].

use crate::controller::{Decision, MazeController};
use crate::grid::{Direction, Turn};
use crate::MazeError;
use log::info;
use serde::{Deserialize, Serialize};

/// Walls seen by the left, front, and right sensors in the mouse's current cell
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SensedWalls {
    pub left: bool,
    pub front: bool,
    pub right: bool,
}

impl SensedWalls {
    /// The walls seen, as absolute directions for a mouse facing `heading`
    pub fn directions(&self, heading: Direction) -> impl Iterator<Item = Direction> {
        [
            (self.left, Turn::Left),
            (self.front, Turn::Straight),
            (self.right, Turn::Right),
        ]
        .into_iter()
        .filter(|(seen, _)| *seen)
        .map(move |(_, side)| side.apply(heading))
    }
}

/// Functionality that mice with wall sensors must support
pub trait WallSensor {
    /// Look for walls around the mouse's current cell
    fn sense(&mut self) -> SensedWalls;
}

/// Functionality that mice with motors must support
///
/// Each call returns once the movement has finished
pub trait MouseMotors {
    /// Turn in place
    fn turn(&mut self, turn: Turn);

    /// Drive forwards exactly one cell
    ///
    /// Returns false if a wall stopped the mouse in the cell it started from
    fn forward(&mut self) -> bool;
}

/// What happened during [`drive_to_target`]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Cells driven
    pub steps: usize,
    /// Turns made, not counting going straight
    pub turns: usize,
    /// Forward moves stopped by a wall the mouse had not sensed
    pub bumps: usize,
    pub arrived: bool,
}

/// Runs sense, solve, decide, act cycles until the mouse reaches the target or has driven
/// `max_steps` cells
///
/// A forward move the motors could not finish records the wall in front of the mouse, and the
/// next cycle decides again from the same cell.
///
/// Fails with [`MazeError::NoPath`] once the known walls cut the mouse off from the target.
pub fn drive_to_target<M, const ROWS: usize, const COLUMNS: usize>(
    controller: &mut MazeController<ROWS, COLUMNS>,
    mouse: &mut M,
    max_steps: usize,
) -> Result<RunSummary, MazeError>
where
    M: WallSensor + MouseMotors,
{
    let mut summary = RunSummary::default();
    loop {
        let sensed = mouse.sense();
        match controller.cycle(sensed)? {
            Decision::Arrived => {
                info!(
                    "Reached target in {} steps with {} turns",
                    summary.steps, summary.turns
                );
                summary.arrived = true;
                return Ok(summary);
            }
            Decision::Move(heading) => {
                if summary.steps == max_steps {
                    info!("Gave up after {max_steps} steps");
                    return Ok(summary);
                }
                let turn = controller.pose().heading.turn_to(heading);
                if turn != Turn::Straight {
                    mouse.turn(turn);
                    summary.turns += 1;
                }
                if mouse.forward() {
                    controller.complete_move(heading)?;
                    summary.steps += 1;
                } else {
                    controller.record_bump(heading)?;
                    summary.bumps += 1;
                }
            }
        }
    }
}
