//! Navigation core for a maze solving mouse
//!
//! The mouse keeps a [`Maze`] of the walls it has seen, floods it from the target cell with
//! [`DistanceField::solve`], and picks its next heading with [`choose_heading`].
//! [`MazeController`] ties these together; sensors and motors stay outside this crate and are
//! reached through the traits in [`driving`].
//!
//! Without the `std` feature the crate is `no_std` and the queue solver is unavailable.

#![cfg_attr(not(feature = "std"), no_std)]

pub mod constants;
pub mod controller;
pub mod driving;
mod error;
pub mod flood_fill;
pub mod grid;
pub mod navigation;
pub mod render;
pub mod settings;

pub use controller::{Decision, MazeController};
pub use error::MazeError;
pub use flood_fill::{DistanceField, SolveStats, SolverKind};
pub use grid::{Direction, Location, Maze, Pose, Turn};
pub use navigation::choose_heading;
