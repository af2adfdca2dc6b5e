use crate::flood_fill::SolverKind;
use crate::grid::standard_maze::StandardMaze;
use crate::grid::{Location, Pose};
use serde::{Deserialize, Serialize};

/// Options for one run through a maze
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MazeSettings {
    /// Which maze layout is in use
    pub standard_maze: StandardMaze,
    /// Start out knowing every wall of the layout instead of discovering them
    pub preload_walls: bool,
    /// Where the mouse starts
    pub start: Pose,
    /// Where the mouse is going
    pub target: Location,
    /// How distances are computed
    pub solver: SolverKind,
    /// Cells the mouse may drive before giving up
    pub max_steps: usize,
}

impl Default for MazeSettings {
    fn default() -> Self {
        Self::for_maze(StandardMaze::default())
    }
}

impl MazeSettings {
    /// The layout's own start and target, with everything else default
    pub fn for_maze(standard_maze: StandardMaze) -> Self {
        Self {
            standard_maze,
            preload_walls: false,
            start: standard_maze.default_start(),
            target: standard_maze.default_target(),
            solver: SolverKind::default(),
            max_steps: 500,
        }
    }
}
