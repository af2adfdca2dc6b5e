//! See [`MazeController`], which runs one observe, solve, decide cycle at a time

use crate::driving::SensedWalls;
use crate::flood_fill::{DistanceField, SolverKind};
use crate::grid::{Direction, Location, Maze, Pose};
use crate::navigation::choose_heading;
use crate::render::MazeView;
use crate::settings::MazeSettings;
use crate::MazeError;
use log::{debug, info, warn};

/// What the mouse should do next
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// The mouse is on the target
    Arrived,
    /// Face this way, then drive one cell forwards
    Move(Direction),
}

/// Owns the known walls, the mouse's pose, and the target, and keeps the [`DistanceField`]
/// up to date with them
///
/// The controller never moves the mouse. The caller acts on each [`Decision`] and reports the
/// finished move with [`MazeController::complete_move`].
#[derive(Clone, Debug)]
pub struct MazeController<const ROWS: usize, const COLUMNS: usize> {
    maze: Maze<ROWS, COLUMNS>,
    pose: Pose,
    target: Location,
    solver: SolverKind,

    /// None whenever walls or the target changed since the last solve
    field: Option<DistanceField<ROWS, COLUMNS>>,
}

impl<const ROWS: usize, const COLUMNS: usize> MazeController<ROWS, COLUMNS> {
    /// A controller that knows nothing but the perimeter
    pub fn new(start: Pose, target: Location, solver: SolverKind) -> Result<Self, MazeError> {
        Self::with_maze(Maze::new(), start, target, solver)
    }

    /// A controller that starts out knowing the walls in `maze`
    pub fn with_maze(
        maze: Maze<ROWS, COLUMNS>,
        start: Pose,
        target: Location,
        solver: SolverKind,
    ) -> Result<Self, MazeError> {
        maze.check_cell(start.location)?;
        maze.check_cell(target)?;
        Ok(Self {
            maze,
            pose: start,
            target,
            solver,
            field: None,
        })
    }

    /// Builds a controller from settings, loading the standard maze's walls if asked to
    pub fn from_settings(settings: &MazeSettings) -> Result<Self, MazeError> {
        let maze = if settings.preload_walls {
            settings.standard_maze.build()?
        } else {
            Maze::new()
        };
        Self::with_maze(maze, settings.start, settings.target, settings.solver)
    }

    pub fn maze(&self) -> &Maze<ROWS, COLUMNS> {
        &self.maze
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn target(&self) -> Location {
        self.target
    }

    /// The field from the last solve, unless walls or the target changed since
    pub fn field(&self) -> Option<&DistanceField<ROWS, COLUMNS>> {
        self.field.as_ref()
    }

    pub fn needs_solve(&self) -> bool {
        self.field.is_none()
    }

    pub fn is_at_target(&self) -> bool {
        self.pose.location == self.target
    }

    pub fn set_target(&mut self, target: Location) -> Result<(), MazeError> {
        self.maze.check_cell(target)?;
        if target != self.target {
            info!("Target moved to ({}, {})", target.row, target.column);
            self.target = target;
            self.field = None;
        }
        Ok(())
    }

    /// Replaces the pose, for when the mouse is picked up and placed somewhere else
    pub fn set_pose(&mut self, pose: Pose) -> Result<(), MazeError> {
        self.maze.check_cell(pose.location)?;
        self.pose = pose;
        Ok(())
    }

    /// Records a wall; returns whether it was new
    pub fn add_wall(&mut self, cell: Location, direction: Direction) -> Result<bool, MazeError> {
        let added = self.maze.add_wall(cell, direction)?;
        if added {
            self.field = None;
        }
        Ok(added)
    }

    /// Records walls seen around the mouse's cell; returns how many were new
    pub fn observe<I>(&mut self, walls: I) -> Result<usize, MazeError>
    where
        I: IntoIterator<Item = Direction>,
    {
        let cell = self.pose.location;
        let mut added = 0;
        for direction in walls {
            if self.add_wall(cell, direction)? {
                added += 1;
            }
        }
        Ok(added)
    }

    /// Records what the side and front sensors see, relative to the current heading
    pub fn observe_sensed(&mut self, sensed: SensedWalls) -> Result<usize, MazeError> {
        self.observe(sensed.directions(self.pose.heading))
    }

    /// Solves if anything changed since the last solve
    pub fn solve(&mut self) -> Result<&DistanceField<ROWS, COLUMNS>, MazeError> {
        let field = self.take_solved()?;
        Ok(&*self.field.insert(field))
    }

    /// Decides the next move from what is currently known
    pub fn decide(&mut self) -> Result<Decision, MazeError> {
        if self.is_at_target() {
            return Ok(Decision::Arrived);
        }
        let field = self.take_solved()?;
        let heading = choose_heading(&self.pose, &field, &self.maze);
        self.field = Some(field);

        match heading {
            Ok(heading) => {
                debug!(
                    "At ({}, {}) facing {:?}, heading {:?}",
                    self.pose.location.row, self.pose.location.column, self.pose.heading, heading
                );
                Ok(Decision::Move(heading))
            }
            Err(e) => {
                warn!("{e}");
                Err(e)
            }
        }
    }

    fn take_solved(&mut self) -> Result<DistanceField<ROWS, COLUMNS>, MazeError> {
        match self.field.take() {
            Some(field) => Ok(field),
            None => DistanceField::solve(&self.maze, self.target, self.solver),
        }
    }

    /// One control cycle: record the walls sensed in this cell, then decide
    pub fn cycle(&mut self, sensed: SensedWalls) -> Result<Decision, MazeError> {
        self.observe_sensed(sensed)?;
        self.decide()
    }

    /// Called once the mouse has turned to `heading` and driven one cell
    ///
    /// Fails without changing the pose if a known wall or the edge of the maze is in the way
    pub fn complete_move(&mut self, heading: Direction) -> Result<Location, MazeError> {
        let from = self.pose.location;
        let next = self
            .maze
            .open_neighbor(from, heading)?
            .ok_or(MazeError::Blocked {
                row: from.row,
                column: from.column,
                direction: heading,
            })?;
        self.pose = Pose {
            location: next,
            heading,
        };
        if self.is_at_target() {
            info!("Arrived at target ({}, {})", next.row, next.column);
        }
        Ok(next)
    }

    /// Called when the mouse turned to `heading` but a wall stopped it from leaving its cell
    ///
    /// Records the wall and the new heading; returns whether the wall was new
    pub fn record_bump(&mut self, heading: Direction) -> Result<bool, MazeError> {
        let cell = self.pose.location;
        let added = self.add_wall(cell, heading)?;
        self.pose.heading = heading;
        info!(
            "Bumped into a wall {:?} of ({}, {})",
            heading, cell.row, cell.column
        );
        Ok(added)
    }

    /// Text drawing of the walls, distances, and mouse
    pub fn view(&self) -> MazeView<'_, ROWS, COLUMNS> {
        MazeView::new(&self.maze)
            .with_field(self.field.as_ref())
            .with_mouse(Some(self.pose))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{NANO_MOUSE_COLUMNS, NANO_MOUSE_ROWS, UNREACHABLE};
    use crate::grid::standard_maze::StandardMaze;

    type Controller = MazeController<NANO_MOUSE_ROWS, NANO_MOUSE_COLUMNS>;

    fn two_by_two(heading: Direction) -> MazeController<2, 2> {
        MazeController::new(
            Pose::new(0, 0, heading),
            Location::new(1, 1),
            SolverKind::Relaxation,
        )
        .unwrap()
    }

    #[test]
    fn open_two_by_two() {
        let mut controller = two_by_two(Direction::East);
        assert!(controller.needs_solve());
        assert_eq!(controller.decide(), Ok(Decision::Move(Direction::East)));
        assert!(!controller.needs_solve());
        assert_eq!(controller.field().unwrap().values(), &[[2, 1], [1, 0]]);
    }

    #[test]
    fn walls_invalidate_the_field() {
        let mut controller = two_by_two(Direction::East);
        controller.solve().unwrap();

        // already known
        assert_eq!(controller.observe([Direction::North, Direction::West]), Ok(0));
        assert!(!controller.needs_solve());

        assert_eq!(
            controller.observe_sensed(SensedWalls {
                left: true,
                front: true,
                right: false,
            }),
            Ok(1)
        );
        assert!(controller.needs_solve());
        assert_eq!(controller.decide(), Ok(Decision::Move(Direction::South)));
        assert_eq!(controller.field().unwrap().values(), &[[2, 1], [1, 0]]);
    }

    #[test]
    fn target_changes_invalidate_the_field() {
        let mut controller = two_by_two(Direction::East);
        controller.solve().unwrap();

        controller.set_target(Location::new(1, 1)).unwrap();
        assert!(!controller.needs_solve());

        controller.set_target(Location::new(0, 1)).unwrap();
        assert!(controller.needs_solve());
        assert_eq!(controller.solve().unwrap().values(), &[[1, 0], [2, 1]]);

        assert_eq!(
            controller.set_target(Location::new(3, 0)),
            Err(MazeError::CellOutOfBounds { row: 3, column: 0 })
        );
        assert_eq!(controller.target(), Location::new(0, 1));
    }

    #[test]
    fn unreachable_target_is_reported() {
        let mut controller = two_by_two(Direction::East);
        controller.add_wall(Location::new(0, 0), Direction::East).unwrap();
        controller.add_wall(Location::new(0, 0), Direction::South).unwrap();

        assert_eq!(controller.decide(), Err(MazeError::NoPath { row: 0, column: 0 }));
        // solved, but no path, which is different from not solved yet
        assert!(!controller.needs_solve());
        assert_eq!(
            controller.field().unwrap().value(Location::new(0, 0)),
            Ok(UNREACHABLE)
        );
    }

    #[test]
    fn moves_follow_known_walls() {
        let mut controller = two_by_two(Direction::East);
        controller.add_wall(Location::new(0, 0), Direction::East).unwrap();

        assert_eq!(
            controller.complete_move(Direction::East),
            Err(MazeError::Blocked {
                row: 0,
                column: 0,
                direction: Direction::East
            })
        );
        assert_eq!(
            controller.complete_move(Direction::North),
            Err(MazeError::Blocked {
                row: 0,
                column: 0,
                direction: Direction::North
            })
        );
        assert_eq!(controller.pose(), Pose::new(0, 0, Direction::East));

        assert_eq!(controller.complete_move(Direction::South), Ok(Location::new(1, 0)));
        assert_eq!(controller.pose(), Pose::new(1, 0, Direction::South));
    }

    #[test]
    fn bumps_record_the_wall() {
        let mut controller = two_by_two(Direction::North);
        controller.solve().unwrap();

        assert_eq!(controller.record_bump(Direction::South), Ok(true));
        assert_eq!(controller.pose(), Pose::new(0, 0, Direction::South));
        assert!(controller.needs_solve());
        assert_eq!(
            controller.maze().wall_exists(Location::new(1, 0), Direction::North),
            Ok(true)
        );
        assert_eq!(controller.decide(), Ok(Decision::Move(Direction::East)));

        // a perimeter wall is nothing new
        assert_eq!(controller.record_bump(Direction::West), Ok(false));
        assert_eq!(controller.pose(), Pose::new(0, 0, Direction::West));
    }

    #[test]
    fn arrival() {
        let mut controller = two_by_two(Direction::South);
        assert_eq!(controller.cycle(SensedWalls::default()), Ok(Decision::Move(Direction::South)));
        controller.complete_move(Direction::South).unwrap();
        assert_eq!(controller.cycle(SensedWalls::default()), Ok(Decision::Move(Direction::East)));
        controller.complete_move(Direction::East).unwrap();
        assert!(controller.is_at_target());
        assert_eq!(controller.decide(), Ok(Decision::Arrived));
    }

    #[test]
    fn from_settings() {
        let mut settings = MazeSettings::default();
        let controller = Controller::from_settings(&settings).unwrap();
        assert_eq!(controller.maze().interior_wall_count(), 0);
        assert_eq!(controller.pose(), StandardMaze::NanoMouse.default_start());

        settings.preload_walls = true;
        let mut controller = Controller::from_settings(&settings).unwrap();
        assert_eq!(controller.maze().interior_wall_count(), 12);
        assert_eq!(controller.decide(), Ok(Decision::Move(Direction::North)));

        settings.target = Location::new(4, 0);
        assert!(Controller::from_settings(&settings).is_err());
    }
}
