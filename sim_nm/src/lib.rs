//! A mouse driving through a maze that only exists in memory
//!
//! [`SimulatedMouse`] plays the part of the sensors and motors: it knows every wall of the
//! world maze, reports the ones beside and ahead of it, and moves one cell at a time.

use anyhow::Context;
use core_nm::constants::{NANO_MOUSE_COLUMNS, NANO_MOUSE_ROWS};
use core_nm::driving::{drive_to_target, MouseMotors, RunSummary, SensedWalls, WallSensor};
use core_nm::render::MazeView;
use core_nm::settings::MazeSettings;
use core_nm::{Maze, MazeController, Pose, Turn};
use log::{debug, warn};

/// The sensors and motors of a mouse inside a fully known maze
pub struct SimulatedMouse<const ROWS: usize, const COLUMNS: usize> {
    world: Maze<ROWS, COLUMNS>,
    pose: Pose,
    collisions: usize,
    trail: Vec<Pose>,
}

impl<const ROWS: usize, const COLUMNS: usize> SimulatedMouse<ROWS, COLUMNS> {
    pub fn new(world: Maze<ROWS, COLUMNS>, start: Pose) -> anyhow::Result<Self> {
        world
            .check_cell(start.location)
            .context("Start is outside the world maze")?;
        Ok(Self {
            world,
            pose: start,
            collisions: 0,
            trail: vec![start],
        })
    }

    pub fn world(&self) -> &Maze<ROWS, COLUMNS> {
        &self.world
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    /// Times the mouse was told to drive into a wall
    pub fn collisions(&self) -> usize {
        self.collisions
    }

    /// Every pose the mouse has been in, starting pose first
    pub fn trail(&self) -> &[Pose] {
        &self.trail
    }

    fn wall(&self, side: Turn) -> bool {
        let direction = side.apply(self.pose.heading);
        // the pose never leaves the world
        self.world.wall_exists(self.pose.location, direction) == Ok(true)
    }
}

impl<const ROWS: usize, const COLUMNS: usize> WallSensor for SimulatedMouse<ROWS, COLUMNS> {
    fn sense(&mut self) -> SensedWalls {
        SensedWalls {
            left: self.wall(Turn::Left),
            front: self.wall(Turn::Straight),
            right: self.wall(Turn::Right),
        }
    }
}

impl<const ROWS: usize, const COLUMNS: usize> MouseMotors for SimulatedMouse<ROWS, COLUMNS> {
    fn turn(&mut self, turn: Turn) {
        debug!("Turning {} degrees", turn.degrees());
        self.pose.heading = turn.apply(self.pose.heading);
    }

    fn forward(&mut self) -> bool {
        match self.world.open_neighbor(self.pose.location, self.pose.heading) {
            Ok(Some(next)) => {
                self.pose.location = next;
                self.trail.push(self.pose);
                debug!("Drove to ({}, {})", next.row, next.column);
                true
            }
            _ => {
                self.collisions += 1;
                warn!(
                    "Drove into the {:?} wall of ({}, {})",
                    self.pose.heading, self.pose.location.row, self.pose.location.column
                );
                false
            }
        }
    }
}

/// A controller and a simulated mouse in the NanoMouse sized maze
pub struct Simulation {
    pub controller: MazeController<NANO_MOUSE_ROWS, NANO_MOUSE_COLUMNS>,
    pub mouse: SimulatedMouse<NANO_MOUSE_ROWS, NANO_MOUSE_COLUMNS>,
    max_steps: usize,
}

impl Simulation {
    pub fn new(settings: &MazeSettings) -> anyhow::Result<Self> {
        let world = settings
            .standard_maze
            .build()
            .with_context(|| format!("Couldn't build {:?}", settings.standard_maze))?;
        Ok(Self {
            controller: MazeController::from_settings(settings)
                .context("Invalid start or target")?,
            mouse: SimulatedMouse::new(world, settings.start)?,
            max_steps: settings.max_steps,
        })
    }

    pub fn run(&mut self) -> anyhow::Result<RunSummary> {
        let summary = drive_to_target(&mut self.controller, &mut self.mouse, self.max_steps)?;
        Ok(summary)
    }

    /// What the mouse knows, with the last distances it computed
    pub fn known_view(&self) -> MazeView<'_, NANO_MOUSE_ROWS, NANO_MOUSE_COLUMNS> {
        self.controller.view()
    }

    /// The real maze with the mouse in it
    pub fn world_view(&self) -> MazeView<'_, NANO_MOUSE_ROWS, NANO_MOUSE_COLUMNS> {
        MazeView::new(self.mouse.world()).with_mouse(Some(self.mouse.pose()))
    }
}
