//! Fixed width text drawing of a maze for debugging output
//!
//! The layout is meant for people and snapshot tests, not for parsing. Each cell is three
//! characters wide with a one character boundary column between cells:
//!
//! ```text
//!  --- ---
//! | 2   1 |
//!
//! | >   0 |
//!  --- ---
//! ```

use crate::constants::UNREACHABLE;
use crate::flood_fill::DistanceField;
use crate::grid::{Location, Maze, Pose};
use core::fmt::{Display, Formatter, Write};

/// Borrowed view of a maze, optionally with distances and the mouse, that implements
/// [`Display`]
pub struct MazeView<'a, const ROWS: usize, const COLUMNS: usize> {
    maze: &'a Maze<ROWS, COLUMNS>,
    field: Option<&'a DistanceField<ROWS, COLUMNS>>,
    mouse: Option<Pose>,
}

impl<'a, const ROWS: usize, const COLUMNS: usize> MazeView<'a, ROWS, COLUMNS> {
    pub fn new(maze: &'a Maze<ROWS, COLUMNS>) -> Self {
        Self {
            maze,
            field: None,
            mouse: None,
        }
    }

    /// Show distances from this field; cells show " ? " without one
    pub fn with_field(mut self, field: Option<&'a DistanceField<ROWS, COLUMNS>>) -> Self {
        self.field = field;
        self
    }

    /// Draw the mouse's heading in its cell instead of the distance
    pub fn with_mouse(mut self, mouse: Option<Pose>) -> Self {
        self.mouse = mouse;
        self
    }

    fn write_cell(&self, f: &mut Formatter<'_>, cell: Location) -> core::fmt::Result {
        if let Some(mouse) = self.mouse.filter(|m| m.location == cell) {
            return write!(f, " {} ", mouse.heading.glyph());
        }
        match self.field.map(|field| field.at(cell)) {
            None | Some(UNREACHABLE) => f.write_str(" ? "),
            Some(value @ 0..=9) => write!(f, " {value} "),
            Some(value @ 10..=99) => write!(f, " {value}"),
            Some(value @ 100..=999) => write!(f, "{value}"),
            Some(_) => f.write_str("+++"),
        }
    }
}

impl<const ROWS: usize, const COLUMNS: usize> Display for MazeView<'_, ROWS, COLUMNS> {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for boundary in 0..=ROWS {
            for column in 0..COLUMNS {
                let walled = self
                    .maze
                    .horizontal_wall(boundary, column)
                    .map_err(|_| core::fmt::Error)?;
                f.write_str(if walled { " ---" } else { "    " })?;
            }
            f.write_char('\n')?;

            if boundary == ROWS {
                break;
            }
            let row = boundary;
            for column in 0..=COLUMNS {
                let walled = self
                    .maze
                    .vertical_wall(row, column)
                    .map_err(|_| core::fmt::Error)?;
                f.write_char(if walled { '|' } else { ' ' })?;
                if column < COLUMNS {
                    self.write_cell(f, Location::new(row, column))?;
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{NANO_MOUSE_COLUMNS, NANO_MOUSE_ROWS};
    use crate::flood_fill::SolverKind;
    use crate::grid::standard_maze::StandardMaze;
    use crate::grid::Direction;

    #[test]
    fn two_by_two_with_mouse() {
        let maze: Maze<2, 2> = Maze::new();
        let field =
            DistanceField::solve(&maze, Location::new(1, 1), SolverKind::Relaxation).unwrap();
        let view = MazeView::new(&maze)
            .with_field(Some(&field))
            .with_mouse(Some(Pose::new(1, 0, Direction::East)));

        let expected = concat!(
            " --- ---\n",
            "| 2   1 |\n",
            "        \n",
            "| >   0 |\n",
            " --- ---\n",
        );
        assert_eq!(view.to_string(), expected);
    }

    #[test]
    fn unsolved_cells() {
        let mut maze: Maze<1, 3> = Maze::new();
        maze.add_wall(Location::new(0, 1), Direction::East).unwrap();
        let view = MazeView::new(&maze);

        let expected = concat!(
            " --- --- ---\n",
            "| ?   ? | ? |\n",
            " --- --- ---\n",
        );
        assert_eq!(view.to_string(), expected);

        let field =
            DistanceField::solve(&maze, Location::new(0, 0), SolverKind::Relaxation).unwrap();
        let view = view.with_field(Some(&field));
        assert_eq!(view.to_string().lines().nth(1), Some("| 0   1 | ? |"));
    }

    #[test]
    fn wide_values() {
        let maze: Maze<1, 120> = Maze::new();
        let field =
            DistanceField::solve(&maze, Location::new(0, 0), SolverKind::Relaxation).unwrap();
        let text = MazeView::new(&maze).with_field(Some(&field)).to_string();
        let cells = text.lines().nth(1).unwrap();
        assert!(cells.starts_with("| 0   1   2 "));
        assert!(cells.contains(" 42 "));
        assert!(cells.ends_with(" 118 119|"));
        assert_eq!(cells.len(), 120 * 4 + 1);
    }

    #[test]
    fn nano_mouse_course() {
        let standard = StandardMaze::NanoMouse;
        let maze = standard
            .build::<NANO_MOUSE_ROWS, NANO_MOUSE_COLUMNS>()
            .unwrap();
        let field =
            DistanceField::solve(&maze, standard.default_target(), SolverKind::Relaxation)
                .unwrap();
        let view = MazeView::new(&maze)
            .with_field(Some(&field))
            .with_mouse(Some(standard.default_start()));

        let expected = concat!(
            " --- --- --- --- --- ---\n",
            "| 7   6   7   6   5   4 |\n",
            "         --- --- ---    \n",
            "| 6 | 5 | 0   1   2   3 |\n",
            "             ---        \n",
            "| 5   4 | 1 | 4 | 3 | 4 |\n",
            "                 ---    \n",
            "| ^ | 3   2   3   4   5 |\n",
            " --- --- --- --- --- ---\n",
        );
        assert_eq!(view.to_string(), expected);
    }
}
