/// Distance stored for cells that are not connected to the target by known open boundaries
pub const UNREACHABLE: u16 = u16::MAX;

/// The longest path [`crate::navigation::plan_path`] will produce
pub const MAX_PATH_LENGTH: usize = 256;

/// Rows in the maze the NanoMouse course was built on
pub const NANO_MOUSE_ROWS: usize = 4;
/// Columns in the maze the NanoMouse course was built on
pub const NANO_MOUSE_COLUMNS: usize = 6;
