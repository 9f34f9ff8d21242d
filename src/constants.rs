//! Shared crate-wide constants.

/// Width in columns of each title-bar control button run, e.g. `══[ * ]`.
pub const CONTROL_BUTTON_WIDTH: i32 = 7;

/// Number of control buttons (minimize, maximize/restore, close).
pub const CONTROL_BUTTON_COUNT: i32 = 3;

/// Column offset of the title text from the window's left edge.
pub const TITLE_OFFSET: i32 = 2;

/// Extra columns around the title text that still count as the drag handle.
///
/// Covers the `[ ` and ` ]` brackets drawn around the title.
pub const TITLE_PADDING: i32 = 4;

/// Smallest outer width for which a window frame is drawn.
pub const MIN_FRAME_WIDTH: u16 = 10;

/// Smallest outer height for which a window frame is drawn.
pub const MIN_FRAME_HEIGHT: u16 = 3;

/// Default minimum width a window can be resized down to.
pub const DEFAULT_MIN_WIDTH: u16 = 20;

/// Default minimum height a window can be resized down to.
pub const DEFAULT_MIN_HEIGHT: u16 = 5;

/// Rows reserved at the top of the screen (menu bar) for maximized windows.
pub const TOP_RESERVED_ROWS: u16 = 1;

/// Rows reserved at the bottom of the screen (status bar) for maximized windows.
pub const BOTTOM_RESERVED_ROWS: u16 = 1;

/// Size used by `WindowStack::create_centered`.
pub const DEFAULT_WINDOW_WIDTH: u16 = 50;
pub const DEFAULT_WINDOW_HEIGHT: u16 = 15;
