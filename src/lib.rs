pub mod actions;
pub mod canvas;
pub mod config;
pub mod constants;
pub mod desktop;
pub mod drivers;
pub mod error;
pub mod event;
pub mod event_loop;
pub mod geometry;
pub mod keybindings;
pub mod runner;
pub mod state;
pub mod theme;
pub mod tracing_sub;
pub mod window;

pub use canvas::{Canvas, ContentRenderer};
pub use error::{Result, WmError};
pub use event::{Buttons, KeyInput, PointerEvent, WmEvent};
pub use geometry::{CellRect, Viewport};
pub use window::{Window, WindowHandle, WindowStack, WindowState};
