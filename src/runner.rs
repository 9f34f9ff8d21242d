use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::Backend;

use crate::desktop::Desktop;
use crate::drivers::InputDriver;
use crate::error::{Result, WmError};
use crate::event_loop::{ControlFlow, EventLoop};
use crate::geometry::Viewport;

/// Drive `desktop` from `driver` until it asks to quit.
///
/// Every idle tick repaints the full desktop; ratatui diffs the frame so only
/// changed cells reach the terminal. Pointer events are routed against the
/// size of the most recent frame.
pub fn run_desktop<B, D>(
    terminal: &mut Terminal<B>,
    driver: D,
    desktop: &mut Desktop,
    poll_interval: Duration,
) -> Result<()>
where
    B: Backend,
    D: InputDriver,
    WmError: From<B::Error>,
{
    let size = terminal.size()?;
    let mut viewport = Viewport::new(size.width, size.height);
    let mut event_loop = EventLoop::new(driver, poll_interval);

    event_loop.run(|driver, event| {
        let flow = match event {
            None => {
                terminal.draw(|frame| {
                    let area = frame.area();
                    viewport = Viewport::new(area.width, area.height);
                    desktop.render(frame.buffer_mut());
                })?;
                ControlFlow::Continue
            }
            Some(event) => desktop.handle_event(&event, viewport)?,
        };
        if let Some(enabled) = desktop.take_mouse_capture_change() {
            driver.set_mouse_capture(enabled)?;
        }
        Ok(flow)
    })
}
