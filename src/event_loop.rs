use std::time::Duration;

use crate::drivers::InputDriver;
use crate::error::Result;
use crate::event::WmEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlFlow {
    Continue,
    Quit,
}

/// Message pump for the desktop host.
///
/// Owns the input driver, polls it, converts raw terminal events into
/// [`WmEvent`]s and hands them to a handler closure one at a time. Each event
/// is fully handled before the next is read.
pub struct EventLoop<D> {
    driver: D,
    poll_interval: Duration,
}

impl<D: InputDriver> EventLoop<D> {
    pub fn new(driver: D, poll_interval: Duration) -> Self {
        Self {
            driver,
            poll_interval,
        }
    }

    fn read_event(&mut self) -> Option<WmEvent> {
        match self.driver.read() {
            Ok(raw) => WmEvent::from_crossterm(&raw),
            Err(err) => Some(WmEvent::Error(err.to_string())),
        }
    }

    /// Runs the loop on the current thread until the handler asks to quit.
    ///
    /// The handler is called with:
    /// - `None` once per tick before input is read, which is where the host
    ///   redraws;
    /// - `Some(event)` for every queued event. All pending input is drained
    ///   per tick so bursts of drag events don't fall behind the display.
    ///   Events with no window-manager meaning (focus, paste, key releases)
    ///   are skipped; driver failures arrive as [`WmEvent::Error`].
    pub fn run<F>(&mut self, mut handler: F) -> Result<()>
    where
        F: FnMut(&mut D, Option<WmEvent>) -> Result<ControlFlow>,
    {
        loop {
            if let ControlFlow::Quit = handler(&mut self.driver, None)? {
                return Ok(());
            }

            let mut timeout = self.poll_interval;
            loop {
                match self.driver.poll(timeout) {
                    Ok(true) => {}
                    Ok(false) => break,
                    Err(err) => {
                        let event = WmEvent::Error(err.to_string());
                        if let ControlFlow::Quit = handler(&mut self.driver, Some(event))? {
                            return Ok(());
                        }
                        break;
                    }
                }
                if let Some(event) = self.read_event()
                    && let ControlFlow::Quit = handler(&mut self.driver, Some(event))?
                {
                    return Ok(());
                }
                timeout = Duration::ZERO;
            }
        }
    }
}
