use std::rc::Rc;

use super::decorator::{RetroDecorator, WindowDecorator};
use super::{Window, WindowHandle, WindowState};
use crate::canvas::{Canvas, ContentRenderer};
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::event::WmEvent;
use crate::geometry::{CellRect, Viewport};

/// Owns every window in back-to-front order.
///
/// The last window in the stack is topmost: it is drawn last and offered
/// events first. The stack also keeps the single-active-window invariant:
/// whichever window consumes an event becomes the only active one.
///
/// Reordering is a plain `Vec` remove + push, O(n) per promotion.
pub struct WindowStack {
    windows: Vec<Window>,
    decorator: Rc<dyn WindowDecorator>,
    next_window_seq: u64,
}

impl Default for WindowStack {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowStack {
    pub fn new() -> Self {
        Self::with_decorator(Rc::new(RetroDecorator::default()))
    }

    pub fn with_decorator(decorator: Rc<dyn WindowDecorator>) -> Self {
        Self {
            windows: Vec::new(),
            decorator,
            next_window_seq: 0,
        }
    }

    /// Open a new window on top of the stack. It starts Normal, visible and
    /// active; every other window is deactivated.
    pub fn create_window(
        &mut self,
        title: impl Into<String>,
        rect: CellRect,
        content: Option<Rc<dyn ContentRenderer>>,
    ) -> WindowHandle {
        let handle = WindowHandle::new(self.next_window_seq);
        self.next_window_seq = self.next_window_seq.saturating_add(1);
        let window = Window::new(handle, title.into(), rect, content);
        tracing::debug!(
            window = %handle,
            title = window.title(),
            rect = ?window.rect(),
            "opened window"
        );
        for other in &mut self.windows {
            other.set_active(false);
        }
        self.windows.push(window);
        handle
    }

    /// Open a default-sized window centered in `viewport`.
    pub fn create_centered(
        &mut self,
        title: impl Into<String>,
        viewport: Viewport,
        content: Option<Rc<dyn ContentRenderer>>,
    ) -> WindowHandle {
        let x = (viewport.width as i32 - DEFAULT_WINDOW_WIDTH as i32) / 2;
        let y = (viewport.height as i32 - DEFAULT_WINDOW_HEIGHT as i32) / 2;
        let rect = CellRect::new(x, y, DEFAULT_WINDOW_WIDTH, DEFAULT_WINDOW_HEIGHT);
        self.create_window(title, rect, content)
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    fn position(&self, handle: WindowHandle) -> Option<usize> {
        self.windows.iter().position(|w| w.handle() == handle)
    }

    pub fn window(&self, handle: WindowHandle) -> Option<&Window> {
        self.windows.iter().find(|w| w.handle() == handle)
    }

    pub fn window_mut(&mut self, handle: WindowHandle) -> Option<&mut Window> {
        self.windows.iter_mut().find(|w| w.handle() == handle)
    }

    /// Windows back-to-front.
    pub fn iter(&self) -> impl Iterator<Item = &Window> {
        self.windows.iter()
    }

    /// Handles back-to-front.
    pub fn z_order(&self) -> Vec<WindowHandle> {
        self.windows.iter().map(Window::handle).collect()
    }

    pub fn topmost(&self) -> Option<WindowHandle> {
        self.windows.last().map(Window::handle)
    }

    /// The active window, if it is still visible.
    pub fn active(&self) -> Option<WindowHandle> {
        self.windows
            .iter()
            .rev()
            .find(|w| w.is_active() && w.is_visible())
            .map(Window::handle)
    }

    pub fn has_visible_windows(&self) -> bool {
        self.windows.iter().any(Window::is_visible)
    }

    /// Offer `event` to windows topmost-first and reorder the stack, without
    /// drawing. Hosts that repaint every frame call this and `composite`
    /// separately.
    pub fn handle_event(&mut self, event: &WmEvent, viewport: Viewport) -> bool {
        for idx in (0..self.windows.len()).rev() {
            if self.windows[idx].handle_event(event, viewport) {
                self.promote(idx);
                return true;
            }
        }
        false
    }

    /// Route `event` to the topmost window that consumes it, promote that
    /// window and recomposite the whole stack onto `canvas`.
    ///
    /// Returns `false` when no window wants the event so the caller can
    /// apply its own global handling.
    pub fn route_event(&mut self, event: &WmEvent, canvas: &mut dyn Canvas) -> bool {
        let viewport = Viewport::from(canvas.grid_size());
        if !self.handle_event(event, viewport) {
            return false;
        }
        self.composite(canvas);
        true
    }

    /// Draw every visible window back-to-front.
    pub fn composite(&self, canvas: &mut dyn Canvas) {
        let viewport = Viewport::from(canvas.grid_size());
        for window in &self.windows {
            window.draw(canvas, self.decorator.as_ref(), viewport);
        }
    }

    /// Make `idx` the only active window and move it to the top.
    fn promote(&mut self, idx: usize) {
        for (i, window) in self.windows.iter_mut().enumerate() {
            window.set_active(i == idx);
        }
        self.raise(idx);
    }

    fn raise(&mut self, idx: usize) {
        if idx + 1 < self.windows.len() {
            let window = self.windows.remove(idx);
            tracing::debug!(window = %window.handle(), "raised to top");
            self.windows.push(window);
        }
    }

    /// Activate and raise a window. Returns `false` for unknown handles.
    pub fn activate(&mut self, handle: WindowHandle) -> bool {
        if self.position(handle).is_none() {
            return false;
        }
        for window in &mut self.windows {
            window.set_active(window.handle() == handle);
        }
        self.bring_to_front(handle);
        true
    }

    /// Raise a window without changing which window is active.
    pub fn bring_to_front(&mut self, handle: WindowHandle) {
        if let Some(idx) = self.position(handle) {
            self.raise(idx);
        }
    }

    /// Return a window to Normal, make it visible and activate it. This is
    /// how an application brings back a minimized or closed window.
    pub fn restore(&mut self, handle: WindowHandle) -> bool {
        let Some(window) = self.window_mut(handle) else {
            return false;
        };
        window.restore();
        window.set_visible(true);
        tracing::debug!(window = %handle, "restored");
        self.activate(handle)
    }

    /// Activate the next (or previous) visible window in stack order,
    /// starting from the current topmost. Returns the newly active handle.
    pub fn cycle_active(&mut self, forward: bool) -> Option<WindowHandle> {
        let visible: Vec<WindowHandle> = self
            .windows
            .iter()
            .filter(|w| w.is_visible())
            .map(Window::handle)
            .collect();
        if visible.is_empty() {
            return None;
        }
        // Forward raises the bottommost visible window. Backward undoes
        // that: the top goes to the bottom and the one below it takes over.
        let target = if forward || visible.len() == 1 {
            visible[0]
        } else {
            let top = visible[visible.len() - 1];
            if let Some(idx) = self.position(top) {
                let window = self.windows.remove(idx);
                self.windows.insert(0, window);
            }
            visible[visible.len() - 2]
        };
        self.activate(target);
        Some(target)
    }

    /// Drop a window from the stack for good.
    pub fn remove(&mut self, handle: WindowHandle) -> Option<Window> {
        let idx = self.position(handle)?;
        tracing::debug!(window = %handle, "removed window");
        Some(self.windows.remove(idx))
    }

    /// Remove every window that has been closed.
    pub fn remove_closed(&mut self) -> Vec<WindowHandle> {
        let closed: Vec<WindowHandle> = self
            .windows
            .iter()
            .filter(|w| !w.is_visible())
            .map(Window::handle)
            .collect();
        self.windows.retain(Window::is_visible);
        closed
    }

    /// Count of visible windows in each state, for status displays.
    pub fn state_counts(&self) -> (usize, usize, usize) {
        self.windows
            .iter()
            .filter(|w| w.is_visible())
            .fold((0, 0, 0), |(n, x, m), w| match w.state() {
                WindowState::Normal => (n + 1, x, m),
                WindowState::Maximized => (n, x + 1, m),
                WindowState::Minimized => (n, x, m + 1),
            })
    }
}
