pub mod decorator;
pub mod gesture;

mod stack;

use std::fmt;
use std::rc::Rc;

use crate::canvas::{Canvas, ContentRenderer};
use crate::constants::{
    BOTTOM_RESERVED_ROWS, DEFAULT_MIN_HEIGHT, DEFAULT_MIN_WIDTH, MIN_FRAME_HEIGHT,
    MIN_FRAME_WIDTH, TOP_RESERVED_ROWS,
};
use crate::event::WmEvent;
use crate::geometry::{CellRect, Viewport};
use decorator::{Decoration, WindowDecorator};
use gesture::{ControlButton, Gesture, HitZone};

pub use stack::WindowStack;

/// Stable identifier handed out by `WindowStack::create_window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WindowHandle(u64);

impl WindowHandle {
    pub(crate) fn new(seq: u64) -> Self {
        Self(seq)
    }
}

impl fmt::Display for WindowHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WindowState {
    #[default]
    Normal,
    Maximized,
    Minimized,
}

pub struct Window {
    handle: WindowHandle,
    title: String,
    x: i32,
    y: i32,
    width: u16,
    height: u16,
    min_width: u16,
    min_height: u16,
    state: WindowState,
    visible: bool,
    active: bool,
    gesture: Gesture,
    content: Option<Rc<dyn ContentRenderer>>,
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("handle", &self.handle)
            .field("title", &self.title)
            .field("rect", &self.rect())
            .field("state", &self.state)
            .field("visible", &self.visible)
            .field("active", &self.active)
            .field("gesture", &self.gesture)
            .finish_non_exhaustive()
    }
}

impl Window {
    pub(crate) fn new(
        handle: WindowHandle,
        title: String,
        rect: CellRect,
        content: Option<Rc<dyn ContentRenderer>>,
    ) -> Self {
        Self {
            handle,
            title,
            x: rect.x,
            y: rect.y,
            width: rect.width.max(DEFAULT_MIN_WIDTH),
            height: rect.height.max(DEFAULT_MIN_HEIGHT),
            min_width: DEFAULT_MIN_WIDTH,
            min_height: DEFAULT_MIN_HEIGHT,
            state: WindowState::Normal,
            visible: true,
            active: true,
            gesture: Gesture::Idle,
            content,
        }
    }

    pub fn handle(&self) -> WindowHandle {
        self.handle
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Stored geometry. This is what a Normal window occupies and what a
    /// Maximized or Minimized window returns to.
    pub fn rect(&self) -> CellRect {
        CellRect::new(self.x, self.y, self.width, self.height)
    }

    pub fn min_size(&self) -> (u16, u16) {
        (self.min_width, self.min_height)
    }

    /// Change the size floor, growing the window if it is now too small.
    pub fn set_min_size(&mut self, min_width: u16, min_height: u16) {
        self.min_width = min_width;
        self.min_height = min_height;
        self.width = self.width.max(min_width);
        self.height = self.height.max(min_height);
    }

    pub fn state(&self) -> WindowState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// A window that loses activation also drops any gesture in progress;
    /// it would never see the release that ends it.
    pub(crate) fn set_active(&mut self, active: bool) {
        if !active {
            self.gesture = Gesture::Idle;
        }
        self.active = active;
    }

    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    pub fn is_resizing(&self) -> bool {
        self.gesture.is_resizing()
    }

    /// The rectangle the window occupies on screen in its current state.
    pub fn effective_rect(&self, viewport: Viewport) -> CellRect {
        match self.state {
            WindowState::Normal => self.rect(),
            WindowState::Maximized => CellRect::new(
                0,
                TOP_RESERVED_ROWS as i32,
                viewport.width,
                viewport
                    .height
                    .saturating_sub(TOP_RESERVED_ROWS + BOTTOM_RESERVED_ROWS),
            ),
            WindowState::Minimized => CellRect::new(self.x, self.y, self.width, 1),
        }
    }

    pub fn minimize(&mut self) {
        self.gesture = Gesture::Idle;
        self.state = WindowState::Minimized;
        tracing::debug!(window = %self.handle, "minimized");
    }

    /// Maximize a Normal window; return any other state to Normal.
    pub fn toggle_maximize(&mut self) {
        self.gesture = Gesture::Idle;
        self.state = match self.state {
            WindowState::Normal => WindowState::Maximized,
            WindowState::Maximized | WindowState::Minimized => WindowState::Normal,
        };
        tracing::debug!(window = %self.handle, state = ?self.state, "toggled maximize");
    }

    pub fn restore(&mut self) {
        self.gesture = Gesture::Idle;
        self.state = WindowState::Normal;
        tracing::debug!(window = %self.handle, "restored to normal");
    }

    /// Hide the window. Geometry and state are kept.
    pub fn close(&mut self) {
        self.gesture = Gesture::Idle;
        self.visible = false;
        tracing::debug!(window = %self.handle, "closed");
    }

    /// Offer a pointer event to this window. Returns whether it was consumed.
    pub fn handle_event(&mut self, event: &WmEvent, viewport: Viewport) -> bool {
        if !self.visible {
            return false;
        }
        let WmEvent::Pointer(pointer) = event else {
            return false;
        };
        let rect = self.effective_rect(viewport);
        let pressed = pointer.primary_held();
        let inside = rect.contains(pointer.x, pointer.y);

        if pressed && inside && !self.active {
            // Activation only; gestures start on a later event.
            self.active = true;
            tracing::debug!(window = %self.handle, "activated");
            return true;
        }
        if !self.active {
            return false;
        }

        if !pressed {
            if self.gesture.is_idle() {
                return false;
            }
            tracing::trace!(window = %self.handle, gesture = ?self.gesture, "gesture released");
            self.gesture = Gesture::Idle;
            return true;
        }

        let position = (pointer.x, pointer.y);
        match gesture::hit_test(rect, self.title.chars().count(), pointer.x, pointer.y) {
            HitZone::Control(button) => {
                self.press_control(button);
                return true;
            }
            HitZone::ResizeGrip
                if self.state == WindowState::Normal && self.gesture.is_idle() =>
            {
                self.gesture = Gesture::Resizing { last: position };
                return true;
            }
            HitZone::TitleBar if self.state == WindowState::Normal && self.gesture.is_idle() => {
                self.gesture = Gesture::Dragging { last: position };
                return true;
            }
            _ => {}
        }

        match self.gesture {
            Gesture::Dragging { last } => {
                self.x += pointer.x - last.0;
                self.y += pointer.y - last.1;
                self.gesture = Gesture::Dragging { last: position };
                tracing::trace!(window = %self.handle, x = self.x, y = self.y, "dragged");
                true
            }
            Gesture::Resizing { last } => {
                self.width = clamp_dimension(self.width, pointer.x - last.0, self.min_width);
                self.height = clamp_dimension(self.height, pointer.y - last.1, self.min_height);
                self.gesture = Gesture::Resizing { last: position };
                tracing::trace!(
                    window = %self.handle,
                    width = self.width,
                    height = self.height,
                    "resized"
                );
                true
            }
            Gesture::Idle => inside,
        }
    }

    fn press_control(&mut self, button: ControlButton) {
        match button {
            ControlButton::Minimize => self.minimize(),
            ControlButton::Maximize => self.toggle_maximize(),
            ControlButton::Close => self.close(),
        }
    }

    /// Draw frame and content. Invisible or undersized windows draw nothing;
    /// a minimized window is only a one-row strip without a frame.
    pub fn draw(
        &self,
        canvas: &mut dyn Canvas,
        decorator: &dyn WindowDecorator,
        viewport: Viewport,
    ) {
        if !self.visible {
            return;
        }
        let rect = self.effective_rect(viewport);
        let decoration = Decoration {
            title: &self.title,
            active: self.active,
            state: self.state,
        };
        if self.state == WindowState::Minimized {
            decorator.render_collapsed(canvas, rect);
            return;
        }
        if rect.width < MIN_FRAME_WIDTH || rect.height < MIN_FRAME_HEIGHT {
            return;
        }
        decorator.render_frame(canvas, rect, decoration);
        if let (Some(content), Some(interior)) = (&self.content, rect.interior()) {
            content.paint(canvas, interior);
        }
    }
}

fn clamp_dimension(current: u16, delta: i32, floor: u16) -> u16 {
    (current as i32 + delta).clamp(floor as i32, u16::MAX as i32) as u16
}
