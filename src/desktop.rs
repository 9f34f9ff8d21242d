//! Demo desktop: a window stack framed by a menu bar and a status bar.

use std::rc::Rc;

use indoc::indoc;
use ratatui::buffer::Buffer;
use ratatui::style::{Modifier, Style};

use crate::actions::Action;
use crate::canvas::{Canvas, ContentRenderer};
use crate::constants::{DEFAULT_WINDOW_HEIGHT, DEFAULT_WINDOW_WIDTH};
use crate::error::{Result, WmError};
use crate::event::WmEvent;
use crate::event_loop::ControlFlow;
use crate::geometry::{CellRect, Viewport};
use crate::keybindings::KeyBindings;
use crate::state::DesktopState;
use crate::theme;
use crate::window::{WindowHandle, WindowStack, WindowState};

const HELP_TEXT: &str = indoc! {"
    Drag the [ title ] to move.
    Drag the corner grip to resize.
    [ - ] minimize  [ + ] maximize
    [ * ] close
    Tab cycles windows, r restores.
"};

/// How far each additional startup window is shifted from the previous one.
const CASCADE_STEP: (i32, i32) = (4, 2);
const CASCADE_SLOTS: i32 = 6;

pub struct Desktop {
    stack: WindowStack,
    state: DesktopState,
    bindings: KeyBindings,
}

impl Desktop {
    pub fn new(mouse_capture: bool) -> Self {
        Self::with_parts(WindowStack::new(), KeyBindings::default(), mouse_capture)
    }

    pub fn with_parts(stack: WindowStack, bindings: KeyBindings, mouse_capture: bool) -> Self {
        Self {
            stack,
            state: DesktopState::new(mouse_capture),
            bindings,
        }
    }

    pub fn stack(&self) -> &WindowStack {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut WindowStack {
        &mut self.stack
    }

    pub fn state(&self) -> &DesktopState {
        &self.state
    }

    pub fn take_mouse_capture_change(&mut self) -> Option<bool> {
        self.state.take_mouse_capture_change()
    }

    /// Open `count` windows cascading down from the center of `viewport`.
    pub fn open_cascade(&mut self, count: usize, viewport: Viewport) -> Vec<WindowHandle> {
        let base_x = (viewport.width as i32 - DEFAULT_WINDOW_WIDTH as i32) / 2;
        let base_y = (viewport.height as i32 - DEFAULT_WINDOW_HEIGHT as i32) / 2;
        let span = (count as i32 - 1).clamp(0, CASCADE_SLOTS - 1);
        (0..count as i32)
            .map(|i| {
                let slot = i % CASCADE_SLOTS - span / 2;
                let rect = CellRect::new(
                    base_x + slot * CASCADE_STEP.0,
                    base_y + slot * CASCADE_STEP.1,
                    DEFAULT_WINDOW_WIDTH,
                    DEFAULT_WINDOW_HEIGHT,
                );
                let (title, content) = self.next_window_parts();
                self.stack.create_window(title, rect, Some(content))
            })
            .collect()
    }

    /// Open a default-sized window in the middle of the screen.
    pub fn open_window(&mut self, viewport: Viewport) -> WindowHandle {
        let (title, content) = self.next_window_parts();
        self.stack.create_centered(title, viewport, Some(content))
    }

    fn next_window_parts(&mut self) -> (String, Rc<dyn ContentRenderer>) {
        let number = self.state.next_window_number();
        let content: Rc<dyn ContentRenderer> = Rc::new(help_content);
        (format!("Window {number}"), content)
    }

    /// Route one input event: windows get pointer events first, keys go to the
    /// global bindings. An input-source failure ends the session.
    pub fn handle_event(&mut self, event: &WmEvent, viewport: Viewport) -> Result<ControlFlow> {
        match event {
            WmEvent::Error(msg) => Err(WmError::EventSource(msg.clone())),
            WmEvent::Pointer(_) => {
                if self.stack.handle_event(event, viewport) {
                    for handle in self.stack.remove_closed() {
                        tracing::debug!(window = %handle, "pruned closed window");
                    }
                }
                Ok(ControlFlow::Continue)
            }
            WmEvent::Key(key) => {
                if self.stack.handle_event(event, viewport) {
                    return Ok(ControlFlow::Continue);
                }
                match self.bindings.action_for(key) {
                    Some(action) => Ok(self.apply(action, viewport)),
                    None => Ok(ControlFlow::Continue),
                }
            }
        }
    }

    pub fn apply(&mut self, action: Action, viewport: Viewport) -> ControlFlow {
        tracing::debug!(%action, "desktop action");
        match action {
            Action::Quit => return ControlFlow::Quit,
            Action::NewWindow => {
                self.open_window(viewport);
            }
            Action::CycleNextWindow => {
                self.stack.cycle_active(true);
            }
            Action::CyclePrevWindow => {
                self.stack.cycle_active(false);
            }
            Action::ToggleMouseCapture => self.state.toggle_mouse_capture(),
            Action::RestoreAll => {
                let displaced: Vec<WindowHandle> = self
                    .stack
                    .iter()
                    .filter(|w| w.is_visible() && w.state() != WindowState::Normal)
                    .map(|w| w.handle())
                    .collect();
                for handle in displaced {
                    self.stack.restore(handle);
                }
            }
        }
        ControlFlow::Continue
    }

    /// Paint the whole desktop into `buf`.
    pub fn render(&self, buf: &mut Buffer) {
        let area = CellRect::from(buf.area);
        if area.is_empty() {
            return;
        }
        let background = Style::default().bg(theme::desktop_bg());
        buf.fill_rect(area, ' ', background);
        self.stack.composite(buf);
        self.render_menu_bar(buf, CellRect::new(area.x, area.y, area.width, 1));
        if area.height > 1 {
            let row = CellRect::new(area.x, area.bottom() - 1, area.width, 1);
            self.render_status_bar(buf, row);
        }
    }

    fn render_menu_bar(&self, canvas: &mut dyn Canvas, bar_rect: CellRect) {
        let bar = Style::default()
            .fg(theme::menu_bar_fg())
            .bg(theme::menu_bar_bg());
        let hotkey = bar.fg(theme::menu_hotkey_fg()).add_modifier(Modifier::BOLD);
        canvas.fill_rect(bar_rect, ' ', bar);
        let y = bar_rect.y;
        let brand = bar.add_modifier(Modifier::BOLD);
        let mut x = canvas.print(bar_rect.x + 1, y, "retro-wm", brand) + 2;
        for action in Action::ALL {
            let Some(combo) = self.bindings.primary(action) else {
                continue;
            };
            x = canvas.print(x, y, &combo.display(), hotkey);
            x = canvas.print(x + 1, y, &action.to_string(), bar) + 2;
        }
    }

    fn render_status_bar(&self, canvas: &mut dyn Canvas, bar_rect: CellRect) {
        let bar = Style::default()
            .fg(theme::status_bar_fg())
            .bg(theme::status_bar_bg());
        canvas.fill_rect(bar_rect, ' ', bar);
        canvas.print(bar_rect.x + 1, bar_rect.y, &self.status_line(), bar);
    }

    pub fn status_line(&self) -> String {
        let (normal, maximized, minimized) = self.stack.state_counts();
        let active = self
            .stack
            .active()
            .and_then(|handle| self.stack.window(handle))
            .map(|w| w.title().to_string())
            .unwrap_or_else(|| "none".to_string());
        let mouse = if self.state.mouse_capture_enabled() {
            "on"
        } else {
            "off"
        };
        format!(
            "active: {active} | normal {normal} | maximized {maximized} | \
             minimized {minimized} | mouse {mouse}"
        )
    }
}

fn help_content(canvas: &mut dyn Canvas, interior: CellRect) {
    let style = Style::default();
    let width = interior.width as usize;
    for (row, line) in HELP_TEXT.lines().enumerate().take(interior.height as usize) {
        let clipped: String = line.chars().take(width.saturating_sub(1)).collect();
        canvas.print(interior.x + 1, interior.y + row as i32, &clipped, style);
    }
}
