use ratatui::style::Style;

use super::WindowState;
use super::gesture::{ControlButton, control_button_range};
use crate::canvas::Canvas;
use crate::constants::{CONTROL_BUTTON_COUNT, CONTROL_BUTTON_WIDTH, TITLE_OFFSET};
use crate::geometry::CellRect;
use crate::theme::WindowTheme;

/// What a decorator needs to know about the window it is framing.
#[derive(Debug, Clone, Copy)]
pub struct Decoration<'a> {
    pub title: &'a str,
    pub active: bool,
    pub state: WindowState,
}

pub trait WindowDecorator: std::fmt::Debug {
    /// Draw the full frame and clear the interior. `rect` is the effective
    /// outer rectangle and is at least the minimum frame size.
    fn render_frame(&self, canvas: &mut dyn Canvas, rect: CellRect, decoration: Decoration<'_>);

    /// Fill the one-row strip a minimized window occupies. No frame is drawn.
    fn render_collapsed(&self, canvas: &mut dyn Canvas, rect: CellRect);
}

/// Double-line frame with a bracketed title and `[ - ]`, `[ + ]`, `[ * ]`
/// controls in the top-right corner.
#[derive(Debug, Default)]
pub struct RetroDecorator {
    theme: WindowTheme,
}

impl RetroDecorator {
    pub fn new(theme: WindowTheme) -> Self {
        Self { theme }
    }

    fn render_top_row(&self, canvas: &mut dyn Canvas, rect: CellRect, decoration: Decoration<'_>) {
        let border = self.theme.border(decoration.active);
        let right = rect.right() - 1;
        canvas.set_cell(rect.x, rect.y, '╔', border);
        for x in rect.x + 1..right {
            canvas.set_cell(x, rect.y, '═', border);
        }
        canvas.set_cell(right, rect.y, '╗', border);

        let buttons_start = rect.right() - CONTROL_BUTTON_COUNT * CONTROL_BUTTON_WIDTH;
        self.render_title(canvas, rect, buttons_start, decoration);
        self.render_controls(canvas, rect, border, decoration.state);
    }

    fn render_title(
        &self,
        canvas: &mut dyn Canvas,
        rect: CellRect,
        buttons_start: i32,
        decoration: Decoration<'_>,
    ) {
        let start = rect.x + TITLE_OFFSET;
        // "[ " + title + " ]" must end before the control buttons.
        let available = (buttons_start - start - 4).max(0) as usize;
        if available == 0 {
            return;
        }
        let title: String = decoration.title.chars().take(available).collect();
        let label = format!("[ {title} ]");
        canvas.print(start, rect.y, &label, self.theme.title(decoration.active));
    }

    fn render_controls(
        &self,
        canvas: &mut dyn Canvas,
        rect: CellRect,
        border: Style,
        state: WindowState,
    ) {
        let control = self.theme.control();
        for button in [
            ControlButton::Minimize,
            ControlButton::Maximize,
            ControlButton::Close,
        ] {
            let (start, _) = control_button_range(rect, button);
            let glyph = match (button, state) {
                (ControlButton::Minimize, _) => '-',
                (ControlButton::Maximize, WindowState::Normal) => '+',
                (ControlButton::Maximize, _) => '=',
                (ControlButton::Close, _) => '*',
            };
            // ═[ g ]═ with the last cell left to the frame corner.
            let cells = [
                ('═', border),
                ('[', border),
                (' ', border),
                (glyph, control),
                (' ', border),
                (']', border),
            ];
            for (offset, (ch, style)) in cells.into_iter().enumerate() {
                let x = start + offset as i32;
                // Keep the corners intact on narrow windows.
                if x > rect.x && x < rect.right() - 1 {
                    canvas.set_cell(x, rect.y, ch, style);
                }
            }
        }
    }
}

impl WindowDecorator for RetroDecorator {
    fn render_frame(&self, canvas: &mut dyn Canvas, rect: CellRect, decoration: Decoration<'_>) {
        let border = self.theme.border(decoration.active);
        let right = rect.right() - 1;
        let bottom = rect.bottom() - 1;

        if let Some(interior) = rect.interior() {
            canvas.fill_rect(interior, ' ', self.theme.fill());
        }

        self.render_top_row(canvas, rect, decoration);

        for y in rect.y + 1..bottom {
            canvas.set_cell(rect.x, y, '║', border);
            canvas.set_cell(right, y, '║', border);
        }

        canvas.set_cell(rect.x, bottom, '╚', border);
        for x in rect.x + 1..right {
            canvas.set_cell(x, bottom, '═', border);
        }
        // Resize grip.
        canvas.set_cell(right, bottom, '╬', border);
    }

    fn render_collapsed(&self, canvas: &mut dyn Canvas, rect: CellRect) {
        canvas.fill_rect(rect, ' ', self.theme.fill());
    }
}
