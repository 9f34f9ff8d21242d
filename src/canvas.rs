//! The character-grid capability windows draw through.
//!
//! Windows never talk to the terminal directly. They write single cells into
//! a `Canvas`, and whoever owns the canvas decides when to flush it. The
//! implementation for `ratatui::buffer::Buffer` silently drops writes that
//! land outside the buffer area, so callers can draw windows that hang off
//! the screen edge without bounds checks of their own.
use ratatui::buffer::Buffer;
use ratatui::style::Style;

use crate::geometry::CellRect;

pub trait Canvas {
    /// Set the cell at `(x, y)`. Out-of-grid coordinates are ignored.
    fn set_cell(&mut self, x: i32, y: i32, glyph: char, style: Style);

    /// `(width, height)` of the grid in cells.
    fn grid_size(&self) -> (u16, u16);

    /// Write `text` left-to-right starting at `(x, y)`, one cell per char.
    /// Returns the column just past the last char.
    fn print(&mut self, x: i32, y: i32, text: &str, style: Style) -> i32 {
        let mut col = x;
        for ch in text.chars() {
            self.set_cell(col, y, ch, style);
            col += 1;
        }
        col
    }

    /// Fill `rect` with `glyph`.
    fn fill_rect(&mut self, rect: CellRect, glyph: char, style: Style) {
        for y in rect.y..rect.bottom() {
            for x in rect.x..rect.right() {
                self.set_cell(x, y, glyph, style);
            }
        }
    }
}

impl Canvas for Buffer {
    fn set_cell(&mut self, x: i32, y: i32, glyph: char, style: Style) {
        let area = self.area;
        if x < area.x as i32
            || y < area.y as i32
            || x >= area.right() as i32
            || y >= area.bottom() as i32
        {
            return;
        }
        if let Some(cell) = self.cell_mut((x as u16, y as u16)) {
            cell.set_char(glyph);
            cell.set_style(style);
        }
    }

    fn grid_size(&self) -> (u16, u16) {
        (self.area.right(), self.area.bottom())
    }

    fn fill_rect(&mut self, rect: CellRect, glyph: char, style: Style) {
        let Some(area) = rect.clip(self.area) else {
            return;
        };
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                self[(x, y)].set_char(glyph).set_style(style);
            }
        }
    }
}

/// Paints window-specific content into a window's interior rectangle.
///
/// Renderers are owned by the application and shared with the window, which
/// only ever borrows them during a draw.
pub trait ContentRenderer {
    fn paint(&self, canvas: &mut dyn Canvas, interior: CellRect);
}

impl<F> ContentRenderer for F
where
    F: Fn(&mut dyn Canvas, CellRect),
{
    fn paint(&self, canvas: &mut dyn Canvas, interior: CellRect) {
        self(canvas, interior)
    }
}
