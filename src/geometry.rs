use ratatui::layout::Rect;

/// Signed cell rectangle. Windows can be dragged partly off-screen, so the
/// origin is signed while the size stays unsigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CellRect {
    pub x: i32,
    pub y: i32,
    pub width: u16,
    pub height: u16,
}

impl CellRect {
    pub const fn new(x: i32, y: i32, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// The rectangle shrunk by one cell on every side, or `None` when nothing
    /// is left of it.
    pub fn interior(&self) -> Option<CellRect> {
        if self.width <= 2 || self.height <= 2 {
            return None;
        }
        Some(CellRect {
            x: self.x + 1,
            y: self.y + 1,
            width: self.width - 2,
            height: self.height - 2,
        })
    }

    /// Clip against an unsigned screen area. Returns `None` when the overlap
    /// is empty.
    pub fn clip(&self, bounds: Rect) -> Option<Rect> {
        let left = self.x.max(bounds.x as i32);
        let top = self.y.max(bounds.y as i32);
        let right = self.right().min(bounds.right() as i32);
        let bottom = self.bottom().min(bounds.bottom() as i32);
        if right <= left || bottom <= top {
            return None;
        }
        Some(Rect {
            x: left as u16,
            y: top as u16,
            width: (right - left) as u16,
            height: (bottom - top) as u16,
        })
    }
}

impl From<Rect> for CellRect {
    fn from(rect: Rect) -> Self {
        Self {
            x: rect.x as i32,
            y: rect.y as i32,
            width: rect.width,
            height: rect.height,
        }
    }
}

/// Size of the character grid windows are laid out on.
///
/// Maximized geometry is derived from this on every call rather than cached,
/// so a terminal resize is picked up by the next event or draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

impl From<(u16, u16)> for Viewport {
    fn from((width, height): (u16, u16)) -> Self {
        Self { width, height }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_uses_exclusive_edges() {
        let r = CellRect::new(2, 3, 4, 2);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 4));
        assert!(!r.contains(6, 4));
        assert!(!r.contains(5, 5));
        assert!(!r.contains(1, 3));
    }

    #[test]
    fn interior_shrinks_each_side() {
        let r = CellRect::new(-1, 0, 10, 5);
        assert_eq!(r.interior(), Some(CellRect::new(0, 1, 8, 3)));
        assert_eq!(CellRect::new(0, 0, 2, 10).interior(), None);
        assert_eq!(CellRect::new(0, 0, 10, 1).interior(), None);
    }

    #[test]
    fn clip_handles_negative_origin() {
        let bounds = Rect {
            x: 0,
            y: 0,
            width: 80,
            height: 24,
        };
        let r = CellRect::new(-5, 3, 20, 6);
        assert_eq!(
            r.clip(bounds),
            Some(Rect {
                x: 0,
                y: 3,
                width: 15,
                height: 6
            })
        );
        assert_eq!(CellRect::new(100, 0, 5, 5).clip(bounds), None);
    }
}
