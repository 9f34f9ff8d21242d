//! Pointer gesture state and title-bar hot-zone hit testing.
use crate::constants::{CONTROL_BUTTON_WIDTH, TITLE_OFFSET, TITLE_PADDING};
use crate::geometry::CellRect;

/// In-progress pointer gesture for a single window.
///
/// Drag and resize are variants of one enum so a window can never be doing
/// both. `last` is the pointer position seen by the previous step; every
/// step applies the delta from it and then moves it, so deltas are
/// incremental rather than measured from where the gesture started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    Dragging {
        last: (i32, i32),
    },
    Resizing {
        last: (i32, i32),
    },
}

impl Gesture {
    pub fn is_idle(&self) -> bool {
        matches!(self, Gesture::Idle)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Gesture::Dragging { .. })
    }

    pub fn is_resizing(&self) -> bool {
        matches!(self, Gesture::Resizing { .. })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlButton {
    Minimize,
    Maximize,
    Close,
}

impl ControlButton {
    /// Slot counted from the right edge: close is rightmost.
    fn slot(self) -> i32 {
        match self {
            ControlButton::Close => 1,
            ControlButton::Maximize => 2,
            ControlButton::Minimize => 3,
        }
    }
}

/// Half-open column range `[start, end)` of a control button on the top row.
pub fn control_button_range(rect: CellRect, button: ControlButton) -> (i32, i32) {
    let start = rect.right() - button.slot() * CONTROL_BUTTON_WIDTH;
    (start, start + CONTROL_BUTTON_WIDTH)
}

/// Half-open column range of the title drag handle.
pub fn title_range(rect: CellRect, title_len: usize) -> (i32, i32) {
    let start = rect.x + TITLE_OFFSET;
    (start, start + title_len as i32 + TITLE_PADDING)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitZone {
    Control(ControlButton),
    TitleBar,
    ResizeGrip,
    Body,
    Outside,
}

/// Classify a cell relative to a window's effective rectangle.
///
/// Control buttons win over the title handle where the two overlap, and only
/// the parts of each zone that lie inside the rectangle count.
pub fn hit_test(rect: CellRect, title_len: usize, x: i32, y: i32) -> HitZone {
    if !rect.contains(x, y) {
        return HitZone::Outside;
    }
    if y == rect.y {
        for button in [
            ControlButton::Close,
            ControlButton::Maximize,
            ControlButton::Minimize,
        ] {
            let (start, end) = control_button_range(rect, button);
            if x >= start && x < end {
                return HitZone::Control(button);
            }
        }
        let (start, end) = title_range(rect, title_len);
        if x >= start && x < end {
            return HitZone::TitleBar;
        }
    }
    if x == rect.right() - 1 && y == rect.bottom() - 1 {
        return HitZone::ResizeGrip;
    }
    HitZone::Body
}
