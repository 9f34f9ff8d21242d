//! Input events as the window engine sees them.
//!
//! Terminal backends report mouse activity as press/drag/release transitions.
//! The engine only cares about where the pointer is and which buttons are
//! currently held, so `crossterm` events are flattened into a `PointerEvent`
//! carrying the held-button set.
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

bitflags::bitflags! {
    /// Mouse buttons held down at the time of a pointer event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u8 {
        const PRIMARY = 1;
        const SECONDARY = 2;
        const MIDDLE = 4;
    }
}

impl From<MouseButton> for Buttons {
    fn from(button: MouseButton) -> Self {
        match button {
            MouseButton::Left => Buttons::PRIMARY,
            MouseButton::Right => Buttons::SECONDARY,
            MouseButton::Middle => Buttons::MIDDLE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerEvent {
    pub x: i32,
    pub y: i32,
    pub buttons: Buttons,
}

impl PointerEvent {
    pub fn new(x: i32, y: i32, buttons: Buttons) -> Self {
        Self { x, y, buttons }
    }

    pub fn primary_held(&self) -> bool {
        self.buttons.contains(Buttons::PRIMARY)
    }
}

impl From<MouseEvent> for PointerEvent {
    fn from(mouse: MouseEvent) -> Self {
        let buttons = match mouse.kind {
            MouseEventKind::Down(button) | MouseEventKind::Drag(button) => Buttons::from(button),
            _ => Buttons::empty(),
        };
        Self {
            x: mouse.column as i32,
            y: mouse.row as i32,
            buttons,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyInput {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
    /// The printable character, when the key produced one.
    pub rune: Option<char>,
}

impl KeyInput {
    pub fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        let rune = match code {
            KeyCode::Char(c) => Some(c),
            _ => None,
        };
        Self {
            code,
            modifiers,
            rune,
        }
    }
}

impl From<KeyEvent> for KeyInput {
    fn from(key: KeyEvent) -> Self {
        Self::new(key.code, key.modifiers)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WmEvent {
    Pointer(PointerEvent),
    Key(KeyInput),
    /// The event source broke. Windows never consume this; the host decides
    /// how to shut down.
    Error(String),
}

impl WmEvent {
    pub fn pointer(x: i32, y: i32, buttons: Buttons) -> Self {
        Self::Pointer(PointerEvent::new(x, y, buttons))
    }

    pub fn key(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self::Key(KeyInput::new(code, modifiers))
    }

    /// Convert a terminal event. Returns `None` for events the engine has no
    /// use for (focus changes, paste, resize, key releases).
    pub fn from_crossterm(event: &Event) -> Option<Self> {
        match event {
            Event::Mouse(mouse) => Some(Self::Pointer(PointerEvent::from(*mouse))),
            Event::Key(key) if key.kind != KeyEventKind::Release => {
                Some(Self::Key(KeyInput::from(*key)))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn press_and_drag_hold_the_button() {
        let down = WmEvent::from_crossterm(&mouse(MouseEventKind::Down(MouseButton::Left), 3, 4));
        assert_eq!(down, Some(WmEvent::pointer(3, 4, Buttons::PRIMARY)));
        let drag = WmEvent::from_crossterm(&mouse(MouseEventKind::Drag(MouseButton::Left), 5, 4));
        assert_eq!(drag, Some(WmEvent::pointer(5, 4, Buttons::PRIMARY)));
    }

    #[test]
    fn release_and_motion_hold_nothing() {
        let up = WmEvent::from_crossterm(&mouse(MouseEventKind::Up(MouseButton::Left), 1, 1));
        assert_eq!(up, Some(WmEvent::pointer(1, 1, Buttons::empty())));
        let moved = WmEvent::from_crossterm(&mouse(MouseEventKind::Moved, 1, 1));
        assert_eq!(moved, Some(WmEvent::pointer(1, 1, Buttons::empty())));
    }

    #[test]
    fn secondary_press_is_not_primary() {
        let p = PointerEvent::new(0, 0, Buttons::SECONDARY);
        assert!(!p.primary_held());
        // chords still count as a primary press
        let chord = PointerEvent::new(0, 0, Buttons::PRIMARY | Buttons::SECONDARY);
        assert!(chord.primary_held());
    }

    #[test]
    fn keys_carry_their_rune() {
        let ev = WmEvent::from_crossterm(&Event::Key(KeyEvent::new(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
        )));
        match ev {
            Some(WmEvent::Key(key)) => assert_eq!(key.rune, Some('q')),
            other => panic!("expected key event, got {other:?}"),
        }
        assert_eq!(WmEvent::from_crossterm(&Event::Resize(10, 10)), None);
    }
}
