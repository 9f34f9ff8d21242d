use std::fmt;

/// Desktop-level commands reachable from the keyboard.
///
/// `Display` gives the short label shown in the menu bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NewWindow,
    CycleNextWindow,
    CyclePrevWindow,
    ToggleMouseCapture,
    RestoreAll,
}

impl Action {
    pub const ALL: [Action; 6] = [
        Action::NewWindow,
        Action::CycleNextWindow,
        Action::CyclePrevWindow,
        Action::RestoreAll,
        Action::ToggleMouseCapture,
        Action::Quit,
    ];
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::NewWindow => "New",
            Action::CycleNextWindow => "Next",
            Action::CyclePrevWindow => "Prev",
            Action::ToggleMouseCapture => "Mouse",
            Action::RestoreAll => "Restore",
        };
        write!(f, "{}", s)
    }
}
