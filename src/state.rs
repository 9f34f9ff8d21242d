/// Host-side flags that live outside the window stack.
#[derive(Debug, Default, Clone, Copy)]
pub struct DesktopState {
    mouse_capture_enabled: bool,
    mouse_capture_dirty: bool,
    windows_opened: u32,
}

impl DesktopState {
    pub fn new(mouse_capture_enabled: bool) -> Self {
        Self {
            mouse_capture_enabled,
            // the driver starts with capture off, so an initial "on" must be applied
            mouse_capture_dirty: mouse_capture_enabled,
            windows_opened: 0,
        }
    }

    pub fn mouse_capture_enabled(&self) -> bool {
        self.mouse_capture_enabled
    }

    pub fn set_mouse_capture_enabled(&mut self, enabled: bool) {
        if self.mouse_capture_enabled == enabled {
            return;
        }
        self.mouse_capture_enabled = enabled;
        self.mouse_capture_dirty = true;
    }

    pub fn toggle_mouse_capture(&mut self) {
        let enabled = !self.mouse_capture_enabled;
        self.set_mouse_capture_enabled(enabled);
    }

    /// Returns the new capture setting once per change.
    pub fn take_mouse_capture_change(&mut self) -> Option<bool> {
        if self.mouse_capture_dirty {
            self.mouse_capture_dirty = false;
            Some(self.mouse_capture_enabled)
        } else {
            None
        }
    }

    /// Bump and return the running window number used for default titles.
    pub fn next_window_number(&mut self) -> u32 {
        self.windows_opened += 1;
        self.windows_opened
    }

    pub fn windows_opened(&self) -> u32 {
        self.windows_opened
    }
}
