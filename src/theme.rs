use ratatui::style::{Color, Modifier, Style};

// Centralized retro palette. The defaults reproduce the classic
// white-on-blue frame with a yellow title and red control glyphs.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowTheme {
    pub border_fg: Color,
    pub border_bg: Color,
    pub title_fg: Color,
    pub title_bg: Color,
    pub control_fg: Color,
    pub control_bg: Color,
    /// Border foreground used while the window is not active.
    pub inactive_border_fg: Color,
    /// Title foreground used while the window is not active.
    pub inactive_title_fg: Color,
}

impl Default for WindowTheme {
    fn default() -> Self {
        Self {
            border_fg: Color::White,
            border_bg: Color::Blue,
            title_fg: Color::Yellow,
            title_bg: Color::Blue,
            control_fg: Color::Red,
            control_bg: Color::Blue,
            inactive_border_fg: Color::DarkGray,
            inactive_title_fg: Color::Gray,
        }
    }
}

impl WindowTheme {
    pub fn border(&self, active: bool) -> Style {
        let fg = if active {
            self.border_fg
        } else {
            self.inactive_border_fg
        };
        Style::default().fg(fg).bg(self.border_bg)
    }

    pub fn title(&self, active: bool) -> Style {
        let fg = if active {
            self.title_fg
        } else {
            self.inactive_title_fg
        };
        let style = Style::default().fg(fg).bg(self.title_bg);
        if active {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn control(&self) -> Style {
        Style::default().fg(self.control_fg).bg(self.control_bg)
    }

    /// Interior fill behind window content.
    pub fn fill(&self) -> Style {
        Style::default().bg(self.border_bg)
    }
}

// Desktop chrome
pub fn desktop_bg() -> Color {
    Color::Rgb(65, 70, 217)
}
pub fn menu_bar_fg() -> Color {
    Color::White
}
pub fn menu_bar_bg() -> Color {
    Color::Blue
}
pub fn menu_hotkey_fg() -> Color {
    Color::Yellow
}
pub fn status_bar_fg() -> Color {
    Color::Green
}
pub fn status_bar_bg() -> Color {
    Color::Blue
}
