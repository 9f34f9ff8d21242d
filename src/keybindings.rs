use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyModifiers};

use crate::actions::Action;
use crate::event::KeyInput;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub fn matches(&self, key: &KeyInput) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) && self.code != KeyCode::BackTab {
            parts.push("Shift".to_string());
        }
        if self.mods.contains(KeyModifiers::ALT) {
            parts.push("Alt".to_string());
        }
        let code = match self.code {
            KeyCode::Char(c) => c.to_ascii_uppercase().to_string(),
            KeyCode::Esc => "Esc".to_string(),
            KeyCode::Enter => "Enter".to_string(),
            KeyCode::Tab => "Tab".to_string(),
            KeyCode::BackTab => "Shift+Tab".to_string(),
            KeyCode::F(n) => format!("F{}", n),
            _ => format!("{:?}", self.code),
        };
        parts.push(code);
        parts.join("+")
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Map from desktop actions to the key combinations that trigger them.
///
/// Combos are kept in insertion order per action; the first one is the
/// "primary" combo shown in the menu bar.
#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Action::*;
        let mut kb = Self::new();
        kb.add(Quit, KeyCombo::plain(KeyCode::Char('q')));
        kb.add(Quit, KeyCombo::plain(KeyCode::Esc));
        kb.add(Quit, KeyCombo::plain(KeyCode::F(3)));
        kb.add(
            Quit,
            KeyCombo::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        kb.add(NewWindow, KeyCombo::plain(KeyCode::Char('n')));
        kb.add(CycleNextWindow, KeyCombo::plain(KeyCode::Tab));
        kb.add(CyclePrevWindow, KeyCombo::plain(KeyCode::BackTab));
        // most terminals report BackTab with SHIFT set
        kb.add(
            CyclePrevWindow,
            KeyCombo::new(KeyCode::BackTab, KeyModifiers::SHIFT),
        );
        kb.add(ToggleMouseCapture, KeyCombo::plain(KeyCode::Char('m')));
        kb.add(RestoreAll, KeyCombo::plain(KeyCode::Char('r')));
        kb
    }
}

impl KeyBindings {
    pub fn new() -> Self {
        Self {
            map: HashMap::new(),
        }
    }

    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn combos(&self, action: Action) -> &[KeyCombo] {
        self.map.get(&action).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn primary(&self, action: Action) -> Option<&KeyCombo> {
        self.combos(action).first()
    }

    pub fn action_for(&self, key: &KeyInput) -> Option<Action> {
        Action::ALL
            .into_iter()
            .find(|action| self.combos(*action).iter().any(|combo| combo.matches(key)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, mods: KeyModifiers) -> KeyInput {
        KeyInput::new(code, mods)
    }

    #[test]
    fn defaults_cover_desktop_actions() {
        let kb = KeyBindings::default();
        assert_eq!(
            kb.action_for(&key(KeyCode::Char('q'), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            kb.action_for(&key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Action::Quit)
        );
        assert_eq!(
            kb.action_for(&key(KeyCode::F(3), KeyModifiers::NONE)),
            Some(Action::Quit)
        );
        assert_eq!(
            kb.action_for(&key(KeyCode::Char('n'), KeyModifiers::NONE)),
            Some(Action::NewWindow)
        );
        assert_eq!(
            kb.action_for(&key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Action::CyclePrevWindow)
        );
        assert_eq!(
            kb.action_for(&key(KeyCode::Char('x'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn modifiers_must_match_exactly() {
        let kb = KeyBindings::default();
        assert_eq!(
            kb.action_for(&key(KeyCode::Char('n'), KeyModifiers::CONTROL)),
            None
        );
        assert_eq!(
            kb.action_for(&key(KeyCode::Char('c'), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn display_formats_combos() {
        assert_eq!(
            KeyCombo::new(KeyCode::Char('c'), KeyModifiers::CONTROL).display(),
            "Ctrl+C"
        );
        assert_eq!(KeyCombo::plain(KeyCode::F(3)).to_string(), "F3");
        assert_eq!(
            KeyCombo::new(KeyCode::BackTab, KeyModifiers::SHIFT).display(),
            "Shift+Tab"
        );
        let kb = KeyBindings::default();
        assert_eq!(
            kb.primary(Action::NewWindow).map(KeyCombo::display),
            Some("N".to_string())
        );
    }
}
