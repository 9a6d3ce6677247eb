use std::collections::HashMap;
use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    /// Esc: leave a detail view, or dismiss the nav menu preview.
    Back,
    ToggleTheme,
    ToggleMode,
    CloseFocused,
    FocusNext,
    FocusPrev,
    // Nav sections by number row
    SectionChart,
    SectionEvents,
    SectionSns,
    SectionNews,
    SectionCommunity,
    // List navigation inside the focused window
    SelectUp,
    SelectDown,
    OpenDetail,
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Action::Quit => "Quit",
            Action::Back => "Back / dismiss (Esc)",
            Action::ToggleTheme => "Toggle light/dark theme",
            Action::ToggleMode => "Toggle general/pro mode",
            Action::CloseFocused => "Close focused window",
            Action::FocusNext => "Focus next window (Tab)",
            Action::FocusPrev => "Focus previous window (BackTab)",
            Action::SectionChart => "Open chart menu (1)",
            Action::SectionEvents => "Open events menu (2)",
            Action::SectionSns => "Open SNS menu (3)",
            Action::SectionNews => "Open news menu (4)",
            Action::SectionCommunity => "Open community menu (5)",
            Action::SelectUp => "Selection up",
            Action::SelectDown => "Selection down",
            Action::OpenDetail => "Open detail (Enter)",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub mods: KeyModifiers,
}

impl KeyCombo {
    pub fn new(code: KeyCode, mods: KeyModifiers) -> Self {
        Self { code, mods }
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.code == self.code && key.modifiers == self.mods
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();
        if self.mods.contains(KeyModifiers::CONTROL) {
            parts.push("Ctrl".to_string());
        }
        if self.mods.contains(KeyModifiers::SHIFT) {
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
            KeyCode::Up => "Up".to_string(),
            KeyCode::Down => "Down".to_string(),
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

#[derive(Debug, Clone)]
pub struct KeyBindings {
    map: HashMap<Action, Vec<KeyCombo>>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        use Action::*;
        let mut kb = Self {
            map: HashMap::new(),
        };
        kb.add(
            Quit,
            KeyCombo::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        );
        kb.add(Back, KeyCombo::new(KeyCode::Esc, KeyModifiers::NONE));
        kb.add(
            ToggleTheme,
            KeyCombo::new(KeyCode::Char('t'), KeyModifiers::NONE),
        );
        kb.add(
            ToggleMode,
            KeyCombo::new(KeyCode::Char('m'), KeyModifiers::NONE),
        );
        kb.add(
            CloseFocused,
            KeyCombo::new(KeyCode::Char('w'), KeyModifiers::NONE),
        );
        kb.add(FocusNext, KeyCombo::new(KeyCode::Tab, KeyModifiers::NONE));
        kb.add(
            FocusPrev,
            KeyCombo::new(KeyCode::BackTab, KeyModifiers::NONE),
        );
        kb.add(
            SectionChart,
            KeyCombo::new(KeyCode::Char('1'), KeyModifiers::NONE),
        );
        kb.add(
            SectionEvents,
            KeyCombo::new(KeyCode::Char('2'), KeyModifiers::NONE),
        );
        kb.add(
            SectionSns,
            KeyCombo::new(KeyCode::Char('3'), KeyModifiers::NONE),
        );
        kb.add(
            SectionNews,
            KeyCombo::new(KeyCode::Char('4'), KeyModifiers::NONE),
        );
        kb.add(
            SectionCommunity,
            KeyCombo::new(KeyCode::Char('5'), KeyModifiers::NONE),
        );
        kb.add(SelectUp, KeyCombo::new(KeyCode::Up, KeyModifiers::NONE));
        kb.add(SelectDown, KeyCombo::new(KeyCode::Down, KeyModifiers::NONE));
        kb.add(
            OpenDetail,
            KeyCombo::new(KeyCode::Enter, KeyModifiers::NONE),
        );
        kb
    }
}

impl KeyBindings {
    pub fn add(&mut self, action: Action, combo: KeyCombo) {
        self.map.entry(action).or_default().push(combo);
    }

    pub fn matches(&self, action: Action, key: &KeyEvent) -> bool {
        self.map
            .get(&action)
            .is_some_and(|list| list.iter().any(|c| c.matches(key)))
    }

    pub fn action_for_key(&self, key: &KeyEvent) -> Option<Action> {
        for (act, list) in &self.map {
            if list.iter().any(|c| c.matches(key)) {
                return Some(*act);
            }
        }
        None
    }

    pub fn combos_for(&self, action: Action) -> Vec<String> {
        self.map
            .get(&action)
            .map(|list| list.iter().map(|c| c.display()).collect())
            .unwrap_or_default()
    }
}
