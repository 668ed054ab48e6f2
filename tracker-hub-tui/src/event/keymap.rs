//! Key bindings

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// One key binding
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// Default key map
pub struct DefaultKeymap;

impl DefaultKeymap {
    // Global
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const LANGUAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('l'));
    pub const DISMISS: KeyBinding = KeyBinding::key(KeyCode::Esc);

    // Pages
    pub const NEXT_PAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('p'));
    pub const PREV_PAGE: KeyBinding = KeyBinding::alt(KeyCode::Char('o'));
    pub const PAGE_CONNECTIONS: KeyBinding = KeyBinding::alt(KeyCode::Char('1'));
    pub const PAGE_DATA: KeyBinding = KeyBinding::alt(KeyCode::Char('2'));

    // Connections page
    pub const CHECK: KeyBinding = KeyBinding::alt(KeyCode::Char('t'));
    pub const DELETE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));
}
