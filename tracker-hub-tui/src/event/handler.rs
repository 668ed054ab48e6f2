//! Event handler

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, ContentMessage, ModalMessage, NavigationMessage};
use crate::model::{App, Modal, Page};

/// Waits up to `timeout` for terminal input.
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Maps one terminal event to a message.
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Resize(_, height) => AppMessage::Resize(height),
        _ => AppMessage::Noop,
    }
}

fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // Press only; some terminals also report Release and Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key, app);
    }

    // Global shortcuts
    if DefaultKeymap::FORCE_QUIT.matches(&key) || DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::SwitchLanguage;
    }
    if DefaultKeymap::NEXT_PAGE.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::Next);
    }
    if DefaultKeymap::PREV_PAGE.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::Previous);
    }
    if DefaultKeymap::PAGE_CONNECTIONS.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::Go(Page::Connections));
    }
    if DefaultKeymap::PAGE_DATA.matches(&key) {
        return AppMessage::Navigation(NavigationMessage::Go(Page::Data));
    }
    if DefaultKeymap::DISMISS.matches(&key) {
        return AppMessage::DismissNotice;
    }

    match app.current_page() {
        Page::Connections => handle_connections_keys(key, app),
        Page::Data => handle_data_keys(key),
    }
}

/// Connections page: typing into the form, or acting on the list.
fn handle_connections_keys(key: KeyEvent, app: &App) -> AppMessage {
    if DefaultKeymap::CHECK.matches(&key) {
        return AppMessage::Content(ContentMessage::Check);
    }
    if DefaultKeymap::DELETE.matches(&key) {
        return AppMessage::Content(ContentMessage::Delete);
    }

    match key.code {
        KeyCode::Tab => return AppMessage::Content(ContentMessage::NextField),
        KeyCode::BackTab => return AppMessage::Content(ContentMessage::PrevField),
        _ => {}
    }

    if app.connections.focus.is_text() {
        handle_form_keys(key)
    } else {
        handle_list_keys(key)
    }
}

fn handle_form_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Enter => AppMessage::Content(ContentMessage::Submit),
        KeyCode::Backspace => AppMessage::Content(ContentMessage::Backspace),
        KeyCode::Down => AppMessage::Content(ContentMessage::NextField),
        KeyCode::Up => AppMessage::Content(ContentMessage::PrevField),
        KeyCode::Char(ch) if is_plain(key.modifiers) => {
            AppMessage::Content(ContentMessage::Input(ch))
        }
        _ => AppMessage::Noop,
    }
}

fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if !is_plain(key.modifiers) {
        return AppMessage::Noop;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Enter | KeyCode::Char('c') => AppMessage::Content(ContentMessage::Connect),
        KeyCode::Char('x') => AppMessage::Content(ContentMessage::Delete),
        KeyCode::Char('?') => AppMessage::ShowHelp,
        _ => AppMessage::Noop,
    }
}

fn handle_data_keys(key: KeyEvent) -> AppMessage {
    if !is_plain(key.modifiers) {
        return AppMessage::Noop;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::Content(ContentMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Content(ContentMessage::SelectNext),
        KeyCode::Char(' ') => AppMessage::Content(ContentMessage::Toggle),
        KeyCode::Enter => AppMessage::Content(ContentMessage::Execute),
        KeyCode::PageUp => AppMessage::Content(ContentMessage::ScrollUp),
        KeyCode::PageDown => AppMessage::Content(ContentMessage::ScrollDown),
        KeyCode::Char('?') => AppMessage::ShowHelp,
        _ => AppMessage::Noop,
    }
}

fn handle_modal_keys(key: KeyEvent, app: &App) -> AppMessage {
    // Esc and Ctrl+C always close the modal
    if DefaultKeymap::DISMISS.matches(&key) || DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Modal(ModalMessage::Close);
    }

    let Some(modal) = &app.modal.active else {
        return AppMessage::Noop;
    };

    match modal {
        Modal::ConfirmDelete { .. } => match key.code {
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Left | KeyCode::Right => {
                AppMessage::Modal(ModalMessage::ToggleDeleteFocus)
            }
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
        Modal::Notice(_) | Modal::Help => match key.code {
            KeyCode::Enter => AppMessage::Modal(ModalMessage::Confirm),
            _ => AppMessage::Noop,
        },
    }
}

/// No modifier, or Shift for upper-case and symbols.
fn is_plain(modifiers: KeyModifiers) -> bool {
    modifiers.is_empty() || modifiers == KeyModifiers::SHIFT
}
