use tracker_hub_core::types::{FormState, RowAction};

use crate::message::{Command, ContentMessage};
use crate::model::{App, FormField, Page};

pub fn update(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match app.current_page() {
        Page::Connections => update_connections(app, msg),
        Page::Data => update_data(app, msg),
    }
}

// ============ Connections page ============

fn update_connections(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match msg {
        ContentMessage::NextField => {
            app.connections.focus = app.connections.focus.next();
            None
        }
        ContentMessage::PrevField => {
            app.connections.focus = app.connections.focus.previous();
            None
        }
        ContentMessage::SelectPrevious => {
            app.connections.select_previous();
            None
        }
        ContentMessage::SelectNext => {
            app.connections.select_next(app.view.registry.len());
            None
        }
        ContentMessage::Input(ch) => {
            if let Some(field) = editable_field(app) {
                field.push(ch);
            }
            None
        }
        ContentMessage::Backspace => {
            if let Some(field) = editable_field(app) {
                field.pop();
            }
            None
        }
        ContentMessage::Submit => submit(app),
        ContentMessage::Check => check(app),
        ContentMessage::Connect => {
            let action = app.selected_row()?.connect_action()?;
            start_row_action(app, action)
        }
        ContentMessage::Delete => {
            ask_delete(app);
            None
        }
        ContentMessage::Toggle
        | ContentMessage::Execute
        | ContentMessage::ScrollUp
        | ContentMessage::ScrollDown => None,
    }
}

/// Focused text field, unless a submission owns the form.
fn editable_field(app: &mut App) -> Option<&mut String> {
    if app.pending.submit {
        return None;
    }
    if !app.view.form.is_submitting() {
        app.view.form = FormState::Idle;
    }
    let input = &mut app.view.input;
    match app.connections.focus {
        FormField::Domain => Some(&mut input.domain),
        FormField::Account => Some(&mut input.account),
        FormField::Token => Some(&mut input.token),
        FormField::List => None,
    }
}

fn submit(app: &mut App) -> Option<Command> {
    if app.pending.submit {
        return None;
    }
    app.pending.submit = true;
    app.view.form = FormState::Submitting;
    app.set_loading();
    Some(Command::Submit(app.view.input.clone()))
}

fn check(app: &mut App) -> Option<Command> {
    if app.pending.check {
        return None;
    }
    app.pending.check = true;
    app.set_loading();
    Some(Command::Check(app.view.input.clone()))
}

/// Starts a connect or delete unless one is already running.
pub(super) fn start_row_action(app: &mut App, action: RowAction) -> Option<Command> {
    if app.pending.row {
        return None;
    }
    app.pending.row = true;
    app.set_loading();
    Some(Command::Row(action))
}

fn ask_delete(app: &mut App) {
    if app.pending.row {
        return;
    }
    let Some(row) = app.selected_row() else {
        return;
    };
    if let Some(RowAction::Delete(index)) = row.delete_action() {
        let label = row.label.clone();
        app.modal.confirm_delete(index, label);
    }
}

// ============ Data page ============

fn update_data(app: &mut App, msg: ContentMessage) -> Option<Command> {
    match msg {
        ContentMessage::SelectPrevious => app.data.select_previous(),
        ContentMessage::SelectNext => app.data.select_next(),
        ContentMessage::Toggle => {
            if !app.pending.query {
                app.data.current_option().toggle(&mut app.view.selection);
            }
        }
        ContentMessage::Execute => {
            if app.pending.query {
                return None;
            }
            app.pending.query = true;
            app.set_loading();
            return Some(Command::Execute(app.view.selection));
        }
        ContentMessage::ScrollUp => app.data.scroll_up(),
        ContentMessage::ScrollDown => app.data.scroll_down(),
        _ => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use tracker_hub_core::types::{
        Connection, ConnectionList, ConnectionListView, CredentialInput, QuerySelection,
    };

    use super::*;
    use crate::message::{AppMessage, NavigationMessage};
    use crate::model::Modal;
    use crate::update::update as app_update;

    fn app_with_rows(domains: &[&str], current: i64) -> App {
        let mut app = App::new();
        let list = ConnectionList {
            connections: domains
                .iter()
                .map(|d| Connection::new(*d, format!("me@{d}"), "tok"))
                .collect(),
            current,
        };
        app.view.registry = ConnectionListView::from_list(&list);
        app
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            update(app, ContentMessage::Input(ch));
        }
    }

    #[test]
    fn typing_fills_focused_field() {
        let mut app = App::new();
        type_text(&mut app, "acme.net");
        update(&mut app, ContentMessage::NextField);
        type_text(&mut app, "me@acme.net");
        update(&mut app, ContentMessage::NextField);
        type_text(&mut app, "tokk");
        update(&mut app, ContentMessage::Backspace);

        assert_eq!(
            app.view.input,
            CredentialInput::new("acme.net", "me@acme.net", "tok")
        );
    }

    #[test]
    fn typing_on_list_is_ignored() {
        let mut app = App::new();
        app.connections.focus = FormField::List;
        type_text(&mut app, "x");
        assert_eq!(app.view.input, CredentialInput::default());
    }

    #[test]
    fn submit_sends_input_once() {
        let mut app = App::new();
        app.view.input = CredentialInput::new("a.co", "me", "t");

        let command = update(&mut app, ContentMessage::Submit);
        assert_eq!(
            command,
            Some(Command::Submit(CredentialInput::new("a.co", "me", "t")))
        );
        assert!(app.view.form.is_submitting());

        // In flight: second submit and typing are ignored
        assert_eq!(update(&mut app, ContentMessage::Submit), None);
        type_text(&mut app, "zzz");
        assert_eq!(app.view.input.domain, "a.co");
    }

    #[test]
    fn check_is_not_stacked() {
        let mut app = App::new();
        assert!(matches!(
            update(&mut app, ContentMessage::Check),
            Some(Command::Check(_))
        ));
        assert_eq!(update(&mut app, ContentMessage::Check), None);
    }

    #[test]
    fn connect_uses_highlighted_row() {
        let mut app = app_with_rows(&["a.co", "b.co"], 0);
        app.connections.focus = FormField::List;
        update(&mut app, ContentMessage::SelectNext);

        assert_eq!(
            update(&mut app, ContentMessage::Connect),
            Some(Command::Row(RowAction::Connect(1)))
        );
        assert!(app.pending.row);
    }

    #[test]
    fn connect_on_current_row_does_nothing() {
        let mut app = app_with_rows(&["a.co", "b.co"], 0);
        assert_eq!(update(&mut app, ContentMessage::Connect), None);
        assert!(!app.pending.row);
    }

    #[test]
    fn connect_on_empty_list_does_nothing() {
        let mut app = App::new();
        assert_eq!(update(&mut app, ContentMessage::Connect), None);
    }

    #[test]
    fn row_actions_blocked_while_one_runs() {
        let mut app = app_with_rows(&["a.co", "b.co", "c.co"], 0);
        app.connections.selected = 2;
        assert!(update(&mut app, ContentMessage::Connect).is_some());

        assert_eq!(update(&mut app, ContentMessage::Connect), None);
        update(&mut app, ContentMessage::Delete);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn delete_asks_for_confirmation() {
        let mut app = app_with_rows(&["a.co", "b.co"], 0);
        app.connections.selected = 1;

        assert_eq!(update(&mut app, ContentMessage::Delete), None);
        assert_eq!(
            app.modal.active,
            Some(Modal::ConfirmDelete {
                index: 1,
                label: app.view.registry.rows[1].label.clone(),
                focus: 0,
            })
        );
    }

    #[test]
    fn data_page_toggles_and_executes() {
        let mut app = App::new();
        app_update(
            &mut app,
            AppMessage::Navigation(NavigationMessage::Go(Page::Data)),
        );

        update(&mut app, ContentMessage::Toggle);
        update(&mut app, ContentMessage::SelectNext);
        update(&mut app, ContentMessage::SelectNext);
        update(&mut app, ContentMessage::Toggle);

        let expected = QuerySelection {
            projects: true,
            workflows: false,
            statuses: true,
        };
        assert_eq!(app.view.selection, expected);
        assert_eq!(
            update(&mut app, ContentMessage::Execute),
            Some(Command::Execute(expected))
        );

        // Options are frozen while the query runs
        update(&mut app, ContentMessage::Toggle);
        assert_eq!(app.view.selection, expected);
        assert_eq!(update(&mut app, ContentMessage::Execute), None);
    }

    #[test]
    fn form_messages_ignored_on_data_page() {
        let mut app = App::new();
        app.navigation.select_page(Page::Data);
        type_text(&mut app, "abc");
        assert_eq!(update(&mut app, ContentMessage::Submit), None);
        assert_eq!(app.view.input, CredentialInput::default());
    }
}
