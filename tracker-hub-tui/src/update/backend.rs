//! Applies finished backend commands to the model

use tracker_hub_core::i18n::t;
use tracker_hub_core::types::{FormState, Notice};

use crate::message::BackendEvent;
use crate::model::{App, Modal};
use crate::view;

pub fn update(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::Refreshed(view) => {
            app.pending.refresh = false;
            app.view.apply_registry(view);
            list_replaced(app);
        }

        BackendEvent::Submitted(result) => {
            app.pending.submit = false;
            match result {
                Ok(outcome) => {
                    app.view.apply_submit(outcome);
                    list_replaced(app);
                    if let Some(notice) = app.view.notice.clone().filter(Notice::is_error) {
                        app.modal.show_notice(notice);
                    }
                }
                Err(e) => {
                    app.view.form = FormState::Idle;
                    app.show_notice(Notice::from_error(t().form.unavailable, &e));
                }
            }
        }

        BackendEvent::Checked { indicator, list } => {
            app.pending.check = false;
            let texts = &t().form;
            let notice = if indicator.is_connected() {
                Notice::info(texts.check_ok)
            } else {
                // Status bar only, no modal
                Notice::error(texts.check_failed)
            };
            app.view.apply_indicator(indicator);
            if let Some(list) = list {
                app.view.registry = list;
                list_replaced(app);
            }
            app.view.notify(notice);
        }

        BackendEvent::RowActionDone { action, result } => {
            app.pending.row = false;
            match result {
                Ok(view) => {
                    app.view.apply_registry(view);
                    list_replaced(app);
                    app.show_notice(Notice::info(action.done_message()));
                }
                Err(e) => app.show_notice(Notice::from_error(action.failed_message(), &e)),
            }
        }

        BackendEvent::QueryDone(result) => {
            app.pending.query = false;
            match result {
                Ok(tables) => {
                    if tables.is_empty() {
                        app.show_notice(Notice::info(t().query.empty_result));
                    }
                    app.data.set_content(view::result_line_count(&tables));
                    app.view.apply_results(tables);
                }
                Err(e) => app.show_notice(Notice::from_error(t().query.failed, &e)),
            }
        }
    }
    app.settle_status();
}

/// Re-aims the highlight at the new list and drops a delete confirmation
/// whose index now points at a different row.
fn list_replaced(app: &mut App) {
    app.connections.clamp(app.view.registry.len());
    let stale = match &app.modal.active {
        Some(Modal::ConfirmDelete { index, label, .. }) => {
            app.view.registry.row(*index).map(|row| row.label.as_str()) != Some(label.as_str())
        }
        _ => false,
    };
    if stale {
        app.modal.close();
    }
}

#[cfg(test)]
mod tests {
    use tracker_hub_core::CoreError;
    use tracker_hub_core::types::{
        Connection, ConnectionList, ConnectionListView, CredentialInput, Indicator, RegistryView,
        ResultTables, RowAction, SubmitOutcome, Table,
    };

    use super::*;
    use crate::message::{AppMessage, ContentMessage};
    use crate::model::Modal;
    use crate::update::update as app_update;

    fn registry(domains: &[&str], current: i64) -> RegistryView {
        let list = ConnectionList {
            connections: domains
                .iter()
                .map(|d| Connection::new(*d, format!("me@{d}"), "tok"))
                .collect(),
            current,
        };
        let indicator = usize::try_from(current)
            .ok()
            .and_then(|i| domains.get(i))
            .map_or_else(Indicator::disconnected, |d| Indicator::connected(*d));
        RegistryView {
            list: ConnectionListView::from_list(&list),
            indicator,
        }
    }

    #[test]
    fn refresh_replaces_list_and_clears_loading() {
        let mut app = App::new();
        app_update(&mut app, AppMessage::Refresh);
        app.connections.selected = 4;

        update(&mut app, BackendEvent::Refreshed(registry(&["a.co", "b.co"], 1)));

        assert!(!app.pending.refresh);
        assert!(app.status_message.is_none());
        assert_eq!(app.view.registry.len(), 2);
        assert_eq!(app.view.indicator, Indicator::connected("b.co"));
        assert_eq!(app.connections.selected, 1);
    }

    #[test]
    fn refresh_that_shifts_rows_drops_delete_confirmation() {
        let mut app = App::new();
        app.view.apply_registry(registry(&["a.co", "b.co", "c.co"], 0));
        let label = app.view.registry.row(1).unwrap().label.clone();
        app.modal.confirm_delete(1, label);

        // b.co was removed elsewhere; index 1 is now c.co
        update(&mut app, BackendEvent::Refreshed(registry(&["a.co", "c.co"], 0)));

        assert!(!app.modal.is_open());
    }

    #[test]
    fn refresh_with_same_row_keeps_delete_confirmation() {
        let mut app = App::new();
        app.view.apply_registry(registry(&["a.co", "b.co"], 0));
        let label = app.view.registry.row(1).unwrap().label.clone();
        app.modal.confirm_delete(1, label);

        update(&mut app, BackendEvent::Refreshed(registry(&["a.co", "b.co"], 1)));

        assert!(matches!(
            app.modal.active,
            Some(Modal::ConfirmDelete { index: 1, .. })
        ));
    }

    #[test]
    fn loading_stays_while_other_requests_run() {
        let mut app = App::new();
        app_update(&mut app, AppMessage::Refresh);
        app_update(&mut app, AppMessage::Content(ContentMessage::Check));

        update(&mut app, BackendEvent::Refreshed(RegistryView::default()));
        assert!(app.status_message.is_some());

        update(
            &mut app,
            BackendEvent::Checked {
                indicator: Indicator::disconnected(),
                list: None,
            },
        );
        assert!(app.status_message.is_none());
    }

    #[test]
    fn successful_submit_clears_form() {
        let mut app = App::new();
        app.view.input = CredentialInput::new("a.co", "me@a.co", "tok");
        app_update(&mut app, AppMessage::Content(ContentMessage::Submit));

        update(
            &mut app,
            BackendEvent::Submitted(Ok(SubmitOutcome {
                state: FormState::Success {
                    message: "¡Conexión exitosa y guardada!".into(),
                },
                input: CredentialInput::default(),
                registry: Some(registry(&["a.co"], 0)),
            })),
        );

        assert!(!app.pending.submit);
        assert_eq!(app.view.input, CredentialInput::default());
        assert_eq!(app.view.registry.len(), 1);
        assert!(app.view.form.is_success());
        assert!(!app.modal.is_open());
        assert_eq!(
            app.view.notice.as_ref().map(|n| n.message.as_str()),
            Some("¡Conexión exitosa y guardada!")
        );
    }

    #[test]
    fn rejected_submit_keeps_fields_and_opens_notice() {
        let mut app = App::new();
        app.view.apply_registry(registry(&["a.co"], 0));
        let typed = CredentialInput::new("b.co", "me@b.co", "bad");

        update(
            &mut app,
            BackendEvent::Submitted(Ok(SubmitOutcome {
                state: FormState::Rejected {
                    message: "credenciales inválidas".into(),
                },
                input: typed.clone(),
                registry: None,
            })),
        );

        assert_eq!(app.view.input, typed);
        assert_eq!(app.view.registry.len(), 1);
        assert!(matches!(
            &app.modal.active,
            Some(Modal::Notice(notice)) if notice.message == "credenciales inválidas"
        ));
    }

    #[test]
    fn busy_submit_is_reported() {
        let mut app = App::new();
        update(
            &mut app,
            BackendEvent::Submitted(Err(CoreError::Busy("credential submission".into()))),
        );

        assert_eq!(app.view.form, FormState::Idle);
        let notice = app.view.notice.as_ref().unwrap();
        assert!(notice.is_error());
        assert_eq!(notice.message, t().errors.busy);
    }

    #[test]
    fn passing_check_updates_indicator_and_list() {
        let mut app = App::new();
        let view = registry(&["a.co"], 0);

        update(
            &mut app,
            BackendEvent::Checked {
                indicator: Indicator::connected("a.co"),
                list: Some(view.list.clone()),
            },
        );

        assert!(app.view.indicator.is_connected());
        assert_eq!(app.view.registry, view.list);
        assert!(!app.view.notice.as_ref().unwrap().is_error());
    }

    #[test]
    fn failing_check_does_not_open_modal() {
        let mut app = App::new();
        update(
            &mut app,
            BackendEvent::Checked {
                indicator: Indicator::disconnected(),
                list: None,
            },
        );

        assert!(!app.view.indicator.is_connected());
        assert!(app.view.notice.as_ref().unwrap().is_error());
        assert!(!app.modal.is_open());
    }

    #[test]
    fn failed_switch_keeps_previous_view() {
        let mut app = App::new();
        app.view.apply_registry(registry(&["a.co", "b.co"], 0));
        app.pending.row = true;

        update(
            &mut app,
            BackendEvent::RowActionDone {
                action: RowAction::Connect(5),
                result: Err(CoreError::Rejected {
                    status: 400,
                    message: "Índice fuera de rango".into(),
                }),
            },
        );

        assert!(!app.pending.row);
        assert_eq!(app.view.registry.len(), 2);
        assert_eq!(app.view.indicator, Indicator::connected("a.co"));
        let expected = format!("{}: Índice fuera de rango", t().registry.select_failed);
        assert!(matches!(
            &app.modal.active,
            Some(Modal::Notice(notice)) if notice.message == expected
        ));
    }

    #[test]
    fn delete_of_last_row_moves_highlight_up() {
        let mut app = App::new();
        app.view.apply_registry(registry(&["a.co", "b.co", "c.co"], 0));
        app.connections.selected = 2;

        update(
            &mut app,
            BackendEvent::RowActionDone {
                action: RowAction::Delete(2),
                result: Ok(registry(&["a.co", "b.co"], 0)),
            },
        );

        assert_eq!(app.connections.selected, 1);
        assert_eq!(
            app.view.notice.as_ref().map(|n| n.message.as_str()),
            Some(t().registry.deleted)
        );
    }

    #[test]
    fn query_results_reset_scroll() {
        let mut app = App::new();
        app.data.scroll = 7;
        let tables = ResultTables {
            tables: vec![Table {
                title: "Estados".into(),
                headers: vec!["ID".into(), "Nombre".into(), "Descripción".into()],
                rows: vec![vec!["1".into(), "To Do".into(), String::new()]],
            }],
        };

        update(&mut app, BackendEvent::QueryDone(Ok(tables.clone())));

        assert_eq!(app.data.scroll, 0);
        // title, header, rule, one row
        assert_eq!(app.data.content_lines, 4);
        assert_eq!(app.view.results, Some(tables));
        assert!(app.view.notice.is_none());
    }

    #[test]
    fn query_without_connection_is_reported() {
        let mut app = App::new();
        update(
            &mut app,
            BackendEvent::QueryDone(Err(CoreError::NoActiveConnection)),
        );

        assert!(app.view.results.is_none());
        assert!(matches!(
            &app.modal.active,
            Some(Modal::Notice(notice)) if notice.message == t().query.no_connection
        ));
    }
}
