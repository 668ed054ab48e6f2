//! Presentation state handed to the renderer

use chrono::{DateTime, Local, Utc};
use serde::Serialize;

use crate::error::CoreError;
use crate::i18n::t;

use super::form::{CredentialInput, FormState, SubmitOutcome};
use super::query::{QuerySelection, ResultTables};
use super::registry::{ConnectionListView, Indicator, RegistryView};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// User-visible message for the outcome of an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub at: DateTime<Utc>,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
            at: Utc::now(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
            at: Utc::now(),
        }
    }

    /// Error notice for a failed action, prefixed with `context`.
    pub fn from_error(context: &str, err: &CoreError) -> Self {
        let message = match err {
            CoreError::Busy(_) => t().errors.busy.to_string(),
            CoreError::NoActiveConnection => t().query.no_connection.to_string(),
            CoreError::Rejected { message, .. } if message.is_empty() => context.to_string(),
            CoreError::Rejected { message, .. } => format!("{context}: {message}"),
            CoreError::Unavailable(detail) | CoreError::InvalidLocalInput(detail) => {
                format!("{context}: {detail}")
            }
        };
        Self::error(message)
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    /// When the notice was raised, as local `HH:MM`.
    pub fn time_label(&self) -> String {
        self.at.with_timezone(&Local).format("%H:%M").to_string()
    }
}

/// Everything the front-end renders. Each part is replaced wholesale.
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    pub indicator: Indicator,
    pub registry: ConnectionListView,
    pub input: CredentialInput,
    pub form: FormState,
    pub notice: Option<Notice>,
    pub results: Option<ResultTables>,
    pub selection: QuerySelection,
}

impl ViewModel {
    pub fn apply_registry(&mut self, view: RegistryView) {
        self.registry = view.list;
        self.indicator = view.indicator;
    }

    pub fn apply_indicator(&mut self, indicator: Indicator) {
        self.indicator = indicator;
    }

    /// Applies a finished submission: state, field contents, refreshed
    /// registry (success only) and the matching notice.
    pub fn apply_submit(&mut self, outcome: SubmitOutcome) {
        let notice = match &outcome.state {
            FormState::Idle | FormState::Submitting => None,
            FormState::Success { message } => Some(Notice::info(message.clone())),
            FormState::Rejected { message } | FormState::Invalid { reason: message } => {
                Some(Notice::error(message.clone()))
            }
            FormState::Unavailable { reason } => Some(Notice::error(format!(
                "{}: {reason}",
                t().form.unavailable
            ))),
        };

        self.form = outcome.state;
        self.input = outcome.input;
        if let Some(view) = outcome.registry {
            self.apply_registry(view);
        }
        if let Some(notice) = notice {
            self.notice = Some(notice);
        }
    }

    pub fn apply_results(&mut self, tables: ResultTables) {
        self.results = Some(tables);
    }

    pub fn notify(&mut self, notice: Notice) {
        self.notice = Some(notice);
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use tracker_hub_backend::{Connection, ConnectionList};

    use super::*;

    fn registry(domains: &[&str], current: i64) -> RegistryView {
        let list = ConnectionList {
            connections: domains
                .iter()
                .map(|d| Connection::new(*d, "me", "t"))
                .collect(),
            current,
        };
        RegistryView {
            list: ConnectionListView::from_list(&list),
            indicator: Indicator::connected(domains[0]),
        }
    }

    #[test]
    fn time_label_is_local_hours_and_minutes() {
        use chrono::TimeZone;

        let raised = Local
            .with_ymd_and_hms(2026, 3, 10, 9, 5, 42)
            .single()
            .unwrap();
        let notice = Notice {
            at: raised.with_timezone(&Utc),
            ..Notice::info("Conexión eliminada")
        };

        assert_eq!(notice.time_label(), "09:05");
    }

    #[test]
    fn registry_is_fully_replaced() {
        let mut vm = ViewModel::default();
        vm.apply_registry(registry(&["a.co", "b.co"], 0));
        assert_eq!(vm.registry.len(), 2);

        vm.apply_registry(RegistryView::default());
        assert!(vm.registry.is_empty());
        assert!(!vm.indicator.is_connected());
    }

    #[test]
    fn successful_submit_replaces_input_and_registry() {
        let mut vm = ViewModel {
            input: CredentialInput::new("a.co", "me", "t"),
            ..ViewModel::default()
        };
        vm.apply_submit(SubmitOutcome {
            state: FormState::Success {
                message: "¡Conexión exitosa y guardada!".into(),
            },
            input: CredentialInput::default(),
            registry: Some(registry(&["a.co"], 0)),
        });

        assert_eq!(vm.input, CredentialInput::default());
        assert_eq!(vm.registry.len(), 1);
        let notice = vm.notice.unwrap();
        assert!(!notice.is_error());
        assert_eq!(notice.message, "¡Conexión exitosa y guardada!");
    }

    #[test]
    fn rejected_submit_keeps_registry() {
        let mut vm = ViewModel::default();
        vm.apply_registry(registry(&["a.co"], 0));
        vm.apply_submit(SubmitOutcome {
            state: FormState::Rejected {
                message: "credenciales inválidas".into(),
            },
            input: CredentialInput::new("b.co", "me", "bad"),
            registry: None,
        });

        assert_eq!(vm.registry.len(), 1);
        assert_eq!(vm.input.domain, "b.co");
        assert!(vm.notice.as_ref().unwrap().is_error());
    }

    #[test]
    fn notice_from_errors() {
        let rejected = Notice::from_error(
            "Error al cambiar la conexión",
            &CoreError::Rejected {
                status: 400,
                message: "Índice fuera de rango".into(),
            },
        );
        assert_eq!(rejected.message, "Error al cambiar la conexión: Índice fuera de rango");

        let bare = Notice::from_error(
            "Error al eliminar la conexión",
            &CoreError::Rejected {
                status: 500,
                message: String::new(),
            },
        );
        assert_eq!(bare.message, "Error al eliminar la conexión");

        let busy = Notice::from_error("x", &CoreError::Busy("select".into()));
        assert_eq!(busy.message, "Ya hay una solicitud en curso");
        assert!(busy.is_error());
    }
}
