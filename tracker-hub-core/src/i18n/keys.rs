//! Translation key definitions
//!
//! Texts are grouped by where they appear:
//!
//! 1. **Core-derived labels** (`indicator`, `registry`, `form`, `query`, `tables`):
//!    produced by the services and view model
//! 2. **Front-end chrome** (`nav`, `status_bar`, `modal`, `help`, `hints`)
//! 3. **Shared words** go to `common`

/// Root of all translation texts
pub struct Translations {
    pub common: CommonTexts,
    pub nav: NavTexts,
    /// Connection status indicator
    pub indicator: IndicatorTexts,
    /// Saved connection list
    pub registry: RegistryTexts,
    /// Credential form
    pub form: FormTexts,
    /// Data query page
    pub query: QueryTexts,
    /// Result table titles and headers
    pub tables: TableTexts,
    /// Generic error notices
    pub errors: ErrorTexts,
    pub status_bar: StatusBarTexts,
    pub modal: ModalTexts,
    pub hints: HintTexts,
    pub help: HelpTexts,
}

// ============================================================================
// Shared words
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub yes: &'static str,
    pub no: &'static str,
    pub cancel: &'static str,
    pub confirm: &'static str,
    pub close: &'static str,
    pub loading: &'static str,
    pub on: &'static str,
    pub off: &'static str,
}

pub struct NavTexts {
    pub connections: &'static str,
    pub data: &'static str,
}

// ============================================================================
// Core-derived labels
// ============================================================================

pub struct IndicatorTexts {
    pub disconnected: &'static str,
}

pub struct RegistryTexts {
    pub title: &'static str,
    pub empty: &'static str,
    pub connect: &'static str,
    pub connected: &'static str,
    pub delete: &'static str,
    /// Notice after a successful switch
    pub selected: &'static str,
    /// Notice after a successful delete
    pub deleted: &'static str,
    pub select_failed: &'static str,
    pub delete_failed: &'static str,
}

pub struct FormTexts {
    pub title: &'static str,
    pub domain: &'static str,
    pub account: &'static str,
    pub token: &'static str,
    pub submit: &'static str,
    pub check: &'static str,
    pub submitting: &'static str,
    pub checking: &'static str,
    /// Shown when a rejection carries no reason
    pub fallback_error: &'static str,
    pub missing_fields: &'static str,
    /// Prefix for transport failures
    pub unavailable: &'static str,
    pub check_ok: &'static str,
    pub check_failed: &'static str,
}

pub struct QueryTexts {
    pub title: &'static str,
    pub projects: &'static str,
    pub workflows: &'static str,
    pub statuses: &'static str,
    pub execute: &'static str,
    pub running: &'static str,
    pub no_connection: &'static str,
    /// Prefix for query failures
    pub failed: &'static str,
    pub empty_result: &'static str,
    pub results: &'static str,
}

pub struct TableTexts {
    pub statuses: &'static str,
    pub projects: &'static str,
    pub workflows: &'static str,
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub key: &'static str,
    pub workflow: &'static str,
    pub transitions: &'static str,
    pub from: &'static str,
    pub to: &'static str,
    /// Origin of an initial transition
    pub start: &'static str,
}

pub struct ErrorTexts {
    pub busy: &'static str,
    pub unavailable: &'static str,
}

// ============================================================================
// Front-end chrome
// ============================================================================

pub struct StatusBarTexts {
    pub ready: &'static str,
    pub loading: &'static str,
}

pub struct ModalTexts {
    pub confirm_delete_title: &'static str,
    pub confirm_delete_message: &'static str,
    pub notice_title: &'static str,
    pub error_title: &'static str,
}

pub struct HintTexts {
    pub switch_page: &'static str,
    pub next_field: &'static str,
    pub move_up_down: &'static str,
    pub submit: &'static str,
    pub check: &'static str,
    pub connect: &'static str,
    pub delete: &'static str,
    pub refresh: &'static str,
    pub toggle: &'static str,
    pub execute: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
    pub dismiss: &'static str,
}

pub struct HelpTexts {
    pub title: &'static str,
    pub global_shortcuts: &'static str,
    pub connections_shortcuts: &'static str,
    pub data_shortcuts: &'static str,
    pub language: &'static str,
}
