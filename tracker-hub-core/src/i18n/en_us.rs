//! English translations (en-US)

use super::keys::{
    CommonTexts, ErrorTexts, FormTexts, HelpTexts, HintTexts, IndicatorTexts, ModalTexts,
    NavTexts, QueryTexts, RegistryTexts, StatusBarTexts, TableTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Tracker Hub",
        yes: "Yes",
        no: "No",
        cancel: "Cancel",
        confirm: "Confirm",
        close: "Close",
        loading: "Loading...",
        on: "On",
        off: "Off",
    },

    nav: NavTexts {
        connections: "Connections",
        data: "Data",
    },

    indicator: IndicatorTexts {
        disconnected: "Disconnected",
    },

    registry: RegistryTexts {
        title: "Saved connections",
        empty: "No saved connections",
        connect: "Connect",
        connected: "Connected",
        delete: "Delete",
        selected: "Connection switched",
        deleted: "Connection deleted",
        select_failed: "Failed to switch connection",
        delete_failed: "Failed to delete connection",
    },

    form: FormTexts {
        title: "New connection",
        domain: "Domain",
        account: "E-mail",
        token: "Token",
        submit: "Save",
        check: "Check",
        submitting: "Connecting...",
        checking: "Checking...",
        fallback_error: "Connection failed. Check your details.",
        missing_fields: "Fill in domain, e-mail and token.",
        unavailable: "Could not test the connection",
        check_ok: "Credentials are valid",
        check_failed: "Credentials are not valid",
    },

    query: QueryTexts {
        title: "Query",
        projects: "Projects",
        workflows: "Workflows",
        statuses: "Statuses",
        execute: "Execute",
        running: "Running...",
        no_connection: "No connection configured. Set one up on the Connections page.",
        failed: "Query failed",
        empty_result: "No results",
        results: "Results",
    },

    tables: TableTexts {
        statuses: "Statuses",
        projects: "Projects",
        workflows: "Workflows",
        id: "ID",
        name: "Name",
        description: "Description",
        key: "Key",
        workflow: "Workflow",
        transitions: "Transitions",
        from: "From",
        to: "To",
        start: "Start",
    },

    errors: ErrorTexts {
        busy: "A request is already in progress",
        unavailable: "Backend unavailable",
    },

    status_bar: StatusBarTexts {
        ready: "Ready",
        loading: "Loading...",
    },

    modal: ModalTexts {
        confirm_delete_title: "Delete connection",
        confirm_delete_message: "Are you sure you want to delete this connection?",
        notice_title: "Notice",
        error_title: "Error",
    },

    hints: HintTexts {
        switch_page: "Switch page",
        next_field: "Next field",
        move_up_down: "Move",
        submit: "Save",
        check: "Check",
        connect: "Connect",
        delete: "Delete",
        refresh: "Refresh",
        toggle: "Toggle",
        execute: "Execute",
        help: "Help",
        quit: "Quit",
        dismiss: "Close",
    },

    help: HelpTexts {
        title: "Help",
        global_shortcuts: "Global shortcuts",
        connections_shortcuts: "Connections page",
        data_shortcuts: "Data page",
        language: "Language",
    },
};
