//! Tracker Hub TUI
//!
//! ## Architecture
//!
//! Elm Architecture (TEA):
//! - **Model**: application state (`model/`), wrapping the core `ViewModel`
//! - **Message**: events and commands (`message/`)
//! - **Update**: state transitions (`update/`)
//! - **View**: rendering (`view/`)
//! - **Event**: terminal input (`event/`)
//! - **Backend**: config file and core service dispatch (`backend/`)
//!
//! The UI loop runs on the main thread. Backend requests run as tasks on a
//! tokio runtime and report back through an unbounded channel drained once
//! per frame, so a slow backend never blocks input or redraws.
//!
//! Startup order:
//!
//! ```text
//! load config -> init logging -> language + theme -> runtime
//!   -> backend client + services -> terminal -> app::run -> restore terminal
//!   -> save language
//! ```

mod app;
mod backend;
mod event;
mod message;
mod model;
mod update;
mod util;
mod view;

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::runtime::Runtime;
use tokio::sync::mpsc;

use tracker_hub_core::i18n::{Language, current_language, set_language};
use tracker_hub_core::{ClientConfig, ServiceContext, Services, create_backend};

use backend::{ConfigService, CoreService, LocalConfigService};
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<()> {
    // 1. Config and logging
    let config_service = LocalConfigService::new()?;
    let mut config = config_service.load()?;
    let log_path = init_logging(&config)?;
    log::info!(
        "Starting Tracker Hub against {} (log file {})",
        config.backend_url,
        log_path.display()
    );

    // 2. Language and theme
    set_language(Language::from_code(&config.language).unwrap_or_default());
    view::theme::set_theme(config.theme);

    // 3. Runtime and services
    let rt = Runtime::new().context("failed to initialize tokio runtime")?;
    let backend = create_backend(&ClientConfig::new(config.backend_url.clone()))
        .context("invalid backend URL in config")?;
    let services = Arc::new(Services::new(Arc::new(ServiceContext::new(backend))));
    let (events_tx, events_rx) = mpsc::unbounded_channel();
    let core = CoreService::new(rt.handle().clone(), services, events_tx);

    // 4. Terminal
    let mut terminal =
        init_terminal().context("failed to initialize terminal; are you running in a real TTY?")?;

    let mut app = model::App::new();
    let result = app::run(&mut terminal, &mut app, &core, events_rx);

    // 5. Restore the terminal whatever the outcome
    restore_terminal(&mut terminal)?;

    // 6. Keep the language picked with Alt+l for the next start
    let language = current_language().code();
    if config.language != language {
        config.language = language.to_string();
        if let Err(e) = config_service.save(&config) {
            log::warn!("Failed to save config: {e:#}");
        }
    }

    log::info!("Tracker Hub stopped");
    result
}
