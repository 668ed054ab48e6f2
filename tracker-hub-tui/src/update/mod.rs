//! Update layer
//!
//! `update` applies one message to the model and may ask for backend work
//! by returning a [`Command`]. It never blocks: the command runs as a task
//! and its result comes back later as [`AppMessage::Backend`].

mod backend;
mod content;
mod modal;
mod navigation;

use tracker_hub_core::i18n::{current_language, set_language};

use crate::message::{AppMessage, Command};
use crate::model::App;
use crate::view;

/// Applies a message, returning the backend command it triggers.
pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            None
        }

        AppMessage::Navigation(nav_msg) => {
            navigation::update(app, nav_msg);
            None
        }

        AppMessage::Content(content_msg) => content::update(app, content_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Backend(event) => {
            backend::update(app, event);
            None
        }

        AppMessage::Refresh => refresh(app),

        AppMessage::ShowHelp => {
            app.modal.show_help();
            None
        }

        AppMessage::Resize(height) => {
            app.data.set_viewport(view::results_viewport(height));
            None
        }

        AppMessage::SwitchLanguage => {
            let next = current_language().next();
            set_language(next);
            log::info!("Language switched to {}", next.code());
            // Row labels are built in the active language; re-read them
            refresh(app)
        }

        AppMessage::DismissNotice => {
            app.view.dismiss_notice();
            None
        }

        AppMessage::Noop => None,
    }
}

/// Full re-read of the list and the indicator, unless one is running.
pub fn refresh(app: &mut App) -> Option<Command> {
    if app.pending.refresh {
        return None;
    }
    app.pending.refresh = true;
    app.set_loading();
    Some(Command::Refresh)
}
