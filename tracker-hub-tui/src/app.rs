//! Main loop
//!
//! Each frame:
//!
//! ```text
//! loop {
//!     drain backend events      // results of finished commands
//!     draw                      // view::render(&app, frame)
//!     quit check
//!     poll input (100 ms)       // event -> message -> update -> command
//!     dispatch command          // spawned on the runtime, never awaited here
//! }
//! ```

use std::time::Duration;

use anyhow::Result;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::backend::CoreService;
use crate::event;
use crate::message::{AppMessage, BackendEvent};
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const FRAME_TIMEOUT: Duration = Duration::from_millis(100);

/// Runs the UI until the user quits.
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    core: &CoreService,
    mut events: UnboundedReceiver<BackendEvent>,
) -> Result<()> {
    let size = terminal.size()?;
    apply(app, core, AppMessage::Resize(size.height));
    // Startup: full re-read of the list and the indicator
    apply(app, core, AppMessage::Refresh);

    loop {
        while let Ok(event) = events.try_recv() {
            apply(app, core, AppMessage::Backend(event));
        }

        terminal.draw(|frame| view::render(app, frame))?;

        if app.should_quit {
            break;
        }

        if let Some(event) = event::poll_event(FRAME_TIMEOUT)? {
            let msg = event::handle_event(event, app);
            apply(app, core, msg);
        }
    }

    Ok(())
}

fn apply(app: &mut App, core: &CoreService, msg: AppMessage) {
    if let Some(command) = update::update(app, msg) {
        core.dispatch(command);
    }
}
