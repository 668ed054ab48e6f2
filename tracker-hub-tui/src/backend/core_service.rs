//! Runs core service calls off the UI thread
//!
//! Every [`Command`] becomes one runtime task. The task runs the whole chain
//! for its action (mutation, then re-read) and sends a single
//! [`BackendEvent`] back; the main loop applies it on the next frame.

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use tracker_hub_core::Services;

use crate::message::{BackendEvent, Command};

/// Dispatches commands to the core services.
pub struct CoreService {
    rt: Handle,
    services: Arc<Services>,
    events: UnboundedSender<BackendEvent>,
}

impl CoreService {
    pub fn new(rt: Handle, services: Arc<Services>, events: UnboundedSender<BackendEvent>) -> Self {
        Self {
            rt,
            services,
            events,
        }
    }

    /// Spawns the command; its result arrives later as a [`BackendEvent`].
    pub fn dispatch(&self, command: Command) {
        log::debug!("Dispatching {command:?}");
        let services = Arc::clone(&self.services);
        let events = self.events.clone();
        self.rt.spawn(async move {
            let event = execute(&services, command).await;
            if events.send(event).is_err() {
                log::debug!("UI loop gone, backend event dropped");
            }
        });
    }
}

/// Runs one command to completion.
async fn execute(services: &Services, command: Command) -> BackendEvent {
    match command {
        Command::Refresh => BackendEvent::Refreshed(services.registry.refresh().await),
        Command::Submit(input) => BackendEvent::Submitted(services.form.submit(input).await),
        Command::Check(input) => {
            let indicator = services.indicator.check_and_indicate(&input).await;
            // A passing check is stored by the backend, so the list may have grown
            let list = if indicator.is_connected() {
                Some(services.registry.list_connections().await)
            } else {
                None
            };
            BackendEvent::Checked { indicator, list }
        }
        Command::Row(action) => BackendEvent::RowActionDone {
            action,
            result: services.registry.perform(action).await,
        },
        Command::Execute(selection) => {
            BackendEvent::QueryDone(services.query.execute(selection).await)
        }
    }
}
