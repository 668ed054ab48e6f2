//! Message layer
//!
//! - `AppMessage`: everything the update layer consumes, built by the event
//!   layer from key presses or by the main loop from backend events
//! - `Command`: backend work requested by the update layer
//! - `BackendEvent`: the result of a finished command

mod app;
mod backend;
mod content;
mod modal;
mod navigation;

pub use app::AppMessage;
pub use backend::{BackendEvent, Command};
pub use content::ContentMessage;
pub use modal::ModalMessage;
pub use navigation::NavigationMessage;
