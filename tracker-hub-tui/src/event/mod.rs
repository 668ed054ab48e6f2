//! Event layer: turns terminal input into `AppMessage`s
//!
//! - `poll_event` waits up to the frame timeout for input
//! - `handle_event` maps one key press to one message, looking at the open
//!   modal, the current page and the focused control

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
