//! View layer: renders the model, never changes it

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::{render, results_viewport};
pub use pages::data::result_line_count;
