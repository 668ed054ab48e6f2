//! Widgets shared by every page

pub mod modal;
pub mod navigation;
pub mod statusbar;
