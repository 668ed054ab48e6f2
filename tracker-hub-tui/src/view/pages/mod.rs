//! Page bodies

pub mod connections;
pub mod data;
