//! Utility modules.

/// Log sanitization helpers so bodies and tokens never hit the logs in full.
pub mod log_sanitizer;
