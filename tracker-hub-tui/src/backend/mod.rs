//! Backend layer: config file and core service dispatch
//!
//! - `config_service`: reads and writes `AppConfig`
//! - `core_service`: runs core calls as runtime tasks and reports back

mod config_service;
mod core_service;

pub use config_service::{AppConfig, ConfigService, LocalConfigService};
pub use core_service::CoreService;
