//! Tracker Hub Core Library
//!
//! Client-side logic for a multi-account issue-tracker hub:
//! - Connection registry (`RegistryService`): reads, switch and delete, each
//!   mutation followed by a full re-read
//! - Status indicator (`derive_indicator`, `IndicatorService`)
//! - Credential form (`ConnectionFormController`)
//! - Data queries (`QueryService`) rendered into `ResultTables`
//!
//! The backend is reached only through `Arc<dyn TrackerBackend>`, so the
//! crate is independent of the front-end and of the transport.

pub mod error;
pub mod i18n;
pub mod services;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{
    ConnectionFormController, IndicatorService, QueryService, RegistryService, ServiceContext,
    Services, derive_indicator,
};
pub use tracker_hub_backend::{ClientConfig, TrackerBackend, create_backend};
