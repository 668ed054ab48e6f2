//! # tracker-hub-backend
//!
//! Client side of the Tracker Hub connection backend: the wire types, the
//! [`TrackerBackend`] contract and its HTTP implementation.
//!
//! The backend owns an ordered list of saved tracker connections, a `current`
//! pointer and an `active` flag. It also verifies credentials against the
//! remote tracker and runs data queries with the active connection.
//!
//! ## Endpoints
//!
//! | Method | Path | Trait method |
//! |--------|------|--------------|
//! | GET | `/connection_status` | [`TrackerBackend::connection_status`] |
//! | GET | `/getconnections` | [`TrackerBackend::list_connections`] |
//! | GET | `/deleteconnection?index=` | [`TrackerBackend::delete_connection`] |
//! | GET | `/setcurrent?index=` | [`TrackerBackend::set_current`] |
//! | POST | `/testjira` | [`TrackerBackend::test_credentials`] |
//! | POST | `/execute` | [`TrackerBackend::execute`] |
//!
//! ## Feature Flags
//!
//! - **`rustls`** *(default)*: Use rustls.
//! - **`native-tls`**: Use the platform's native TLS implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tracker_hub_backend::{create_backend, ClientConfig, Connection, TrackerBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let backend = create_backend(&ClientConfig::default())?;
//!
//!     let snapshot = backend.connection_status().await?;
//!     match snapshot.active_connection() {
//!         Some(conn) => println!("connected to {}", conn.domain),
//!         None => println!("disconnected"),
//!     }
//!
//!     let reply = backend
//!         .test_credentials(&Connection::new("acme.atlassian.net", "me@acme.io", "token"))
//!         .await?;
//!     println!("{}", reply.message);
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every call returns [`Result<T, BackendError>`](BackendError):
//!
//! - [`BackendError::NetworkError`] / [`BackendError::Timeout`]: no response
//! - [`BackendError::Rejected`]: non-2xx status, with the backend's reason
//! - [`BackendError::ParseError`]: 2xx with an undecodable body
//!
//! Nothing is retried.

mod config;
mod error;
mod factory;
mod http;
mod http_client;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{BackendError, Result};

// Re-export configuration and factory
pub use config::{ClientConfig, DEFAULT_BASE_URL};
pub use factory::create_backend;

// Re-export the contract and its HTTP implementation
pub use http::HttpBackend;
pub use traits::TrackerBackend;

// Re-export types
pub use types::{
    Connection, ConnectionList, ConnectionSnapshot, ExecuteRequest, ExecuteResult, NO_CURRENT,
    ProjectCategory, TrackerProject, TrackerStatus, TrackerWorkflow, Transition, VerifyResponse,
    WorkflowId,
};

// Re-export utils
pub use utils::log_sanitizer;
