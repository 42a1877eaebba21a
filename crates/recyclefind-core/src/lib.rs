//! Shared types for the recycling business finder.
//!
//! Holds the query/response data model exchanged with the remote search
//! service, the error taxonomy surfaced to users, and environment-driven
//! configuration.

pub mod app_config;
pub mod config;
pub mod error;
pub mod records;
pub mod response;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use error::{ConfigError, ErrorKind, FinderError};
pub use records::{BusinessRecord, Coordinates};
pub use response::{SearchQuery, SearchResponse};
