//! Shared configuration library for Taskdeck.
//!
//! Configuration is composed from an optional TOML file and environment
//! variables (after loading `.env`), with environment values taking
//! precedence. The server re-exports these types so there is a single source
//! of truth for defaults and validation rules.
#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod util;
pub mod validation;

pub use loader::{ConfigLoad, ConfigLoader, error::ConfigLoadError};
pub use models::{
    Config, ConfigMetadata, CorsConfig, DemoConfig, ListingConfig,
    ServerConfig,
};
pub use models::sources::{EnvConfig, FileConfig};
pub use validation::{ConfigGuardRailError, ConfigWarning, ConfigWarnings};
