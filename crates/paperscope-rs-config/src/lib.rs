//! Configuration models, credential loading and layered config loading.
//!
//! This crate owns the Paperscope config schema, the collaborator defaults
//! and the environment lookup for API keys used by the toolkit.

mod credentials;
mod error;
mod loader;
mod model;

/// Credentials resolved from the process environment.
pub use credentials::Credentials;
/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Layered config types and loader options.
pub use loader::{ConfigLayer, ConfigLayerSource, LayeredConfig, LayeredConfigOptions};
/// Configuration schema models.
pub use model::*;
