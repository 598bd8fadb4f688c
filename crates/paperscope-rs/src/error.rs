//! Error types for toolkit bootstrap.

use paperscope_rs_config::ConfigError;
use paperscope_rs_protocol::ToolError;
use thiserror::Error;

/// Errors returned while assembling a [`Toolkit`](crate::Toolkit).
#[derive(Debug, Error)]
pub enum ToolkitError {
    /// Config loading or validation failed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// The model hub rejected the login handshake.
    #[error("model hub login failed: {0}")]
    ModelHub(ToolError),
    /// A collaborator could not be built.
    #[error("collaborator setup failed: {0}")]
    Collaborator(#[from] ToolError),
}
