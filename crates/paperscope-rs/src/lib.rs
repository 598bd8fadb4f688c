//! Public SDK surface for Paperscope.
//!
//! This crate re-exports the config, protocol and tool crates and provides
//! [`Toolkit`], which turns a config and a [`CollaboratorFactory`] into a
//! registry of research tools ready to hand to an agent.

mod error;
mod toolkit;

/// Re-export for convenience.
pub use paperscope_rs_config as config;
/// Re-export for convenience.
pub use paperscope_rs_protocol as protocol;
/// Re-export for convenience.
pub use paperscope_rs_tools as tools;

pub use error::ToolkitError;
pub use paperscope_rs_tools::CollaboratorFactory;
pub use toolkit::Toolkit;

#[inline]
/// Initialize logging using env_logger.
///
/// Safe to call more than once; later calls are ignored. Binaries are expected
/// to call this early in startup to ensure log output is wired up.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
