//! Tool trait definition and the metadata agents see when picking a tool.

use crate::context::ToolContext;
use async_trait::async_trait;
use paperscope_rs_protocol::ToolError;
use serde_json::Value;
use std::fmt::Debug;

/// Name, planner-facing description and argument schema of a tool.
///
/// Several `loadpaper` variants share one name, so a spec is not a unique key
/// outside a single registry.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolSpec {
    /// Tool name.
    pub name: String,
    /// Natural-language description shown to the planner.
    pub description: String,
    /// JSON schema for tool arguments.
    pub args_schema: Value,
    /// Whether calls may run concurrently with other tool calls.
    pub parallel: bool,
}

/// A named, schema-validated callable exposed to an agent.
///
/// Research tools validate arguments, forward them to a collaborator and
/// return the collaborator's value unmodified.
#[async_trait]
pub trait Tool: Send + Sync + Debug {
    /// Return the tool name.
    fn name(&self) -> &str;
    /// Return the tool description.
    fn description(&self) -> &str;
    /// Return the JSON schema for tool arguments.
    fn args_schema(&self) -> Value;

    /// Whether the tool holds no per-call state and may run in parallel.
    fn supports_parallel(&self) -> bool {
        false
    }

    /// Validate `args` and run the tool.
    ///
    /// Malformed arguments are reported as `ToolError::InvalidArguments`
    /// before anything is forwarded.
    async fn call(&self, ctx: &ToolContext, args: Value) -> Result<Value, ToolError>;

    /// Build a `ToolSpec` describing this tool.
    fn spec(&self) -> ToolSpec {
        ToolSpec {
            name: self.name().to_string(),
            description: self.description().to_string(),
            args_schema: self.args_schema(),
            parallel: self.supports_parallel(),
        }
    }
}
