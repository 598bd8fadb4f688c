//! Adaptor for the autoagents tool trait.
//!
//! Agents call research tools through [`ToolAdaptor`]; every call still goes
//! through [`ToolContext::execute_tool`] so result handlers see agent calls
//! the same way they see direct registry calls.

use crate::{Tool, ToolContext};
use async_trait::async_trait;
use autoagents_core::tool::{ToolCallError, ToolRuntime, ToolT};
use log::{debug, warn};
use paperscope_rs_protocol::ToolError;
use parking_lot::RwLock;
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Exposes a Paperscope tool to an AutoAgents agent.
///
/// The argument schema is shaped once when the adaptor is built; the agent
/// reads it on every planning step.
#[derive(Clone)]
pub struct ToolAdaptor {
    /// Wrapped tool implementation.
    tool: Arc<dyn Tool>,
    /// Shared tool context.
    ctx: Arc<RwLock<ToolContext>>,
    /// Schema captured from the tool at construction.
    args_schema: Value,
}

impl ToolAdaptor {
    /// Create a new tool adaptor.
    pub fn new(tool: Arc<dyn Tool>, ctx: Arc<RwLock<ToolContext>>) -> Self {
        let args_schema = tool.args_schema();
        Self {
            tool,
            ctx,
            args_schema,
        }
    }

    /// Tool wrapped by this adaptor.
    pub fn tool(&self) -> &Arc<dyn Tool> {
        &self.tool
    }
}

impl fmt::Debug for ToolAdaptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolAdaptor")
            .field("name", &self.tool.name())
            .finish()
    }
}

#[async_trait]
impl ToolRuntime for ToolAdaptor {
    /// Execute a tool call on a per-call copy of the shared context.
    async fn execute(&self, args: Value) -> Result<Value, ToolCallError> {
        let mut ctx = self.ctx.read().clone();
        debug!(
            "agent tool call (name={}, agent_id={})",
            self.tool.name(),
            ctx.agent_id
        );
        ctx.execute_tool(self.tool.as_ref(), args)
            .await
            .map_err(|err| {
                match &err {
                    ToolError::Collaborator(message) => warn!(
                        "collaborator failed during agent call (name={}, error={})",
                        self.tool.name(),
                        message
                    ),
                    other => debug!(
                        "agent tool call rejected (name={}, error={})",
                        self.tool.name(),
                        other
                    ),
                }
                ToolCallError::RuntimeError(Box::new(err))
            })
    }
}

impl ToolT for ToolAdaptor {
    fn name(&self) -> &str {
        self.tool.name()
    }

    fn description(&self) -> &str {
        self.tool.description()
    }

    fn args_schema(&self) -> Value {
        self.args_schema.clone()
    }
}

/// Wrap a tool with an adaptor for AutoAgents.
pub fn tool_to_adaptor(tool: Arc<dyn Tool>, ctx: Arc<RwLock<ToolContext>>) -> Arc<dyn ToolT> {
    Arc::new(ToolAdaptor::new(tool, ctx))
}

/// Wrap multiple tools with adaptors for AutoAgents.
pub fn tools_to_adaptors(
    tools: Vec<Arc<dyn Tool>>,
    ctx: Arc<RwLock<ToolContext>>,
) -> Vec<Arc<dyn ToolT>> {
    tools
        .into_iter()
        .map(|tool| tool_to_adaptor(tool, ctx.clone()))
        .collect()
}
