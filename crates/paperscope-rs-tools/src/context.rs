//! Tool execution context and result recording.

use crate::Tool;
use async_trait::async_trait;
use log::{debug, warn};
use paperscope_rs_protocol::{SessionId, ToolCallId, ToolError};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

/// Handler interface used to capture tool outputs.
#[async_trait]
pub trait ToolResultHandler: Send + Sync {
    /// Record a tool invocation result for this context.
    async fn record_tool_result(
        &self,
        ctx: &ToolContext,
        name: &str,
        args: &Value,
        result: &Value,
    ) -> Result<(), ToolError>;
}

/// Context passed to tools during execution.
///
/// Cloning is cheap; the optional result handler is shared behind an `Arc`.
#[derive(Clone)]
pub struct ToolContext {
    /// Session id associated with the tool call.
    pub session_id: SessionId,
    /// Agent id that requested the tool.
    pub agent_id: String,
    /// Tool call id for the current invocation.
    pub tool_call_id: Option<ToolCallId>,
    /// Tool name for the current invocation.
    pub tool_name: Option<String>,
    /// Optional handler for recording tool results.
    pub result_handler: Option<Arc<dyn ToolResultHandler>>,
}

impl ToolContext {
    /// Create a context for a session and agent.
    pub fn new(session_id: SessionId, agent_id: impl Into<String>) -> Self {
        Self {
            session_id,
            agent_id: agent_id.into(),
            tool_call_id: None,
            tool_name: None,
            result_handler: None,
        }
    }

    /// Attach a result handler.
    pub fn with_result_handler(mut self, handler: Arc<dyn ToolResultHandler>) -> Self {
        self.result_handler = Some(handler);
        self
    }

    /// Execute a tool and record its result.
    ///
    /// The tool output is returned exactly as produced and tool errors are
    /// returned unchanged. Handler failures are logged and ignored.
    pub async fn execute_tool(&mut self, tool: &dyn Tool, args: Value) -> Result<Value, ToolError> {
        self.tool_name = Some(tool.name().to_string());
        self.tool_call_id = Some(Uuid::new_v4());
        debug!(
            "executing tool (name={}, session_id={}, agent_id={})",
            tool.name(),
            self.session_id,
            self.agent_id
        );

        let record_args = self.result_handler.as_ref().map(|_| args.clone());
        let result = tool.call(self, args).await;
        match &result {
            Ok(value) => {
                if let (Some(handler), Some(record_args)) =
                    (self.result_handler.as_ref(), record_args.as_ref())
                    && let Err(err) = handler
                        .record_tool_result(self, tool.name(), record_args, value)
                        .await
                {
                    warn!(
                        "tool result handler failed (tool_name={}, session_id={}): {}",
                        tool.name(),
                        self.session_id,
                        err
                    );
                }
            }
            Err(err) => {
                debug!("tool failed (name={}): {}", tool.name(), err);
            }
        }
        result
    }
}

impl std::fmt::Debug for ToolContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToolContext")
            .field("session_id", &self.session_id)
            .field("agent_id", &self.agent_id)
            .field("tool_call_id", &self.tool_call_id)
            .field("tool_name", &self.tool_name)
            .field("result_handler", &self.result_handler.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::{ToolContext, ToolResultHandler};
    use crate::Tool;
    use async_trait::async_trait;
    use paperscope_rs_protocol::ToolError;
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use uuid::Uuid;

    #[derive(Debug)]
    struct EchoTool {
        fail: bool,
    }

    #[async_trait]
    impl Tool for EchoTool {
        fn name(&self) -> &str {
            "Echo"
        }

        fn description(&self) -> &str {
            "echo"
        }

        fn args_schema(&self) -> Value {
            json!({})
        }

        async fn call(&self, ctx: &ToolContext, args: Value) -> Result<Value, ToolError> {
            if self.fail {
                return Err(ToolError::Collaborator("upstream down".to_string()));
            }
            Ok(json!({ "args": args, "tool_name": ctx.tool_name }))
        }
    }

    #[derive(Default)]
    struct RecordingHandler {
        records: Mutex<Vec<(String, Value, Value)>>,
        fail: bool,
    }

    #[async_trait]
    impl ToolResultHandler for RecordingHandler {
        async fn record_tool_result(
            &self,
            _ctx: &ToolContext,
            name: &str,
            args: &Value,
            result: &Value,
        ) -> Result<(), ToolError> {
            self.records
                .lock()
                .push((name.to_string(), args.clone(), result.clone()));
            if self.fail {
                return Err(ToolError::ExecutionFailed("disk full".to_string()));
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn execute_tool_stamps_call_identity_and_records() {
        let handler = Arc::new(RecordingHandler::default());
        let mut ctx = ToolContext::new(Uuid::nil(), "agent").with_result_handler(handler.clone());

        let result = ctx
            .execute_tool(&EchoTool { fail: false }, json!({ "q": 1 }))
            .await
            .expect("execute");

        assert_eq!(result, json!({ "args": { "q": 1 }, "tool_name": "Echo" }));
        assert!(ctx.tool_call_id.is_some());
        let records = handler.records.lock().clone();
        assert_eq!(
            records,
            vec![("Echo".to_string(), json!({ "q": 1 }), result.clone())]
        );
    }

    #[tokio::test]
    async fn handler_failures_do_not_change_result() {
        let handler = Arc::new(RecordingHandler {
            fail: true,
            ..RecordingHandler::default()
        });
        let mut ctx = ToolContext::new(Uuid::nil(), "agent").with_result_handler(handler);
        let result = ctx
            .execute_tool(&EchoTool { fail: false }, json!({}))
            .await
            .expect("execute");
        assert_eq!(result["tool_name"], "Echo");
    }

    #[tokio::test]
    async fn tool_errors_propagate_unchanged() {
        let handler = Arc::new(RecordingHandler::default());
        let mut ctx = ToolContext::new(Uuid::nil(), "agent").with_result_handler(handler.clone());
        let err = ctx
            .execute_tool(&EchoTool { fail: true }, json!({}))
            .await
            .expect_err("failure");
        let ToolError::Collaborator(message) = err else {
            panic!("expected collaborator error");
        };
        assert_eq!(message, "upstream down");
        assert!(handler.records.lock().is_empty());
    }
}
