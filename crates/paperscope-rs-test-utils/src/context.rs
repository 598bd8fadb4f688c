use async_trait::async_trait;
use paperscope_rs_protocol::ToolError;
use paperscope_rs_tools::{ToolContext, ToolResultHandler};
use parking_lot::Mutex;
use serde_json::Value;
use uuid::Uuid;

pub fn base_tool_context() -> ToolContext {
    ToolContext::new(Uuid::nil(), "agent")
}

/// Result handler that keeps `(name, args, result)` for every recorded call.
#[derive(Default)]
pub struct RecordingResultHandler {
    records: Mutex<Vec<(String, Value, Value)>>,
    fail: bool,
}

impl RecordingResultHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    pub fn records(&self) -> Vec<(String, Value, Value)> {
        self.records.lock().clone()
    }
}

#[async_trait]
impl ToolResultHandler for RecordingResultHandler {
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
            return Err(ToolError::ExecutionFailed("handler failed".to_string()));
        }
        Ok(())
    }
}
