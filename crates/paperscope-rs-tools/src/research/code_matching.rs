//! The `code_matching` tool.

use crate::collaborators::CodeAnalyzer;
use crate::research::utils::{parse_args, parse_schema, shape_schema};
use crate::{Tool, ToolContext};
use async_trait::async_trait;
use autoagents_core::tool::ToolInputT;
use autoagents_derive::ToolInput;
use log::info;
use paperscope_rs_protocol::{CodeMatchRequest, ToolError};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Registered tool name.
pub const CODE_MATCHING_TOOL: &str = "code_matching";

const DESCRIPTION: &str = "The 'code_matching' tool provides references for the most closely matching parts between the content of a research paper and the actual implemented code.
The `title` parameter takes the title of the research paper.
The `contents` parameter is where the user inputs the parts of the paper they are curious about how to implement in code.
The `github_link` parameter refers to the generated code by GPT based on `contents`.";

/// Tool that forwards paper excerpts to the code analyzer.
pub struct CodeMatchingTool {
    analyzer: Arc<dyn CodeAnalyzer>,
}

impl CodeMatchingTool {
    /// Bind the code analyzer.
    pub fn new(analyzer: Arc<dyn CodeAnalyzer>) -> Self {
        Self { analyzer }
    }
}

impl fmt::Debug for CodeMatchingTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CodeMatchingTool")
    }
}

#[async_trait]
impl Tool for CodeMatchingTool {
    fn name(&self) -> &str {
        CODE_MATCHING_TOOL
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn args_schema(&self) -> Value {
        shape_schema(
            parse_schema(CodeMatchingArgs::io_schema()),
            &[],
            &["title", "contents"],
            &[],
        )
    }

    fn supports_parallel(&self) -> bool {
        true
    }

    async fn call(&self, _ctx: &ToolContext, args: Value) -> Result<Value, ToolError> {
        let input: CodeMatchingArgs = parse_args(args)?;
        info!(
            "matching code (title_len={}, contents_len={}, has_github_link={})",
            input.title.len(),
            input.contents.len(),
            input.github_link.is_some()
        );
        self.analyzer
            .match_code(CodeMatchRequest {
                title: input.title,
                contents: input.contents,
                github_link: input.github_link,
            })
            .await
    }
}

/// Arguments for CodeMatchingTool.
#[derive(Debug, Serialize, Deserialize, ToolInput)]
#[serde(deny_unknown_fields)]
struct CodeMatchingArgs {
    #[input(description = "Target paper title")]
    title: String,
    #[input(description = "Contents in the paper")]
    contents: String,
    #[input(description = "Generated code by GPT")]
    #[serde(default)]
    github_link: Option<String>,
}
