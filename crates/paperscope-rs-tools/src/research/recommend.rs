//! The `recommendpaper` tool.

use crate::collaborators::PaperRecommender;
use crate::research::utils::{parse_args, parse_schema, shape_schema};
use crate::{Tool, ToolContext};
use async_trait::async_trait;
use autoagents_core::tool::ToolInputT;
use autoagents_derive::ToolInput;
use log::info;
use paperscope_rs_protocol::{RecType, RecommendRequest, ToolError};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use std::sync::Arc;

/// Registered tool name.
pub const RECOMMEND_PAPER_TOOL: &str = "recommendpaper";
/// Number of recommendations when `rec_num` is omitted.
pub const DEFAULT_REC_NUM: u32 = 5;

const DESCRIPTION: &str = "This 'recommendpaper' tool recommends relevant academic papers based on a given query.
The `query` parameter is a string representing the title of the paper.
The `rec_type` parameter specifies whether the recommendation should be based on references or citations.
The `rec_num` parameter specifies the number of recommended papers. Default is 5 if not mentioned.";

/// Tool that forwards recommendation queries to the recommender.
pub struct RecommendPaperTool {
    recommender: Arc<dyn PaperRecommender>,
}

impl RecommendPaperTool {
    /// Bind the recommender.
    pub fn new(recommender: Arc<dyn PaperRecommender>) -> Self {
        Self { recommender }
    }
}

impl fmt::Debug for RecommendPaperTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("RecommendPaperTool")
    }
}

#[async_trait]
impl Tool for RecommendPaperTool {
    fn name(&self) -> &str {
        RECOMMEND_PAPER_TOOL
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn args_schema(&self) -> Value {
        shape_schema(
            parse_schema(RecommendPaperArgs::io_schema()),
            &[],
            &["query", "rec_type"],
            &[
                (
                    "rec_type",
                    json!({ "type": "string", "enum": RecType::VALUES }),
                ),
                (
                    "rec_num",
                    json!({ "type": "integer", "minimum": 1, "default": DEFAULT_REC_NUM }),
                ),
            ],
        )
    }

    fn supports_parallel(&self) -> bool {
        true
    }

    async fn call(&self, _ctx: &ToolContext, args: Value) -> Result<Value, ToolError> {
        let input: RecommendPaperArgs = parse_args(args)?;
        let rec_num = input.rec_num.unwrap_or(DEFAULT_REC_NUM);
        if rec_num == 0 {
            return Err(ToolError::InvalidArguments(
                "rec_num must be a positive integer".to_string(),
            ));
        }
        info!(
            "recommending papers (query_len={}, rec_type={}, rec_num={})",
            input.query.len(),
            input.rec_type,
            rec_num
        );
        self.recommender
            .recommend(RecommendRequest {
                query: input.query,
                rec_type: input.rec_type,
                rec_num,
            })
            .await
    }
}

/// Arguments for RecommendPaperTool.
#[derive(Debug, Serialize, Deserialize, ToolInput)]
#[serde(deny_unknown_fields)]
struct RecommendPaperArgs {
    #[input(description = "Target paper title")]
    query: String,
    #[input(description = "Reference or citation paper recommendation")]
    rec_type: RecType,
    #[input(description = "Number of recommended papers, default is 5")]
    #[serde(default)]
    rec_num: Option<u32>,
}
