//! The `loadpaper` tool and its capability variants.

use crate::collaborators::PaperLoader;
use crate::research::utils::{
    ARXIV_ID_PATTERN, parse_args, parse_schema, reject_fields, shape_schema, validate_arxiv_id,
};
use crate::{Tool, ToolContext};
use async_trait::async_trait;
use autoagents_core::tool::ToolInputT;
use autoagents_derive::ToolInput;
use log::info;
use paperscope_rs_config::LoadPaperVariant;
use paperscope_rs_protocol::{LoadPaperRequest, ToolError};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;
use std::sync::Arc;

/// Name shared by every `loadpaper` variant.
pub const LOAD_PAPER_TOOL: &str = "loadpaper";

const DESCRIPTION_INTRO: &str = "The `loadPaper` tool facilitates retrieving and reading academic papers based on a given search title.";
const DESCRIPTION_TITLE: &str =
    "The `title` parameter is a string representing the title of the paper.";
const DESCRIPTION_SECTIONS: &str =
    "The `sections` parameter is a list representing the list of sections in the paper.";
const DESCRIPTION_ARXIV: &str = "The `arxiv_id` parameter is a string representing the ArXiv ID.";
const DESCRIPTION_SECTIONS_USAGE: &str = "Use the `sections` parameter to retrieve the section list first and then get the detailed content of each section.";
const DESCRIPTION_FIGURES: &str = "Set `show_figure` to true to display the figures in the paper.";

const ARXIV_LONG_DESCRIPTION: &str = "ArXiv id of the paper. ArXiv IDs are unique identifiers for preprints on the ArXiv repository, formatted as `YYMM.NNNNN`. For example, `1706.03762` refers to a paper submitted in June 2017, and `2309.10691` refers to a paper submitted in September 2023.";
const ARXIV_SHORT_DESCRIPTION: &str = "ArXiv ID of the paper";

/// Which optional arguments a `loadpaper` tool exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaperCapabilities {
    /// Expose the `sections` list.
    pub sections: bool,
    /// Expose the `show_figure` flag.
    pub show_figure: bool,
}

impl PaperCapabilities {
    /// Capabilities of a registered variant.
    pub fn for_variant(variant: LoadPaperVariant) -> Self {
        match variant {
            LoadPaperVariant::Rich => Self {
                sections: true,
                show_figure: true,
            },
            LoadPaperVariant::Plain => Self {
                sections: true,
                show_figure: false,
            },
            LoadPaperVariant::Minimal => Self {
                sections: false,
                show_figure: false,
            },
        }
    }

    fn hidden_fields(self) -> Vec<&'static str> {
        let mut hidden = Vec::new();
        if !self.sections {
            hidden.push("sections");
        }
        if !self.show_figure {
            hidden.push("show_figure");
        }
        hidden
    }

    fn description(self) -> String {
        let mut lines = vec![DESCRIPTION_INTRO];
        if self.sections {
            lines.extend([
                DESCRIPTION_TITLE,
                DESCRIPTION_SECTIONS,
                DESCRIPTION_ARXIV,
                DESCRIPTION_SECTIONS_USAGE,
            ]);
        } else {
            lines.push(DESCRIPTION_ARXIV);
        }
        if self.show_figure {
            lines.push(DESCRIPTION_FIGURES);
        }
        lines.join("\n")
    }
}

/// Tool that forwards paper lookups to a bound loader.
pub struct LoadPaperTool {
    variant: LoadPaperVariant,
    capabilities: PaperCapabilities,
    description: String,
    loader: Arc<dyn PaperLoader>,
}

impl LoadPaperTool {
    /// Bind a loader to the given variant.
    pub fn new(variant: LoadPaperVariant, loader: Arc<dyn PaperLoader>) -> Self {
        let capabilities = PaperCapabilities::for_variant(variant);
        Self {
            variant,
            capabilities,
            description: capabilities.description(),
            loader,
        }
    }

    /// Variant this tool was built for.
    pub fn variant(&self) -> LoadPaperVariant {
        self.variant
    }

    /// Optional arguments this tool exposes.
    pub fn capabilities(&self) -> PaperCapabilities {
        self.capabilities
    }

    /// Loader the tool forwards to.
    pub fn loader(&self) -> &Arc<dyn PaperLoader> {
        &self.loader
    }
}

impl fmt::Debug for LoadPaperTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadPaperTool")
            .field("variant", &self.variant)
            .field("capabilities", &self.capabilities)
            .finish()
    }
}

#[async_trait]
impl Tool for LoadPaperTool {
    fn name(&self) -> &str {
        LOAD_PAPER_TOOL
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn args_schema(&self) -> Value {
        let arxiv_description = if self.capabilities.show_figure {
            ARXIV_LONG_DESCRIPTION
        } else {
            ARXIV_SHORT_DESCRIPTION
        };
        let mut overrides = vec![(
            "arxiv_id",
            json!({
                "type": "string",
                "pattern": ARXIV_ID_PATTERN,
                "description": arxiv_description
            }),
        )];
        if self.capabilities.sections {
            overrides.push((
                "sections",
                json!({ "type": "array", "items": { "type": "string" } }),
            ));
        }
        if self.capabilities.show_figure {
            overrides.push(("show_figure", json!({ "type": "boolean", "default": false })));
        }
        shape_schema(
            parse_schema(LoadPaperArgs::io_schema()),
            &self.capabilities.hidden_fields(),
            &["title"],
            &overrides,
        )
    }

    fn supports_parallel(&self) -> bool {
        true
    }

    async fn call(&self, _ctx: &ToolContext, args: Value) -> Result<Value, ToolError> {
        reject_fields(&args, &self.capabilities.hidden_fields())?;
        let input: LoadPaperArgs = parse_args(args)?;
        validate_arxiv_id(input.arxiv_id.as_deref())?;

        let sections = input.sections;
        let show_figure = self
            .capabilities
            .show_figure
            .then(|| input.show_figure.unwrap_or(false));
        info!(
            "loading paper (variant={}, title_len={}, sections={}, has_arxiv_id={}, show_figure={:?})",
            self.variant,
            input.title.len(),
            sections.as_ref().map_or(0, Vec::len),
            input.arxiv_id.is_some(),
            show_figure
        );
        self.loader
            .load_paper(LoadPaperRequest {
                title: input.title,
                sections,
                arxiv_id: input.arxiv_id,
                show_figure,
            })
            .await
    }
}

/// Arguments for LoadPaperTool; hidden fields are stripped per variant.
#[derive(Debug, Serialize, Deserialize, ToolInput)]
#[serde(deny_unknown_fields)]
struct LoadPaperArgs {
    #[input(description = "Target paper title")]
    title: String,
    #[input(description = "List of sections")]
    #[serde(default)]
    sections: Option<Vec<String>>,
    #[input(description = "ArXiv id of the paper, formatted as `YYMM.NNNNN`")]
    #[serde(default)]
    arxiv_id: Option<String>,
    #[input(description = "Show figure in the paper")]
    #[serde(default)]
    show_figure: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::{LOAD_PAPER_TOOL, LoadPaperTool, PaperCapabilities};
    use crate::collaborators::PaperLoader;
    use crate::{Tool, ToolContext};
    use async_trait::async_trait;
    use paperscope_rs_config::LoadPaperVariant;
    use paperscope_rs_protocol::{LoadPaperRequest, ToolError};
    use parking_lot::Mutex;
    use pretty_assertions::assert_eq;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use uuid::Uuid;

    #[derive(Default)]
    struct RecordingLoader {
        requests: Mutex<Vec<LoadPaperRequest>>,
    }

    #[async_trait]
    impl PaperLoader for RecordingLoader {
        async fn load_paper(&self, request: LoadPaperRequest) -> Result<Value, ToolError> {
            let title = request.title.clone();
            self.requests.lock().push(request);
            Ok(json!({ "title": title, "sections": ["Introduction", "Method"] }))
        }
    }

    fn tool(variant: LoadPaperVariant) -> (LoadPaperTool, Arc<RecordingLoader>) {
        let loader = Arc::new(RecordingLoader::default());
        (LoadPaperTool::new(variant, loader.clone()), loader)
    }

    fn ctx() -> ToolContext {
        ToolContext::new(Uuid::nil(), "agent")
    }

    fn property_names(schema: &Value) -> Vec<String> {
        let mut names = schema["properties"]
            .as_object()
            .expect("properties")
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        names.sort();
        names
    }

    #[tokio::test]
    async fn rich_variant_defaults_show_figure_to_false() {
        let (tool, loader) = tool(LoadPaperVariant::Rich);
        let result = tool
            .call(&ctx(), json!({ "title": "Attention Is All You Need" }))
            .await
            .expect("load");

        assert_eq!(
            result,
            json!({ "title": "Attention Is All You Need", "sections": ["Introduction", "Method"] })
        );
        assert_eq!(
            loader.requests.lock().clone(),
            vec![LoadPaperRequest {
                title: "Attention Is All You Need".to_string(),
                sections: None,
                arxiv_id: None,
                show_figure: Some(false),
            }]
        );
    }

    #[tokio::test]
    async fn rich_variant_forwards_every_field() {
        let (tool, loader) = tool(LoadPaperVariant::Rich);
        tool.call(
            &ctx(),
            json!({
                "title": "Attention Is All You Need",
                "sections": ["Model Architecture"],
                "arxiv_id": "1706.03762",
                "show_figure": true
            }),
        )
        .await
        .expect("load");

        assert_eq!(
            loader.requests.lock()[0],
            LoadPaperRequest {
                title: "Attention Is All You Need".to_string(),
                sections: Some(vec!["Model Architecture".to_string()]),
                arxiv_id: Some("1706.03762".to_string()),
                show_figure: Some(true),
            }
        );
    }

    #[tokio::test]
    async fn plain_variant_rejects_show_figure() {
        let (tool, loader) = tool(LoadPaperVariant::Plain);
        let err = tool
            .call(&ctx(), json!({ "title": "BERT", "show_figure": true }))
            .await
            .expect_err("hidden field");
        let ToolError::InvalidArguments(message) = err else {
            panic!("expected invalid arguments");
        };
        assert_eq!(message, "unknown field `show_figure`");
        assert!(loader.requests.lock().is_empty());
    }

    #[tokio::test]
    async fn plain_variant_forwards_sections_without_figure_flag() {
        let (tool, loader) = tool(LoadPaperVariant::Plain);
        tool.call(&ctx(), json!({ "title": "BERT", "sections": ["Abstract"] }))
            .await
            .expect("load");
        let request = loader.requests.lock()[0].clone();
        assert_eq!(request.sections, Some(vec!["Abstract".to_string()]));
        assert_eq!(request.show_figure, None);
    }

    #[tokio::test]
    async fn sections_are_forwarded_as_received() {
        let (tool, loader) = tool(LoadPaperVariant::Rich);
        tool.call(&ctx(), json!({ "title": "BERT", "sections": null }))
            .await
            .expect("null sections");
        tool.call(&ctx(), json!({ "title": "BERT", "sections": [] }))
            .await
            .expect("empty sections");
        tool.call(
            &ctx(),
            json!({ "title": "BERT", "sections": null, "arxiv_id": null, "show_figure": null }),
        )
        .await
        .expect("null optionals");

        let sections: Vec<_> = loader
            .requests
            .lock()
            .iter()
            .map(|request| request.sections.clone())
            .collect();
        assert_eq!(sections, vec![None, Some(Vec::new()), None]);
        assert_eq!(loader.requests.lock()[2].show_figure, Some(false));
    }

    #[tokio::test]
    async fn minimal_variant_rejects_sections() {
        let (tool, _loader) = tool(LoadPaperVariant::Minimal);
        let err = tool
            .call(&ctx(), json!({ "title": "BERT", "sections": ["Abstract"] }))
            .await
            .expect_err("hidden field");
        assert!(matches!(err, ToolError::InvalidArguments(_)));
    }

    #[tokio::test]
    async fn rejects_malformed_arxiv_id_and_unknown_fields() {
        let (tool, loader) = tool(LoadPaperVariant::Minimal);
        let err = tool
            .call(&ctx(), json!({ "title": "BERT", "arxiv_id": "bert" }))
            .await
            .expect_err("bad id");
        assert!(matches!(err, ToolError::InvalidArguments(_)));

        let err = tool
            .call(&ctx(), json!({ "title": "BERT", "year": 2018 }))
            .await
            .expect_err("unknown field");
        assert!(matches!(err, ToolError::InvalidArguments(_)));

        let err = tool
            .call(&ctx(), json!({ "arxiv_id": "1810.04805" }))
            .await
            .expect_err("missing title");
        assert!(matches!(err, ToolError::InvalidArguments(_)));
        assert!(loader.requests.lock().is_empty());
    }

    #[tokio::test]
    async fn loader_errors_propagate_unchanged() {
        struct FailingLoader;

        #[async_trait]
        impl PaperLoader for FailingLoader {
            async fn load_paper(&self, _request: LoadPaperRequest) -> Result<Value, ToolError> {
                Err(ToolError::Collaborator("rate limited".to_string()))
            }
        }

        let tool = LoadPaperTool::new(LoadPaperVariant::Rich, Arc::new(FailingLoader));
        let err = tool
            .call(&ctx(), json!({ "title": "BERT" }))
            .await
            .expect_err("failure");
        let ToolError::Collaborator(message) = err else {
            panic!("expected collaborator error");
        };
        assert_eq!(message, "rate limited");
    }

    #[test]
    fn schemas_follow_capabilities() {
        let (rich, _) = tool(LoadPaperVariant::Rich);
        let (plain, _) = tool(LoadPaperVariant::Plain);
        let (minimal, _) = tool(LoadPaperVariant::Minimal);

        assert_eq!(
            property_names(&rich.args_schema()),
            vec!["arxiv_id", "sections", "show_figure", "title"]
        );
        assert_eq!(
            property_names(&plain.args_schema()),
            vec!["arxiv_id", "sections", "title"]
        );
        assert_eq!(property_names(&minimal.args_schema()), vec!["arxiv_id", "title"]);

        let schema = rich.args_schema();
        assert_eq!(schema["required"], json!(["title"]));
        assert_eq!(schema["properties"]["show_figure"]["default"], json!(false));
        assert!(
            schema["properties"]["arxiv_id"]["description"]
                .as_str()
                .expect("description")
                .contains("YYMM.NNNNN")
        );
        assert_eq!(
            minimal.args_schema()["properties"]["arxiv_id"]["description"],
            json!("ArXiv ID of the paper")
        );
    }

    #[test]
    fn descriptions_follow_capabilities() {
        let (rich, _) = tool(LoadPaperVariant::Rich);
        let (minimal, _) = tool(LoadPaperVariant::Minimal);
        assert_eq!(rich.name(), LOAD_PAPER_TOOL);
        assert!(rich.description().contains("`show_figure`"));
        assert!(rich.description().contains("`sections`"));
        assert!(!minimal.description().contains("`sections`"));
        assert!(minimal.description().contains("`arxiv_id`"));
        assert_eq!(
            PaperCapabilities::for_variant(LoadPaperVariant::Plain),
            PaperCapabilities {
                sections: true,
                show_figure: false,
            }
        );
    }
}
