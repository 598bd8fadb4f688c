//! Research tools backed by the paper, recommendation and code collaborators.

mod code_matching;
mod load_paper;
mod recommend;
mod utils;

use crate::{ResearchServices, Tool, ToolRegistry};
use log::info;
use paperscope_rs_config::LoadPaperVariant;
use std::sync::Arc;

pub use code_matching::{CODE_MATCHING_TOOL, CodeMatchingTool};
pub use load_paper::{LOAD_PAPER_TOOL, LoadPaperTool, PaperCapabilities};
pub use recommend::{DEFAULT_REC_NUM, RECOMMEND_PAPER_TOOL, RecommendPaperTool};

/// Build the `loadpaper` tool for a variant, bound to that variant's loader.
pub fn load_paper_tool(services: &ResearchServices, variant: LoadPaperVariant) -> LoadPaperTool {
    LoadPaperTool::new(variant, services.loader(variant).clone())
}

/// Every research tool entry: the three `loadpaper` variants followed by
/// `recommendpaper` and `code_matching`.
///
/// The `loadpaper` entries share a name, so at most one of them can live in a
/// name-keyed [`ToolRegistry`]; see [`register_research_tools`].
pub fn research_tools(services: &ResearchServices) -> Vec<Arc<dyn Tool>> {
    let mut tools: Vec<Arc<dyn Tool>> = LoadPaperVariant::ALL
        .into_iter()
        .map(|variant| Arc::new(load_paper_tool(services, variant)) as Arc<dyn Tool>)
        .collect();
    tools.push(Arc::new(RecommendPaperTool::new(
        services.recommender.clone(),
    )));
    tools.push(Arc::new(CodeMatchingTool::new(
        services.code_analyzer.clone(),
    )));
    tools
}

/// Register one `loadpaper` variant plus the recommendation and code tools.
pub fn register_research_tools(
    registry: &ToolRegistry,
    services: &ResearchServices,
    variant: LoadPaperVariant,
) {
    registry.register(Arc::new(load_paper_tool(services, variant)));
    registry.register(Arc::new(RecommendPaperTool::new(
        services.recommender.clone(),
    )));
    registry.register(Arc::new(CodeMatchingTool::new(
        services.code_analyzer.clone(),
    )));
    info!("registered research tools (loadpaper={})", variant);
}

/// Build a registry pre-populated with the research tools.
pub fn research_tool_registry(
    services: &ResearchServices,
    variant: LoadPaperVariant,
) -> ToolRegistry {
    let registry = ToolRegistry::new();
    register_research_tools(&registry, services, variant);
    registry
}
