//! Tooling interfaces and research tools for Paperscope.

pub mod adaptor;
pub mod collaborators;
pub mod context;
pub mod registry;
pub mod research;
pub mod services;
pub mod tool;

/// Tool adaptor helpers.
pub use adaptor::{ToolAdaptor, tool_to_adaptor, tools_to_adaptors};
/// Collaborator interfaces and the options they are built with.
pub use collaborators::{
    CodeAnalyzer, CodeAnalyzerOptions, CollaboratorFactory, PaperLoader, PaperLoaderOptions,
    PaperRecommender, RecommenderOptions,
};
/// Tool context and result handling types.
pub use context::{ToolContext, ToolResultHandler};
/// Tool registry type.
pub use registry::ToolRegistry;
/// Research tools and registration helpers.
pub use research::{
    CODE_MATCHING_TOOL, CodeMatchingTool, DEFAULT_REC_NUM, LOAD_PAPER_TOOL, LoadPaperTool,
    PaperCapabilities, RECOMMEND_PAPER_TOOL, RecommendPaperTool, load_paper_tool,
    register_research_tools, research_tool_registry, research_tools,
};
/// Shared collaborator instances.
pub use services::ResearchServices;
/// Tool trait and spec type.
pub use tool::{Tool, ToolSpec};
