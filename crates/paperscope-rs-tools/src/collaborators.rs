//! Interfaces for the external services backing the research tools.
//!
//! Paper retrieval, recommendation and code matching are provided by the
//! embedding application. This crate only sees the four calls below and the
//! options each collaborator is built with.

use async_trait::async_trait;
use paperscope_rs_config::LoadPaperVariant;
use paperscope_rs_protocol::{CodeMatchRequest, LoadPaperRequest, RecommendRequest, ToolError};
use serde_json::Value;
use std::path::PathBuf;
use std::sync::Arc;

/// Retrieves and parses academic papers.
#[async_trait]
pub trait PaperLoader: Send + Sync {
    /// Load a paper, or the requested sections of it.
    async fn load_paper(&self, request: LoadPaperRequest) -> Result<Value, ToolError>;
}

/// Recommends papers from the reference or citation graph.
#[async_trait]
pub trait PaperRecommender: Send + Sync {
    /// Recommend papers related to the query paper.
    async fn recommend(&self, request: RecommendRequest) -> Result<Value, ToolError>;
}

/// Matches paper contents to implementation code.
#[async_trait]
pub trait CodeAnalyzer: Send + Sync {
    /// Locate code corresponding to an excerpt of a paper.
    async fn match_code(&self, request: CodeMatchRequest) -> Result<Value, ToolError>;
}

/// Options a paper loader is built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaperLoaderOptions {
    /// Which `loadpaper` tool the loader backs.
    pub variant: LoadPaperVariant,
    /// Paper search API key, if one was provided.
    pub api_key: Option<String>,
    /// Whether figure extraction is enabled.
    pub figures: bool,
    /// Local cache directory owned by the loader.
    pub cache_dir: Option<PathBuf>,
    /// Opaque page limit; `None` is unlimited.
    pub page_limit: Option<u32>,
}

/// Options the recommender is built with.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommenderOptions {
    /// Paper search API key, if one was provided.
    pub api_key: Option<String>,
    /// Similarity threshold in `[0, 1]`.
    pub threshold: f64,
}

/// Options the code analyzer is built with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeAnalyzerOptions {
    /// Paper search API key, if one was provided.
    pub paper_search_api_key: Option<String>,
    /// Language model API key, if one was provided.
    pub llm_api_key: Option<String>,
    /// Local cache directory owned by the analyzer.
    pub cache_dir: PathBuf,
}

/// Builds collaborator instances at startup.
///
/// Each method is called exactly once per process by
/// [`ResearchServices::from_config`](crate::ResearchServices::from_config).
pub trait CollaboratorFactory: Send + Sync {
    /// Build a paper loader.
    fn paper_loader(&self, options: PaperLoaderOptions)
    -> Result<Arc<dyn PaperLoader>, ToolError>;

    /// Build the recommender.
    fn recommender(
        &self,
        options: RecommenderOptions,
    ) -> Result<Arc<dyn PaperRecommender>, ToolError>;

    /// Build the code analyzer.
    fn code_analyzer(
        &self,
        options: CodeAnalyzerOptions,
    ) -> Result<Arc<dyn CodeAnalyzer>, ToolError>;

    /// Log in to the model hub with a token injected from the environment.
    fn authenticate_model_hub(&self, _token: &str) -> Result<(), ToolError> {
        Ok(())
    }
}
