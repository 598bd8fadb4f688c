//! Collaborator instances shared by the research tools.

use crate::collaborators::{
    CodeAnalyzer, CodeAnalyzerOptions, CollaboratorFactory, PaperLoader, PaperLoaderOptions,
    PaperRecommender, RecommenderOptions,
};
use log::{debug, info};
use paperscope_rs_config::{CollaboratorsConfig, Credentials, LoadPaperVariant, PaperLoaderConfig};
use paperscope_rs_protocol::ToolError;
use std::fmt;
use std::sync::Arc;

/// The five collaborators, built once and shared by every tool.
#[derive(Clone)]
pub struct ResearchServices {
    /// Loader with figure extraction and section listing.
    pub rich_loader: Arc<dyn PaperLoader>,
    /// Loader with section listing.
    pub plain_loader: Arc<dyn PaperLoader>,
    /// Loader for title/ArXiv id lookups.
    pub minimal_loader: Arc<dyn PaperLoader>,
    /// Reference/citation recommender.
    pub recommender: Arc<dyn PaperRecommender>,
    /// Code-to-paper matcher.
    pub code_analyzer: Arc<dyn CodeAnalyzer>,
}

impl ResearchServices {
    /// Build every collaborator through the factory using the configured options.
    pub fn from_config(
        config: &CollaboratorsConfig,
        credentials: &Credentials,
        factory: &dyn CollaboratorFactory,
    ) -> Result<Self, ToolError> {
        let loader = |variant: LoadPaperVariant, options: &PaperLoaderConfig| {
            debug!(
                "building paper loader (variant={}, figures={}, page_limit={:?})",
                variant, options.figures, options.page_limit
            );
            factory.paper_loader(PaperLoaderOptions {
                variant,
                api_key: credentials.paper_search_api_key.clone(),
                figures: options.figures,
                cache_dir: options.cache_dir.clone(),
                page_limit: options.page_limit,
            })
        };
        let rich_loader = loader(LoadPaperVariant::Rich, &config.rich_loader)?;
        let plain_loader = loader(LoadPaperVariant::Plain, &config.plain_loader)?;
        let minimal_loader = loader(LoadPaperVariant::Minimal, &config.minimal_loader)?;

        debug!(
            "building recommender (threshold={})",
            config.recommender.threshold
        );
        let recommender = factory.recommender(RecommenderOptions {
            api_key: credentials.paper_search_api_key.clone(),
            threshold: config.recommender.threshold,
        })?;

        debug!(
            "building code analyzer (cache_dir={})",
            config.code_analyzer.cache_dir.display()
        );
        let code_analyzer = factory.code_analyzer(CodeAnalyzerOptions {
            paper_search_api_key: credentials.paper_search_api_key.clone(),
            llm_api_key: credentials.llm_api_key.clone(),
            cache_dir: config.code_analyzer.cache_dir.clone(),
        })?;

        info!("research collaborators ready");
        Ok(Self {
            rich_loader,
            plain_loader,
            minimal_loader,
            recommender,
            code_analyzer,
        })
    }

    /// Loader bound to a `loadpaper` variant.
    pub fn loader(&self, variant: LoadPaperVariant) -> &Arc<dyn PaperLoader> {
        match variant {
            LoadPaperVariant::Rich => &self.rich_loader,
            LoadPaperVariant::Plain => &self.plain_loader,
            LoadPaperVariant::Minimal => &self.minimal_loader,
        }
    }
}

impl fmt::Debug for ResearchServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResearchServices").finish_non_exhaustive()
    }
}
