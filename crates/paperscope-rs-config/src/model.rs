//! Configuration schema for Paperscope.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// Root config for the Paperscope toolkit.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct PaperscopeConfig {
    #[serde(default, rename = "$schema", skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,
    #[serde(default)]
    pub credentials: CredentialsConfig,
    #[serde(default)]
    pub collaborators: CollaboratorsConfig,
    #[serde(default)]
    pub tools: ToolsConfig,
}

impl PaperscopeConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> PaperscopeConfigBuilder {
        PaperscopeConfigBuilder::new()
    }
}

/// Builder for assembling a `PaperscopeConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct PaperscopeConfigBuilder {
    config: PaperscopeConfig,
}

impl PaperscopeConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: PaperscopeConfig::default(),
        }
    }

    /// Replace the credential lookup configuration.
    pub fn credentials(mut self, credentials: CredentialsConfig) -> Self {
        self.config.credentials = credentials;
        self
    }

    /// Replace the collaborator options.
    pub fn collaborators(mut self, collaborators: CollaboratorsConfig) -> Self {
        self.config.collaborators = collaborators;
        self
    }

    /// Replace the tool registration options.
    pub fn tools(mut self, tools: ToolsConfig) -> Self {
        self.config.tools = tools;
        self
    }

    /// Select which `loadpaper` variant gets registered.
    pub fn loadpaper(mut self, variant: LoadPaperVariant) -> Self {
        self.config.tools.loadpaper = variant;
        self
    }

    /// Finalize and return the built `PaperscopeConfig`.
    pub fn build(self) -> PaperscopeConfig {
        self.config
    }
}

/// Names of the environment variables holding API keys.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CredentialsConfig {
    #[serde(default = "default_paper_search_env")]
    pub paper_search_env: String,
    #[serde(default = "default_llm_env")]
    pub llm_env: String,
    #[serde(default = "default_model_hub_env")]
    pub model_hub_env: String,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            paper_search_env: default_paper_search_env(),
            llm_env: default_llm_env(),
            model_hub_env: default_model_hub_env(),
        }
    }
}

fn default_paper_search_env() -> String {
    "SEMANTIC_SCHOLAR_API_KEY".to_string()
}

fn default_llm_env() -> String {
    "OPENAI_API_KEY".to_string()
}

fn default_model_hub_env() -> String {
    "HF_TOKEN".to_string()
}

/// Options handed to a paper loader collaborator.
///
/// `page_limit` is passed through as-is; `None` means unlimited.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PaperLoaderConfig {
    #[serde(default)]
    pub figures: bool,
    #[serde(default)]
    pub cache_dir: Option<PathBuf>,
    #[serde(default)]
    pub page_limit: Option<u32>,
}

/// Options handed to the recommender collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecommenderConfig {
    #[serde(default = "default_similarity_threshold")]
    pub threshold: f64,
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            threshold: default_similarity_threshold(),
        }
    }
}

fn default_similarity_threshold() -> f64 {
    0.6
}

/// Options handed to the code analyzer collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CodeAnalyzerConfig {
    #[serde(default = "default_code_cache_dir")]
    pub cache_dir: PathBuf,
}

impl Default for CodeAnalyzerConfig {
    fn default() -> Self {
        Self {
            cache_dir: default_code_cache_dir(),
        }
    }
}

fn default_code_cache_dir() -> PathBuf {
    PathBuf::from("./code_db")
}

/// Fixed options for each collaborator built at startup.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CollaboratorsConfig {
    #[serde(default = "default_rich_loader")]
    pub rich_loader: PaperLoaderConfig,
    #[serde(default = "default_plain_loader")]
    pub plain_loader: PaperLoaderConfig,
    #[serde(default = "default_minimal_loader")]
    pub minimal_loader: PaperLoaderConfig,
    #[serde(default)]
    pub recommender: RecommenderConfig,
    #[serde(default)]
    pub code_analyzer: CodeAnalyzerConfig,
}

impl Default for CollaboratorsConfig {
    fn default() -> Self {
        Self {
            rich_loader: default_rich_loader(),
            plain_loader: default_plain_loader(),
            minimal_loader: default_minimal_loader(),
            recommender: RecommenderConfig::default(),
            code_analyzer: CodeAnalyzerConfig::default(),
        }
    }
}

fn default_rich_loader() -> PaperLoaderConfig {
    PaperLoaderConfig {
        figures: true,
        cache_dir: Some(PathBuf::from("./papers_db")),
        page_limit: Some(5),
    }
}

fn default_plain_loader() -> PaperLoaderConfig {
    PaperLoaderConfig {
        figures: false,
        cache_dir: None,
        page_limit: None,
    }
}

fn default_minimal_loader() -> PaperLoaderConfig {
    PaperLoaderConfig {
        figures: false,
        cache_dir: None,
        page_limit: Some(9),
    }
}

/// Which of the three `loadpaper` tools an agent registry exposes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum LoadPaperVariant {
    /// Sections and figure display.
    #[default]
    Rich,
    /// Sections, no figure flag.
    Plain,
    /// Title and ArXiv id only.
    Minimal,
}

impl LoadPaperVariant {
    /// All variants in registration order.
    pub const ALL: [LoadPaperVariant; 3] = [
        LoadPaperVariant::Rich,
        LoadPaperVariant::Plain,
        LoadPaperVariant::Minimal,
    ];

    /// Config name of the variant.
    pub fn as_str(self) -> &'static str {
        match self {
            LoadPaperVariant::Rich => "rich",
            LoadPaperVariant::Plain => "plain",
            LoadPaperVariant::Minimal => "minimal",
        }
    }
}

impl fmt::Display for LoadPaperVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Tool registration options.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ToolsConfig {
    #[serde(default)]
    pub loadpaper: LoadPaperVariant,
}
