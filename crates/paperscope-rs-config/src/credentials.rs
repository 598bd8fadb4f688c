//! API keys resolved from the process environment.

use crate::CredentialsConfig;
use log::debug;
use std::fmt;

/// API keys handed to collaborators at startup.
///
/// Missing or empty variables resolve to `None`; no error is raised here and
/// the collaborators decide what an absent key means.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Key for the paper search service.
    pub paper_search_api_key: Option<String>,
    /// Key for the language model provider.
    pub llm_api_key: Option<String>,
    /// Token for the model hub login performed once at bootstrap.
    pub model_hub_token: Option<String>,
}

impl Credentials {
    /// Read credentials from the process environment.
    pub fn from_env(config: &CredentialsConfig) -> Self {
        Self::from_lookup(config, |name| std::env::var(name).ok())
    }

    /// Read credentials through an arbitrary variable lookup.
    pub fn from_lookup<F>(config: &CredentialsConfig, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |name: &str| {
            let value = lookup(name).filter(|value| !value.trim().is_empty());
            debug!("credential lookup (env={}, present={})", name, value.is_some());
            value
        };
        Self {
            paper_search_api_key: read(&config.paper_search_env),
            llm_api_key: read(&config.llm_env),
            model_hub_token: read(&config.model_hub_env),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn redact(value: &Option<String>) -> &'static str {
            match value {
                Some(_) => "<set>",
                None => "<unset>",
            }
        }
        f.debug_struct("Credentials")
            .field("paper_search_api_key", &redact(&self.paper_search_api_key))
            .field("llm_api_key", &redact(&self.llm_api_key))
            .field("model_hub_token", &redact(&self.model_hub_token))
            .finish()
    }
}
