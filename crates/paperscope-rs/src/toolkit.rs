//! Toolkit bootstrap: credentials, collaborators and tool registration.

use crate::ToolkitError;
use autoagents_core::tool::ToolT;
use log::{debug, info};
use paperscope_rs_config::{Credentials, LayeredConfigOptions, PaperscopeConfig};
use paperscope_rs_protocol::ToolError;
use paperscope_rs_tools::{
    CollaboratorFactory, ResearchServices, Tool, ToolContext, ToolRegistry, register_research_tools,
    research_tools, tools_to_adaptors,
};
use parking_lot::RwLock;
use serde_json::Value;
use std::sync::Arc;

/// Research tools wired to their collaborators.
#[derive(Debug, Clone)]
pub struct Toolkit {
    config: PaperscopeConfig,
    services: ResearchServices,
    registry: ToolRegistry,
}

impl Toolkit {
    /// Build the toolkit with credentials read from the process environment.
    pub fn bootstrap(
        config: PaperscopeConfig,
        factory: &dyn CollaboratorFactory,
    ) -> Result<Self, ToolkitError> {
        let credentials = Credentials::from_env(&config.credentials);
        Self::bootstrap_with_credentials(config, &credentials, factory)
    }

    /// Load the layered config for `options` and bootstrap from it.
    pub fn bootstrap_layered(
        options: LayeredConfigOptions,
        factory: &dyn CollaboratorFactory,
    ) -> Result<Self, ToolkitError> {
        let layered = PaperscopeConfig::load_layered_with_options(options)?;
        for layer in &layered.layers {
            debug!(
                "config layer applied (source={:?}, path={})",
                layer.source,
                layer.path.display()
            );
        }
        Self::bootstrap(layered.config, factory)
    }

    /// Build the toolkit with explicit credentials.
    ///
    /// The model hub login runs once, before any collaborator is built, and
    /// only when a token is present.
    pub fn bootstrap_with_credentials(
        config: PaperscopeConfig,
        credentials: &Credentials,
        factory: &dyn CollaboratorFactory,
    ) -> Result<Self, ToolkitError> {
        config.validate()?;

        match credentials.model_hub_token.as_deref() {
            Some(token) => {
                factory
                    .authenticate_model_hub(token)
                    .map_err(ToolkitError::ModelHub)?;
                info!("model hub login complete");
            }
            None => debug!("no model hub token; skipping login"),
        }

        let services = ResearchServices::from_config(&config.collaborators, credentials, factory)?;
        let registry = ToolRegistry::new();
        register_research_tools(&registry, &services, config.tools.loadpaper);
        info!(
            "toolkit ready (tools={}, loadpaper={})",
            registry.list().len(),
            config.tools.loadpaper
        );

        Ok(Self {
            config,
            services,
            registry,
        })
    }

    /// Config the toolkit was built from.
    pub fn config(&self) -> &PaperscopeConfig {
        &self.config
    }

    /// Shared collaborator instances.
    pub fn services(&self) -> &ResearchServices {
        &self.services
    }

    /// Registry holding the configured research tools.
    pub fn registry(&self) -> &ToolRegistry {
        &self.registry
    }

    /// All five research tool entries, including every `loadpaper` variant.
    pub fn research_tools(&self) -> Vec<Arc<dyn Tool>> {
        research_tools(&self.services)
    }

    /// Wrap every registered tool for an AutoAgents agent.
    pub fn adaptors(&self, ctx: Arc<RwLock<ToolContext>>) -> Vec<Arc<dyn ToolT>> {
        tools_to_adaptors(self.registry.all(), ctx)
    }

    /// Dispatch a registered tool by name.
    pub async fn call(
        &self,
        ctx: &mut ToolContext,
        name: &str,
        args: Value,
    ) -> Result<Value, ToolError> {
        self.registry.call(ctx, name, args).await
    }
}
