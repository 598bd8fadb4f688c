use async_trait::async_trait;
use paperscope_rs_protocol::{CodeMatchRequest, LoadPaperRequest, RecommendRequest, ToolError};
use paperscope_rs_tools::{
    CodeAnalyzer, CodeAnalyzerOptions, CollaboratorFactory, PaperLoader, PaperLoaderOptions,
    PaperRecommender, RecommenderOptions,
};
use parking_lot::Mutex;
use serde_json::{Value, json};
use std::sync::Arc;

/// Paper loader that records requests and answers with a fixed value.
pub struct RecordingPaperLoader {
    response: Value,
    requests: Mutex<Vec<LoadPaperRequest>>,
}

impl RecordingPaperLoader {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<LoadPaperRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl PaperLoader for RecordingPaperLoader {
    async fn load_paper(&self, request: LoadPaperRequest) -> Result<Value, ToolError> {
        self.requests.lock().push(request);
        Ok(self.response.clone())
    }
}

/// Recommender that records requests and answers with a fixed value.
pub struct RecordingRecommender {
    response: Value,
    requests: Mutex<Vec<RecommendRequest>>,
}

impl RecordingRecommender {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<RecommendRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl PaperRecommender for RecordingRecommender {
    async fn recommend(&self, request: RecommendRequest) -> Result<Value, ToolError> {
        self.requests.lock().push(request);
        Ok(self.response.clone())
    }
}

/// Code analyzer that records requests and answers with a fixed value.
pub struct RecordingCodeAnalyzer {
    response: Value,
    requests: Mutex<Vec<CodeMatchRequest>>,
}

impl RecordingCodeAnalyzer {
    pub fn new(response: Value) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<CodeMatchRequest> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl CodeAnalyzer for RecordingCodeAnalyzer {
    async fn match_code(&self, request: CodeMatchRequest) -> Result<Value, ToolError> {
        self.requests.lock().push(request);
        Ok(self.response.clone())
    }
}

/// Factory handing out recording collaborators.
///
/// Each loader answers with its variant name, the recommender with
/// `"recommendations"` and the analyzer with `"code"`. Every build, option set
/// and hub token is kept for assertions.
#[derive(Default)]
pub struct StubCollaboratorFactory {
    loaders: Mutex<Vec<(PaperLoaderOptions, Arc<RecordingPaperLoader>)>>,
    recommenders: Mutex<Vec<(RecommenderOptions, Arc<RecordingRecommender>)>>,
    analyzers: Mutex<Vec<(CodeAnalyzerOptions, Arc<RecordingCodeAnalyzer>)>>,
    hub_tokens: Mutex<Vec<String>>,
    fail_hub_login: bool,
}

impl StubCollaboratorFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every model hub login.
    pub fn failing_hub_login() -> Self {
        Self {
            fail_hub_login: true,
            ..Self::default()
        }
    }

    pub fn loader_options(&self) -> Vec<PaperLoaderOptions> {
        self.loaders
            .lock()
            .iter()
            .map(|(options, _)| options.clone())
            .collect()
    }

    pub fn loaders(&self) -> Vec<Arc<RecordingPaperLoader>> {
        self.loaders
            .lock()
            .iter()
            .map(|(_, loader)| loader.clone())
            .collect()
    }

    pub fn recommender_options(&self) -> Vec<RecommenderOptions> {
        self.recommenders
            .lock()
            .iter()
            .map(|(options, _)| options.clone())
            .collect()
    }

    pub fn recommenders(&self) -> Vec<Arc<RecordingRecommender>> {
        self.recommenders
            .lock()
            .iter()
            .map(|(_, recommender)| recommender.clone())
            .collect()
    }

    pub fn analyzer_options(&self) -> Vec<CodeAnalyzerOptions> {
        self.analyzers
            .lock()
            .iter()
            .map(|(options, _)| options.clone())
            .collect()
    }

    pub fn analyzers(&self) -> Vec<Arc<RecordingCodeAnalyzer>> {
        self.analyzers
            .lock()
            .iter()
            .map(|(_, analyzer)| analyzer.clone())
            .collect()
    }

    pub fn hub_tokens(&self) -> Vec<String> {
        self.hub_tokens.lock().clone()
    }
}

impl CollaboratorFactory for StubCollaboratorFactory {
    fn paper_loader(
        &self,
        options: PaperLoaderOptions,
    ) -> Result<Arc<dyn PaperLoader>, ToolError> {
        let loader = Arc::new(RecordingPaperLoader::new(json!(options.variant.as_str())));
        self.loaders.lock().push((options, loader.clone()));
        Ok(loader)
    }

    fn recommender(
        &self,
        options: RecommenderOptions,
    ) -> Result<Arc<dyn PaperRecommender>, ToolError> {
        let recommender = Arc::new(RecordingRecommender::new(json!("recommendations")));
        self.recommenders.lock().push((options, recommender.clone()));
        Ok(recommender)
    }

    fn code_analyzer(
        &self,
        options: CodeAnalyzerOptions,
    ) -> Result<Arc<dyn CodeAnalyzer>, ToolError> {
        let analyzer = Arc::new(RecordingCodeAnalyzer::new(json!("code")));
        self.analyzers.lock().push((options, analyzer.clone()));
        Ok(analyzer)
    }

    fn authenticate_model_hub(&self, token: &str) -> Result<(), ToolError> {
        self.hub_tokens.lock().push(token.to_string());
        if self.fail_hub_login {
            return Err(ToolError::Collaborator("model hub login rejected".to_string()));
        }
        Ok(())
    }
}
