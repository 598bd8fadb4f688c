//! Test helpers shared across Paperscope crates.

pub mod collaborators;
pub mod context;
pub mod tools;

pub use collaborators::{
    RecordingCodeAnalyzer, RecordingPaperLoader, RecordingRecommender, StubCollaboratorFactory,
};
pub use context::{RecordingResultHandler, base_tool_context};
pub use tools::DummyTool;
