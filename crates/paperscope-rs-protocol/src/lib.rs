//! Shared types for Paperscope tools and their collaborators.

mod research;
mod tool;

pub use research::{CodeMatchRequest, LoadPaperRequest, RecType, RecommendRequest};
pub use tool::ToolError;

use uuid::Uuid;

/// Unique identifier for a session.
pub type SessionId = Uuid;
/// Unique identifier for a tool call.
pub type ToolCallId = Uuid;
