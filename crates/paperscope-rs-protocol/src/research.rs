//! Requests forwarded from research tools to their collaborators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Request to load a paper (or a subset of its sections).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadPaperRequest {
    /// Target paper title.
    pub title: String,
    /// Section names to load; `None` when the caller did not ask for sections
    /// or the bound tool does not expose them.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Vec<String>>,
    /// ArXiv identifier (`YYMM.NNNNN`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arxiv_id: Option<String>,
    /// Figure display flag; `None` when the bound tool does not expose it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_figure: Option<bool>,
}

/// Which direction of the citation graph to recommend from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecType {
    /// Papers referenced by the query paper.
    Reference,
    /// Papers citing the query paper.
    Citation,
}

impl RecType {
    /// Every accepted value, in wire form.
    pub const VALUES: [&'static str; 2] = ["reference", "citation"];

    /// Wire name of the variant.
    pub fn as_str(self) -> &'static str {
        match self {
            RecType::Reference => "reference",
            RecType::Citation => "citation",
        }
    }
}

impl fmt::Display for RecType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request for reference or citation recommendations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendRequest {
    /// Title of the query paper.
    pub query: String,
    /// Reference or citation recommendation.
    pub rec_type: RecType,
    /// Number of papers to recommend.
    pub rec_num: u32,
}

/// Request to match paper contents against implementation code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeMatchRequest {
    /// Title of the research paper.
    pub title: String,
    /// Excerpt of the paper the caller wants located in code.
    pub contents: String,
    /// Repository URL or generated code to compare against.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github_link: Option<String>,
}
