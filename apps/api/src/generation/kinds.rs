//! Content kinds: maps each generation operation to its prompt template,
//! sampling configuration and display noun.
//!
//! Adding a kind means adding a variant here and a template in `prompts.rs`.

use std::fmt;
use std::str::FromStr;

use crate::generation::prompts::{
    AUDIENCE_TEMPLATE, COMPETITORS_TEMPLATE, GAPS_TEMPLATE, OUTLINE_TEMPLATE,
    QUESTIONS_TEMPLATE, TITLES_TEMPLATE, TRENDS_TEMPLATE,
};
use crate::llm_client::SamplingConfig;

const TOP_K: u32 = 40;

/// Research report flavour selected by the caller's `analysisType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisType {
    Trends,
    Competitors,
    Audience,
    Gaps,
}

impl AnalysisType {
    pub fn as_str(self) -> &'static str {
        match self {
            AnalysisType::Trends => "trends",
            AnalysisType::Competitors => "competitors",
            AnalysisType::Audience => "audience",
            AnalysisType::Gaps => "gaps",
        }
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised for any `analysisType` outside the four known reports.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid analysis type: {0}")]
pub struct InvalidAnalysisType(pub String);

impl FromStr for AnalysisType {
    type Err = InvalidAnalysisType;

    /// Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "trends" => Ok(AnalysisType::Trends),
            "competitors" => Ok(AnalysisType::Competitors),
            "audience" => Ok(AnalysisType::Audience),
            "gaps" => Ok(AnalysisType::Gaps),
            other => Err(InvalidAnalysisType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    Outline,
    Questions,
    Titles,
    Research(AnalysisType),
}

impl ContentKind {
    pub fn template(self) -> &'static str {
        match self {
            ContentKind::Outline => OUTLINE_TEMPLATE,
            ContentKind::Questions => QUESTIONS_TEMPLATE,
            ContentKind::Titles => TITLES_TEMPLATE,
            ContentKind::Research(AnalysisType::Trends) => TRENDS_TEMPLATE,
            ContentKind::Research(AnalysisType::Competitors) => COMPETITORS_TEMPLATE,
            ContentKind::Research(AnalysisType::Audience) => AUDIENCE_TEMPLATE,
            ContentKind::Research(AnalysisType::Gaps) => GAPS_TEMPLATE,
        }
    }

    /// Fixed per kind; callers cannot tune sampling.
    pub fn sampling(self) -> SamplingConfig {
        let (temperature, top_p, max_output_tokens) = match self {
            ContentKind::Outline => (0.7, 0.8, 2048),
            ContentKind::Questions => (0.8, 1.0, 2048),
            ContentKind::Titles => (0.9, 1.0, 1024),
            ContentKind::Research(_) => (0.7, 0.8, 2048),
        };

        SamplingConfig {
            temperature,
            top_p,
            top_k: TOP_K,
            max_output_tokens,
        }
    }

    /// Used in user-facing messages, e.g. "Failed to generate titles".
    pub fn noun(self) -> &'static str {
        match self {
            ContentKind::Outline => "outline",
            ContentKind::Questions => "questions",
            ContentKind::Titles => "titles",
            ContentKind::Research(_) => "research analysis",
        }
    }
}
