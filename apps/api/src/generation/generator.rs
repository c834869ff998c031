//! Content generation. Builds a prompt per operation, calls the model with
//! the operation's sampling configuration, and wraps the reply in its envelope.
//!
//! Flow: build prompt → TextModel::generate → format envelope.
//!
//! No retries. Every failure is logged here and reported to the caller as a
//! `GenerationError`; the handlers decide how it is rendered.

use std::sync::Arc;

use chrono::Local;
use thiserror::Error;
use tracing::{error, info};

use crate::generation::formatting::{
    format_duration, outline_html, questions_markdown, research_html, segment_plan,
    titles_markdown,
};
use crate::generation::kinds::{AnalysisType, ContentKind};
use crate::llm_client::{LlmError, TextModel};

/// Why a generation produced no usable text.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("No content generated from the AI model")]
    Empty,

    #[error(transparent)]
    Llm(LlmError),
}

impl From<LlmError> for GenerationError {
    fn from(err: LlmError) -> Self {
        match err {
            LlmError::EmptyContent => GenerationError::Empty,
            other => GenerationError::Llm(other),
        }
    }
}

/// Stateless apart from the shared model handle; cheap to clone per request.
#[derive(Clone)]
pub struct Generator {
    model: Arc<dyn TextModel>,
}

impl Generator {
    pub fn new(model: Arc<dyn TextModel>) -> Self {
        Self { model }
    }

    /// Episode outline wrapped in the HTML envelope.
    pub async fn outline(
        &self,
        topic: &str,
        duration: u32,
        style: &str,
    ) -> Result<String, GenerationError> {
        let prompt = build_outline_prompt(topic, duration, style);
        let outline = self.run(ContentKind::Outline, &prompt).await?;
        Ok(outline_html(&outline, topic, duration, style, Local::now()))
    }

    /// Interview questions wrapped in the Markdown envelope.
    pub async fn questions(
        &self,
        topic: &str,
        guest_expertise: &str,
        style: &str,
    ) -> Result<String, GenerationError> {
        let prompt = fill_template(
            ContentKind::Questions.template(),
            &[
                ("topic", topic),
                ("guest_expertise", guest_expertise),
                ("style", style),
            ],
        );
        let questions = self.run(ContentKind::Questions, &prompt).await?;
        Ok(questions_markdown(
            &questions,
            topic,
            guest_expertise,
            style,
            Local::now(),
        ))
    }

    /// Five title options wrapped in the Markdown envelope.
    pub async fn titles(&self, topic: &str, style: &str) -> Result<String, GenerationError> {
        let prompt = fill_template(
            ContentKind::Titles.template(),
            &[("topic", topic), ("style", style)],
        );
        let titles = self.run(ContentKind::Titles, &prompt).await?;
        Ok(titles_markdown(&titles, topic, style, Local::now()))
    }

    /// Research report for the chosen analysis type, wrapped in the HTML envelope.
    pub async fn research(
        &self,
        topic: &str,
        keywords: &str,
        analysis: AnalysisType,
    ) -> Result<String, GenerationError> {
        let kind = ContentKind::Research(analysis);
        let prompt = fill_template(kind.template(), &[("topic", topic), ("keywords", keywords)]);
        let report = self.run(kind, &prompt).await?;
        Ok(research_html(&report, topic, analysis.as_str(), Local::now()))
    }

    async fn run(&self, kind: ContentKind, prompt: &str) -> Result<String, GenerationError> {
        info!("Generating {}", kind.noun());

        match self.model.generate(prompt, &kind.sampling()).await {
            Ok(text) if text.trim().is_empty() => {
                error!("Error generating {}: {}", kind.noun(), GenerationError::Empty);
                Err(GenerationError::Empty)
            }
            Ok(text) => Ok(text),
            Err(e) => {
                let err = GenerationError::from(e);
                error!("Error generating {}: {}", kind.noun(), err);
                Err(err)
            }
        }
    }
}

/// Fills the outline template. Segment labels follow the plan scaled to `duration`.
fn build_outline_prompt(topic: &str, duration: u32, style: &str) -> String {
    let [intro, segment_1, segment_2, segment_3, conclusion] = segment_plan(duration);
    let duration = duration.to_string();
    let intro = format_duration(intro);
    let segment_1 = format_duration(segment_1);
    let segment_2 = format_duration(segment_2);
    let segment_3 = format_duration(segment_3);
    let conclusion = format_duration(conclusion);

    fill_template(
        ContentKind::Outline.template(),
        &[
            ("topic", topic),
            ("duration", duration.as_str()),
            ("style", style),
            ("intro", intro.as_str()),
            ("segment_1", segment_1.as_str()),
            ("segment_2", segment_2.as_str()),
            ("segment_3", segment_3.as_str()),
            ("conclusion", conclusion.as_str()),
        ],
    )
}

/// Replaces each `{key}` in `template` with its value.
///
/// Single pass over the template, so braces inside caller values are never
/// re-expanded. Unknown placeholders are left as-is.
pub fn fill_template(template: &str, vars: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let value = after.find('}').and_then(|close| {
            let key = &after[..close];
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v, close))
        });

        match value {
            Some((v, close)) => {
                out.push_str(v);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
