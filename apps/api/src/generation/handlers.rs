//! Axum route handlers for the Generation API.
//!
//! Two surfaces share the `Generator`:
//! - `/api/generate/*` takes JSON and answers `{<kind>: ...}` or `{error: ...}`.
//! - `/generate_*` takes form posts and answers raw fragments.

use axum::{
    extract::{
        rejection::{FormRejection, JsonRejection},
        State,
    },
    response::Html,
    Form, Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, FragmentError};
use crate::generation::generator::GenerationError;
use crate::generation::kinds::{AnalysisType, ContentKind, InvalidAnalysisType};
use crate::state::AppState;

pub const DEFAULT_STYLE: &str = "deep";
pub const DEFAULT_DURATION_MINUTES: u32 = 30;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct OutlineRequest {
    pub topic: Option<String>,
    pub duration: Option<u32>,
    pub style: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuestionsRequest {
    pub topic: Option<String>,
    #[serde(alias = "guestExpertise")]
    pub guest_expertise: Option<String>,
    pub style: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TitleRequest {
    pub topic: Option<String>,
    pub style: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ResearchForm {
    pub topic: Option<String>,
    pub keywords: Option<String>,
    #[serde(rename = "analysisType")]
    pub analysis_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct OutlineResponse {
    pub outline: String,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: String,
}

#[derive(Debug, Serialize)]
pub struct TitlesResponse {
    pub titles: String,
}

/// Treats absent and blank values alike.
fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn style_or_default(style: &Option<String>) -> &str {
    present(style).unwrap_or(DEFAULT_STYLE)
}

// ────────────────────────────────────────────────────────────────────────────
// JSON handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/generate/outline
pub async fn handle_outline(
    State(state): State<AppState>,
    payload: Result<Json<OutlineRequest>, JsonRejection>,
) -> Result<Json<OutlineResponse>, AppError> {
    let Json(request) = payload?;
    let topic = present(&request.topic)
        .ok_or_else(|| AppError::Validation("Topic is required".to_string()))?;
    let duration = request.duration.unwrap_or(DEFAULT_DURATION_MINUTES);
    let style = style_or_default(&request.style);

    let outline = state
        .generator
        .outline(topic, duration, style)
        .await
        .map_err(|_| AppError::GenerationFailed(ContentKind::Outline.noun()))?;

    Ok(Json(OutlineResponse { outline }))
}

/// POST /api/generate/questions
pub async fn handle_questions(
    State(state): State<AppState>,
    payload: Result<Json<QuestionsRequest>, JsonRejection>,
) -> Result<Json<QuestionsResponse>, AppError> {
    let Json(request) = payload?;
    let (Some(topic), Some(guest_expertise)) =
        (present(&request.topic), present(&request.guest_expertise))
    else {
        return Err(AppError::Validation(
            "Topic and guest expertise are required".to_string(),
        ));
    };
    let style = style_or_default(&request.style);

    let questions = state
        .generator
        .questions(topic, guest_expertise, style)
        .await
        .map_err(|_| AppError::GenerationFailed(ContentKind::Questions.noun()))?;

    Ok(Json(QuestionsResponse { questions }))
}

/// POST /api/generate/title
pub async fn handle_title(
    State(state): State<AppState>,
    payload: Result<Json<TitleRequest>, JsonRejection>,
) -> Result<Json<TitlesResponse>, AppError> {
    let Json(request) = payload?;
    let topic = present(&request.topic)
        .ok_or_else(|| AppError::Validation("Topic is required".to_string()))?;
    let style = style_or_default(&request.style);

    let titles = state
        .generator
        .titles(topic, style)
        .await
        .map_err(|_| AppError::GenerationFailed(ContentKind::Titles.noun()))?;

    Ok(Json(TitlesResponse { titles }))
}

// ────────────────────────────────────────────────────────────────────────────
// Form handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /generate_research
///
/// Unknown analysis types are rejected before the model is called. The
/// value is matched untrimmed.
pub async fn handle_research_form(
    State(state): State<AppState>,
    payload: Result<Form<ResearchForm>, FormRejection>,
) -> Result<Html<String>, FragmentError> {
    let what = "research analysis";
    let Form(form) = payload.map_err(|r| FragmentError::from_form_rejection(what, r))?;

    let (Some(topic), Some(keywords), Some(analysis_type)) = (
        present(&form.topic),
        present(&form.keywords),
        form.analysis_type.as_deref().filter(|v| !v.trim().is_empty()),
    ) else {
        return Err(FragmentError::MissingFields);
    };

    let analysis = analysis_type
        .parse::<AnalysisType>()
        .map_err(|InvalidAnalysisType(value)| FragmentError::InvalidAnalysisType(value))?;

    let report = state
        .generator
        .research(topic, keywords, analysis)
        .await
        .map_err(|e| match e {
            GenerationError::Empty => {
                FragmentError::Generation(GenerationError::Empty.to_string())
            }
            GenerationError::Llm(inner) => {
                FragmentError::Generation(format!("Error generating {what}: {inner}"))
            }
        })?;

    Ok(Html(report))
}

/// POST /generate_questions
pub async fn handle_questions_form(
    State(state): State<AppState>,
    payload: Result<Form<QuestionsRequest>, FormRejection>,
) -> Result<Html<String>, FragmentError> {
    let what = ContentKind::Questions.noun();
    let Form(form) = payload.map_err(|r| FragmentError::from_form_rejection(what, r))?;

    let (Some(topic), Some(guest_expertise), Some(style)) = (
        present(&form.topic),
        present(&form.guest_expertise),
        present(&form.style),
    ) else {
        return Err(FragmentError::MissingFields);
    };

    let questions = state
        .generator
        .questions(topic, guest_expertise, style)
        .await
        .map_err(|_| FragmentError::GenerationFailed(what))?;

    Ok(Html(questions))
}

/// POST /generate_title
pub async fn handle_title_form(
    State(state): State<AppState>,
    payload: Result<Form<TitleRequest>, FormRejection>,
) -> Result<Html<String>, FragmentError> {
    let what = ContentKind::Titles.noun();
    let Form(form) = payload.map_err(|r| FragmentError::from_form_rejection(what, r))?;

    let (Some(topic), Some(style)) = (present(&form.topic), present(&form.style)) else {
        return Err(FragmentError::MissingFields);
    };

    let titles = state
        .generator
        .titles(topic, style)
        .await
        .map_err(|_| FragmentError::GenerationFailed(what))?;

    Ok(Html(titles))
}
