//! Output envelopes and small text helpers.
//!
//! Outline and research results are wrapped in styled HTML blocks; questions
//! and titles get a Markdown metadata header. Every envelope carries the
//! generation timestamp and echoes the caller's parameters, HTML-escaped
//! since every surface may insert the result into the DOM.

use chrono::{DateTime, Local};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Base outline plan in minutes: intro, three main segments, conclusion.
const BASE_SEGMENTS: [u32; 5] = [5, 10, 15, 15, 5];
const MIN_PLAN_MINUTES: u32 = 10;

/// Converts minutes to `"Xh Ym"`, or `"Ym"` under an hour.
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{hours}h {mins}m")
    } else {
        format!("{mins}m")
    }
}

/// Splits `total_minutes` across the outline's five sections, keeping the
/// 5/10/15/15/5 proportions. Cumulative rounding keeps the sum exact.
pub fn segment_plan(total_minutes: u32) -> [u32; 5] {
    let total = total_minutes.max(MIN_PLAN_MINUTES) as u64;
    let base_total: u64 = BASE_SEGMENTS.iter().map(|&m| m as u64).sum();

    let mut plan = [0u32; 5];
    let mut cumulative = 0u64;
    let mut previous_boundary = 0u64;
    for (slot, &weight) in plan.iter_mut().zip(BASE_SEGMENTS.iter()) {
        cumulative += weight as u64;
        let boundary = (cumulative * total + base_total / 2) / base_total;
        *slot = (boundary - previous_boundary) as u32;
        previous_boundary = boundary;
    }
    plan
}

/// Title-cases each alphabetic run: "deep dive" → "Deep Dive".
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_is_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_is_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_is_alpha = true;
        } else {
            out.push(c);
            prev_is_alpha = false;
        }
    }
    out
}

pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(c),
        }
    }
    out
}

/// `<div class="error-message">` fragment for direct DOM insertion.
pub fn error_fragment(message: &str) -> String {
    format!(r#"<div class="error-message">{}</div>"#, escape_html(message))
}

pub fn outline_html(
    outline: &str,
    topic: &str,
    duration: u32,
    style: &str,
    generated_at: DateTime<Local>,
) -> String {
    format!(
        r#"<div style="color: #000000; font-family: Arial, sans-serif; line-height: 1.6; padding: 20px;">
<div style="background-color: #f8f9fa; padding: 15px; border-radius: 5px; margin-bottom: 20px;">
<h2 style="color: #1a73e8;">Podcast Episode Outline</h2>
<p>Generated: {generated}</p>
<p>Duration: {duration}</p>
<p>Topic: {topic}</p>
<p>Style: {style}</p>
</div>

<div style="background-color: #ffffff; padding: 20px; border-radius: 5px; box-shadow: 0 2px 4px rgba(0,0,0,0.1);">
{outline}
</div>
</div>
"#,
        generated = generated_at.format(TIMESTAMP_FORMAT),
        duration = format_duration(duration),
        topic = escape_html(topic),
        style = escape_html(&title_case(style)),
    )
}

pub fn research_html(
    analysis: &str,
    topic: &str,
    analysis_type: &str,
    generated_at: DateTime<Local>,
) -> String {
    format!(
        r#"<div style="color: #000000; font-family: Arial, sans-serif; line-height: 1.6; padding: 20px;">
    <div style="background-color: #f8f9fa; padding: 15px; border-radius: 5px; margin-bottom: 20px;">
        <h2 style="color: #1a73e8; margin-bottom: 15px;">Content Research &amp; Analysis</h2>
        <p style="margin: 5px 0;"><strong>Generated:</strong> {generated}</p>
        <p style="margin: 5px 0;"><strong>Topic:</strong> {topic}</p>
        <p style="margin: 5px 0;"><strong>Analysis Type:</strong> {analysis_type}</p>
    </div>

    <div style="background-color: #ffffff; padding: 20px; border-radius: 5px; box-shadow: 0 2px 4px rgba(0,0,0,0.1);">
        <div style="max-width: 800px; margin: 0 auto;">
{analysis}
        </div>
    </div>
</div>
"#,
        generated = generated_at.format(TIMESTAMP_FORMAT),
        topic = escape_html(topic),
        analysis_type = escape_html(&title_case(analysis_type)),
    )
}

pub fn questions_markdown(
    questions: &str,
    topic: &str,
    guest_expertise: &str,
    style: &str,
    generated_at: DateTime<Local>,
) -> String {
    format!(
        "# Interview Questions\n\n\
         - Generated: {generated}\n\
         - Guest Expertise: {guest_expertise}\n\
         - Topic: {topic}\n\
         - Style: {style}\n\n\
         ---\n\n\
         {questions}\n",
        generated = generated_at.format(TIMESTAMP_FORMAT),
        guest_expertise = escape_html(guest_expertise),
        topic = escape_html(topic),
        style = escape_html(&title_case(style)),
    )
}

pub fn titles_markdown(
    titles: &str,
    topic: &str,
    style: &str,
    generated_at: DateTime<Local>,
) -> String {
    format!(
        "# Episode Title Options\n\n\
         - Generated: {generated}\n\
         - Topic: {topic}\n\
         - Style: {style}\n\n\
         ---\n\n\
         {titles}\n",
        generated = generated_at.format(TIMESTAMP_FORMAT),
        topic = escape_html(topic),
        style = escape_html(&title_case(style)),
    )
}
