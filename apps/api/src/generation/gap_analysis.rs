//! Experience and responsibility gap analysis, grouped by severity.

use tracing::{info, warn};

use crate::generation::formatting::{format_education, format_experience};
use crate::generation::prompts::{fill, GAP_ANALYSIS_PROMPT_TEMPLATE};
use crate::llm_client::ChatModel;
use crate::models::job::{Gap, GapAnalysis, GapSeverity, JobDescription};
use crate::models::profile::Candidate;

pub fn build_gap_prompt(candidate: &Candidate, job: &JobDescription) -> String {
    let profile = &candidate.profile;
    let education = format_education(&candidate.education);
    let experience = format_experience(&candidate.experience);

    fill(
        GAP_ANALYSIS_PROMPT_TEMPLATE,
        &[
            ("title", &job.title),
            ("company", &job.company_name),
            ("job_description", &job.description),
            ("full_name", &profile.full_name()),
            ("about_me", profile.about_me.as_deref().unwrap_or("Not provided")),
            ("education", &education),
            ("experience", &experience),
        ],
    )
}

/// Recognizes `CRITICAL:`-style section headers, ignoring markdown decoration.
/// Text after the colon, such as `CRITICAL: (deal-breakers)`, is allowed.
fn section_header(line: &str) -> Option<GapSeverity> {
    let header: String = line
        .chars()
        .filter(|&c| c != '#' && c != '*')
        .collect::<String>()
        .trim()
        .to_uppercase();

    [
        ("CRITICAL", GapSeverity::Critical),
        ("IMPORTANT", GapSeverity::Important),
        ("NICE-TO-HAVE", GapSeverity::NiceToHave),
    ]
    .into_iter()
    .find(|(name, _)| {
        header
            .strip_prefix(name)
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(':'))
    })
    .map(|(_, severity)| severity)
}

pub fn parse_gaps(reply: &str) -> Vec<Gap> {
    let mut severity = None;
    let mut gaps = Vec::new();

    for line in reply.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if let Some(header) = section_header(line) {
            severity = Some(header);
            continue;
        }

        let (Some(current), Some(body)) = (severity, line.strip_prefix('-')) else {
            continue;
        };
        let Some((gap_text, suggestion)) = body.split_once('|') else {
            continue;
        };
        let (gap_text, suggestion) = (gap_text.trim(), suggestion.trim());
        if !gap_text.is_empty() && !suggestion.is_empty() {
            gaps.push(Gap::new(gap_text, current, suggestion));
        }
    }

    gaps
}

fn generic_gaps(job: &JobDescription) -> Vec<Gap> {
    vec![
        Gap::new(
            format!("Review alignment with {} requirements", job.title),
            GapSeverity::Important,
            "Compare your experience descriptions against the key requirements listed in the job posting.",
        ),
        Gap::new(
            format!("Highlight relevant achievements for {}", job.company_name),
            GapSeverity::Important,
            "Add specific metrics and outcomes to your experience entries that relate to the job requirements.",
        ),
        Gap::new(
            "Expand technical skills section",
            GapSeverity::NiceToHave,
            "Include more details about specific tools, technologies, or methodologies mentioned in the job description.",
        ),
    ]
}

pub fn fallback_gaps() -> GapAnalysis {
    GapAnalysis {
        gaps: vec![Gap::new(
            "Unable to analyze gaps at this time",
            GapSeverity::Important,
            "Please try again later or manually review your profile against the job description.",
        )],
    }
}

pub async fn analyze_gaps(
    llm: &dyn ChatModel,
    candidate: &Candidate,
    job: &JobDescription,
) -> GapAnalysis {
    let prompt = build_gap_prompt(candidate, job);

    let reply = match llm.complete(&prompt, None).await {
        Ok(reply) => reply,
        Err(e) => {
            warn!("Gap analysis failed: {e}");
            return fallback_gaps();
        }
    };

    let mut gaps = parse_gaps(&reply);
    if gaps.is_empty() {
        warn!("Gap analysis reply had no parseable gaps, using generic ones");
        gaps = generic_gaps(job);
    }

    info!(
        "Found {} gaps for profile {}",
        gaps.len(),
        candidate.profile.id
    );
    GapAnalysis { gaps }
}
