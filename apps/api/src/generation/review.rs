//! Candidate-to-job match review: a 0-100 score plus improvement suggestions.

use tracing::{info, warn};

use crate::generation::formatting::{format_education, format_experience};
use crate::generation::prompts::{fill, REVIEW_PROMPT_TEMPLATE};
use crate::llm_client::ChatModel;
use crate::models::job::{JobDescription, ReviewResponse};
use crate::models::profile::Candidate;

const DEFAULT_SCORE: u8 = 50;
const MAX_SUGGESTIONS: usize = 5;

pub fn build_review_prompt(candidate: &Candidate, job: &JobDescription) -> String {
    let profile = &candidate.profile;
    let education = format_education(&candidate.education);
    let experience = format_experience(&candidate.experience);

    fill(
        REVIEW_PROMPT_TEMPLATE,
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

/// Reads the leading integer out of a score value such as `85`, `[72]`, `-5`
/// or `90/100`, clamped to 0..=100.
fn parse_score(value: &str) -> Option<u8> {
    let value = value.trim().trim_start_matches('[').trim_start();
    let (negative, rest) = match value.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, value.strip_prefix('+').unwrap_or(value)),
    };

    let mut digits = rest.chars().take_while(char::is_ascii_digit).peekable();
    digits.peek()?;
    let magnitude = digits.fold(0i64, |acc, c| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(c.to_digit(10).unwrap_or(0)))
    });
    let score = if negative { -magnitude } else { magnitude };
    Some(score.clamp(0, 100) as u8)
}

fn generic_suggestions(job: &JobDescription) -> Vec<String> {
    vec![
        format!("Review your skills against the requirements for {}", job.title),
        format!(
            "Consider highlighting specific achievements relevant to {}",
            job.company_name
        ),
        "Update your profile with more detailed technical skills".to_string(),
    ]
}

/// Parses the `SCORE:` / `- suggestion` reply format.
pub fn parse_review(reply: &str, job: &JobDescription) -> ReviewResponse {
    let mut match_score = DEFAULT_SCORE;
    let mut suggestions = Vec::new();

    for line in reply.lines().map(str::trim) {
        if let Some(value) = line.strip_prefix("SCORE:") {
            if let Some(score) = parse_score(value) {
                match_score = score;
            }
        } else if let Some(suggestion) = line.strip_prefix('-') {
            let suggestion = suggestion.trim();
            if line.len() > 2 && !suggestion.is_empty() {
                suggestions.push(suggestion.to_string());
            }
        }
    }

    if suggestions.is_empty() {
        suggestions = generic_suggestions(job);
    }
    suggestions.truncate(MAX_SUGGESTIONS);

    ReviewResponse {
        match_score,
        suggestions,
    }
}

pub fn fallback_review() -> ReviewResponse {
    ReviewResponse {
        match_score: DEFAULT_SCORE,
        suggestions: vec![
            "Unable to generate personalized suggestions. Consider reviewing your skills against the job description."
                .to_string(),
        ],
    }
}

pub async fn review_match(
    llm: &dyn ChatModel,
    candidate: &Candidate,
    job: &JobDescription,
) -> ReviewResponse {
    let prompt = build_review_prompt(candidate, job);

    match llm.complete(&prompt, None).await {
        Ok(reply) => {
            let review = parse_review(&reply, job);
            info!(
                "Match review for profile {}: score {}",
                candidate.profile.id, review.match_score
            );
            review
        }
        Err(e) => {
            warn!("Match review failed, returning neutral score: {e}");
            fallback_review()
        }
    }
}
