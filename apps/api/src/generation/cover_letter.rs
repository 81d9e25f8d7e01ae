//! Full cover letter generation from a profile and a job posting.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::generation::prompts::{fill, COVER_LETTER_PROMPT_TEMPLATE};
use crate::llm_client::prompts::PLAIN_OUTPUT_INSTRUCTION;
use crate::llm_client::ChatModel;
use crate::models::job::{CoverLetterStyle, JobDescription};
use crate::models::profile::ProfileRow;

const NOT_SPECIFIED: &str = "not specified";

/// Everything the prompt and the fallback letter need, with defaults applied.
#[derive(Debug, Clone, PartialEq)]
pub struct LetterDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub summary: String,
    pub job_title: String,
    pub company: String,
    pub recruiter: String,
    pub job_details: String,
    pub date: String,
}

impl LetterDetails {
    pub fn new(profile: &ProfileRow, job: &JobDescription, today: NaiveDate) -> Self {
        let location_parts: Vec<&str> = [&profile.city, &profile.state, &profile.country]
            .into_iter()
            .filter_map(|part| part.as_deref())
            .collect();
        let location = if location_parts.is_empty() {
            NOT_SPECIFIED.to_string()
        } else {
            location_parts.join(", ")
        };

        let or_default = |value: &str, default: &str| {
            if value.is_empty() {
                default.to_string()
            } else {
                value.to_string()
            }
        };

        Self {
            name: profile.full_name(),
            email: or_default(&profile.email, NOT_SPECIFIED),
            phone: profile
                .phone
                .clone()
                .unwrap_or_else(|| NOT_SPECIFIED.to_string()),
            location,
            summary: profile
                .about_me
                .clone()
                .unwrap_or_else(|| "a summary of my qualifications and experience.".to_string()),
            job_title: or_default(&job.title, "the advertised position"),
            company: or_default(&job.company_name, "your esteemed company"),
            recruiter: or_default(&job.recruiter_name, "Hiring Manager"),
            job_details: job_details(job),
            date: today.format("%B %d, %Y").to_string(),
        }
    }
}

fn job_details(job: &JobDescription) -> String {
    let lines: Vec<String> = [
        ("Job Title", &job.title),
        ("Company", &job.company_name),
        ("Location", &job.company_city),
        ("Description", &job.description),
    ]
    .into_iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(label, value)| format!("- {label}: {value}"))
    .collect();

    if lines.is_empty() {
        "Details about the job were not fully specified. Please refer to the job posting.".to_string()
    } else {
        lines.join("\n")
    }
}

pub fn build_cover_letter_prompt(
    details: &LetterDetails,
    style: CoverLetterStyle,
    notes: Option<&str>,
) -> String {
    let notes = notes
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or("No specific notes provided.");

    fill(
        COVER_LETTER_PROMPT_TEMPLATE,
        &[
            ("style", style.as_str()),
            ("name", &details.name),
            ("email", &details.email),
            ("phone", &details.phone),
            ("location", &details.location),
            ("summary", &details.summary),
            ("job_details", &details.job_details),
            ("recruiter", &details.recruiter),
            ("company", &details.company),
            ("notes", notes),
            ("date", &details.date),
            ("job_title", &details.job_title),
            ("plain_output", PLAIN_OUTPUT_INSTRUCTION),
        ],
    )
}

pub fn fallback_cover_letter(details: &LetterDetails) -> String {
    format!(
        "{name}\n{email}\n{phone}\n\n\
         {date}\n\n\
         {recruiter}\n{company}\n\n\
         Dear {recruiter},\n\n\
         I am writing to express my keen interest in the {job_title} position at {company}, as advertised. \
         My background includes: {summary}.\n\n\
         I am confident that my skills and experience align well with your requirements and I am eager to contribute to your team. \
         Thank you for considering my application. I look forward to hearing from you.\n\n\
         Sincerely,\n{name}",
        name = details.name,
        email = details.email,
        phone = details.phone,
        date = details.date,
        recruiter = details.recruiter,
        company = details.company,
        job_title = details.job_title,
        summary = details.summary.trim_end_matches('.'),
    )
}

pub async fn generate_cover_letter(
    llm: &dyn ChatModel,
    profile: &ProfileRow,
    job: &JobDescription,
    style: CoverLetterStyle,
    notes: Option<&str>,
    today: NaiveDate,
) -> String {
    let details = LetterDetails::new(profile, job, today);
    let prompt = build_cover_letter_prompt(&details, style, notes);
    info!(
        "Generating {} cover letter for profile {}",
        style.as_str(),
        profile.id
    );

    match llm.complete(&prompt, None).await {
        Ok(letter) => letter.trim().to_string(),
        Err(e) => {
            warn!("Cover letter generation failed, using fallback letter: {e}");
            fallback_cover_letter(&details)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn profile() -> ProfileRow {
        ProfileRow {
            id: 3,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            email: "grace@navy.mil".to_string(),
            country: Some("USA".to_string()),
            state: None,
            city: Some("Arlington".to_string()),
            phone: None,
            linkedin_url: None,
            github_url: None,
            personal_website: None,
            other_url: None,
            about_me: Some("Compiler pioneer.".to_string()),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()
    }

    #[test]
    fn test_details_apply_defaults_for_empty_job() {
        let details = LetterDetails::new(&profile(), &JobDescription::default(), today());
        assert_eq!(details.location, "Arlington, USA");
        assert_eq!(details.phone, "not specified");
        assert_eq!(details.job_title, "the advertised position");
        assert_eq!(details.company, "your esteemed company");
        assert_eq!(details.recruiter, "Hiring Manager");
        assert_eq!(details.date, "March 05, 2024");
        assert!(details.job_details.starts_with("Details about the job were not fully specified"));
    }

    #[test]
    fn test_job_details_only_present_fields() {
        let job = JobDescription {
            title: "Compiler Engineer".to_string(),
            company_city: "Boston".to_string(),
            ..JobDescription::default()
        };
        assert_eq!(
            job_details(&job),
            "- Job Title: Compiler Engineer\n- Location: Boston"
        );
    }

    #[test]
    fn test_missing_location_is_not_specified() {
        let mut profile = profile();
        profile.city = None;
        profile.country = None;
        let details = LetterDetails::new(&profile, &JobDescription::default(), today());
        assert_eq!(details.location, "not specified");
    }

    #[test]
    fn test_prompt_includes_style_and_default_notes() {
        let details = LetterDetails::new(&profile(), &JobDescription::default(), today());
        let prompt = build_cover_letter_prompt(&details, CoverLetterStyle::Technical, Some("   "));
        assert!(prompt.starts_with("Please write a complete cover letter in a technical style."));
        assert!(prompt.contains("No specific notes provided."));
        assert!(prompt.contains("Date: March 05, 2024."));
    }

    #[test]
    fn test_fallback_letter_addresses_recruiter() {
        let job = JobDescription {
            title: "Admiral".to_string(),
            company_name: "US Navy".to_string(),
            recruiter_name: "Ms. Smith".to_string(),
            ..JobDescription::default()
        };
        let details = LetterDetails::new(&profile(), &job, today());
        let letter = fallback_cover_letter(&details);
        assert!(letter.starts_with("Grace Hopper\ngrace@navy.mil\nnot specified\n\nMarch 05, 2024"));
        assert!(letter.contains("Dear Ms. Smith,"));
        assert!(letter.contains("the Admiral position at US Navy"));
        assert!(letter.contains("My background includes: Compiler pioneer.\n"));
        assert!(letter.ends_with("Sincerely,\nGrace Hopper"));
    }
}
