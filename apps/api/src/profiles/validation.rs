//! Field rules for incoming profile, education and experience payloads.
//!
//! Each validator trims the payload, checks every rule, and reports all
//! violations at once as a single `UnprocessableEntity` error.

use std::sync::OnceLock;

use chrono::NaiveDate;
use regex::Regex;

use crate::errors::AppError;
use crate::models::profile::{EducationCreate, ExperienceCreate, ProfileCreate};

const NAME_MAX: usize = 100;
const EMAIL_MAX: usize = 255;
const LOCATION_MAX: usize = 100;
const PHONE_MAX: usize = 20;
const URL_MAX: usize = 255;
const RECORD_TEXT_MAX: usize = 255;

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
            .expect("email pattern is valid")
    })
}

#[derive(Default)]
struct Violations(Vec<String>);

impl Violations {
    fn required(&mut self, field: &str, value: &str, max: usize) {
        let len = value.chars().count();
        if len == 0 || len > max {
            self.0
                .push(format!("{field} must be between 1 and {max} characters"));
        }
    }

    fn optional(&mut self, field: &str, value: Option<&str>, min: usize, max: usize) {
        if let Some(value) = value {
            let len = value.chars().count();
            if len < min || len > max {
                if min == 0 {
                    self.0.push(format!("{field} must be at most {max} characters"));
                } else {
                    self.0
                        .push(format!("{field} must be between {min} and {max} characters"));
                }
            }
        }
    }

    fn date_range(&mut self, start: NaiveDate, end: Option<NaiveDate>) {
        if let Some(end) = end {
            if end < start {
                self.0
                    .push("end_date must not be earlier than start_date".to_string());
            }
        }
    }

    fn finish<T>(self, value: T) -> Result<T, AppError> {
        if self.0.is_empty() {
            Ok(value)
        } else {
            Err(AppError::UnprocessableEntity(self.0.join("; ")))
        }
    }
}

fn trimmed(value: String) -> String {
    value.trim().to_string()
}

fn trimmed_opt(value: Option<String>) -> Option<String> {
    value.map(trimmed)
}

/// Link and free-text fields: blank means absent.
fn non_blank(value: Option<String>) -> Option<String> {
    trimmed_opt(value).filter(|v| !v.is_empty())
}

pub fn validate_profile(input: ProfileCreate) -> Result<ProfileCreate, AppError> {
    let profile = ProfileCreate {
        first_name: trimmed(input.first_name),
        last_name: trimmed(input.last_name),
        email: trimmed(input.email),
        country: trimmed_opt(input.country),
        state: trimmed_opt(input.state),
        city: trimmed_opt(input.city),
        phone: non_blank(input.phone),
        linkedin_url: non_blank(input.linkedin_url),
        github_url: non_blank(input.github_url),
        personal_website: non_blank(input.personal_website),
        other_url: non_blank(input.other_url),
        about_me: non_blank(input.about_me),
    };

    let mut violations = Violations::default();
    violations.required("first_name", &profile.first_name, NAME_MAX);
    violations.required("last_name", &profile.last_name, NAME_MAX);
    if profile.email.chars().count() > EMAIL_MAX || !email_pattern().is_match(&profile.email) {
        violations
            .0
            .push("email is not a valid email address".to_string());
    }
    violations.optional("country", profile.country.as_deref(), 1, LOCATION_MAX);
    violations.optional("state", profile.state.as_deref(), 1, LOCATION_MAX);
    violations.optional("city", profile.city.as_deref(), 1, LOCATION_MAX);
    violations.optional("phone", profile.phone.as_deref(), 0, PHONE_MAX);
    violations.optional("linkedin_url", profile.linkedin_url.as_deref(), 0, URL_MAX);
    violations.optional("github_url", profile.github_url.as_deref(), 0, URL_MAX);
    violations.optional("personal_website", profile.personal_website.as_deref(), 0, URL_MAX);
    violations.optional("other_url", profile.other_url.as_deref(), 0, URL_MAX);

    violations.finish(profile)
}

pub fn validate_education(input: EducationCreate) -> Result<EducationCreate, AppError> {
    let education = EducationCreate {
        institution: trimmed(input.institution),
        degree: trimmed(input.degree),
        start_date: input.start_date,
        end_date: input.end_date,
        additional_info: non_blank(input.additional_info),
    };

    let mut violations = Violations::default();
    violations.required("institution", &education.institution, RECORD_TEXT_MAX);
    violations.required("degree", &education.degree, RECORD_TEXT_MAX);
    violations.date_range(education.start_date, education.end_date);

    violations.finish(education)
}

pub fn validate_experience(input: ExperienceCreate) -> Result<ExperienceCreate, AppError> {
    let experience = ExperienceCreate {
        profile_id: input.profile_id,
        job_title: trimmed(input.job_title),
        company: trimmed(input.company),
        start_date: input.start_date,
        end_date: input.end_date,
        description: non_blank(input.description),
    };

    let mut violations = Violations::default();
    violations.required("job_title", &experience.job_title, RECORD_TEXT_MAX);
    violations.required("company", &experience.company, RECORD_TEXT_MAX);
    violations.date_range(experience.start_date, experience.end_date);

    violations.finish(experience)
}
