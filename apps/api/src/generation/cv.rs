//! Tailored markdown CV generation, localized by hiring region.

use tracing::{info, warn};

use crate::generation::formatting::{format_education, format_experience};
use crate::generation::prompts::{
    fill, CV_BASELINE_SYSTEM, CV_GERMANY_SYSTEM, CV_INDIA_SYSTEM, CV_JAPAN_SYSTEM,
    CV_PROMPT_TEMPLATE, CV_UK_SYSTEM, CV_USA_SYSTEM,
};
use crate::llm_client::ChatModel;
use crate::models::job::{GeneratedCv, JobDescription};
use crate::models::profile::Candidate;

const NOT_PROVIDED: &str = "Not provided";

/// Hiring markets with their own CV conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CvRegion {
    Usa,
    Uk,
    Germany,
    Japan,
    India,
}

impl CvRegion {
    /// Case- and whitespace-insensitive lookup; unknown labels yield `None`.
    pub fn from_label(label: Option<&str>) -> Option<Self> {
        match label?.trim().to_lowercase().as_str() {
            "usa" => Some(CvRegion::Usa),
            "uk" => Some(CvRegion::Uk),
            "germany" => Some(CvRegion::Germany),
            "japan" => Some(CvRegion::Japan),
            "india" => Some(CvRegion::India),
            _ => None,
        }
    }

    pub fn system_prompt(&self) -> &'static str {
        match self {
            CvRegion::Usa => CV_USA_SYSTEM,
            CvRegion::Uk => CV_UK_SYSTEM,
            CvRegion::Germany => CV_GERMANY_SYSTEM,
            CvRegion::Japan => CV_JAPAN_SYSTEM,
            CvRegion::India => CV_INDIA_SYSTEM,
        }
    }
}

pub fn system_prompt_for(region: Option<CvRegion>) -> &'static str {
    region.map(|r| r.system_prompt()).unwrap_or(CV_BASELINE_SYSTEM)
}

pub fn build_cv_prompt(candidate: &Candidate, job: &JobDescription) -> String {
    let profile = &candidate.profile;
    let or_missing = |v: &Option<String>| v.clone().unwrap_or_else(|| NOT_PROVIDED.to_string());

    let location = format!(
        "{}, {}, {}",
        profile.city.as_deref().unwrap_or_default(),
        profile.state.as_deref().unwrap_or_default(),
        profile.country.as_deref().unwrap_or_default()
    );
    let education = format_education(&candidate.education);
    let experience = format_experience(&candidate.experience);

    fill(
        CV_PROMPT_TEMPLATE,
        &[
            ("full_name", &profile.full_name()),
            ("email", &profile.email),
            ("location", &location),
            ("phone", &or_missing(&profile.phone)),
            ("linkedin", &or_missing(&profile.linkedin_url)),
            ("github", &or_missing(&profile.github_url)),
            ("website", &or_missing(&profile.personal_website)),
            ("other_url", &or_missing(&profile.other_url)),
            ("about_me", &or_missing(&profile.about_me)),
            ("education", &education),
            ("experience", &experience),
            ("company", &job.company_name),
            ("position", &job.title),
            ("job_description", &job.description),
        ],
    )
}

/// Markdown CV assembled without the model.
pub fn fallback_cv(candidate: &Candidate, job: &JobDescription) -> String {
    let profile = &candidate.profile;

    let mut contact = vec![format!("- Email: {}", profile.email)];
    if let Some(phone) = &profile.phone {
        contact.push(format!("- Phone: {phone}"));
    }
    if let Some(city) = &profile.city {
        contact.push(format!(
            "- Location: {}, {}, {}",
            city,
            profile.state.as_deref().unwrap_or_default(),
            profile.country.as_deref().unwrap_or_default()
        ));
    }
    if let Some(linkedin) = &profile.linkedin_url {
        contact.push(format!("- LinkedIn: {linkedin}"));
    }
    if let Some(github) = &profile.github_url {
        contact.push(format!("- GitHub: {github}"));
    }
    if let Some(website) = &profile.personal_website {
        contact.push(format!("- Website: {website}"));
    }

    let summary = profile.about_me.as_deref().unwrap_or(
        "Professional looking to contribute skills and experience to a new opportunity.",
    );

    format!(
        "# {name}\n\n\
         ## Contact Information\n{contact}\n\n\
         ## Professional Summary\n{summary}\n\n\
         ## Education\n{education}\n\n\
         ## Work Experience\n{experience}\n\n\
         ## Skills\n\
         - Technical skills relevant to {title}\n\
         - Communication and teamwork\n\
         - Problem-solving abilities",
        name = profile.full_name(),
        contact = contact.join("\n"),
        education = format_education(&candidate.education),
        experience = format_experience(&candidate.experience),
        title = job.title,
    )
}

pub async fn build_cv(
    llm: &dyn ChatModel,
    candidate: &Candidate,
    job: &JobDescription,
    region: Option<CvRegion>,
) -> GeneratedCv {
    let prompt = build_cv_prompt(candidate, job);
    info!(
        "Generating CV for profile {} (region: {:?})",
        candidate.profile.id, region
    );

    let cv_text = match llm.complete(&prompt, Some(system_prompt_for(region))).await {
        Ok(text) => text,
        Err(e) => {
            warn!("AI model failed to generate CV, using fallback template: {e}");
            fallback_cv(candidate, job)
        }
    };

    GeneratedCv {
        format: "md".to_string(),
        cv_text: cv_text.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::profile::ProfileRow;
    use chrono::Utc;

    fn candidate() -> Candidate {
        Candidate {
            profile: ProfileRow {
                id: 1,
                first_name: "Isaac".to_string(),
                last_name: "Newton".to_string(),
                email: "isaac@applesdofall.org".to_string(),
                country: Some("England".to_string()),
                state: Some("Lincolnshire".to_string()),
                city: Some("Grantham".to_string()),
                phone: None,
                linkedin_url: None,
                github_url: Some("https://github.com/inewton".to_string()),
                personal_website: None,
                other_url: None,
                about_me: None,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            },
            education: vec![],
            experience: vec![],
        }
    }

    fn job() -> JobDescription {
        JobDescription {
            company_name: "Royal Mint".to_string(),
            title: "Warden".to_string(),
            description: "Mint coins".to_string(),
            ..JobDescription::default()
        }
    }

    #[test]
    fn test_region_lookup_normalizes_label() {
        assert_eq!(CvRegion::from_label(Some("  UK ")), Some(CvRegion::Uk));
        assert_eq!(CvRegion::from_label(Some("Germany")), Some(CvRegion::Germany));
        assert_eq!(CvRegion::from_label(Some("france")), None);
        assert_eq!(CvRegion::from_label(None), None);
    }

    #[test]
    fn test_unknown_region_uses_baseline_prompt() {
        assert_eq!(system_prompt_for(None), CV_BASELINE_SYSTEM);
        assert!(system_prompt_for(Some(CvRegion::Germany)).contains("Lebenslauf"));
        assert!(system_prompt_for(Some(CvRegion::Japan)).contains("Rirekisho"));
    }

    #[test]
    fn test_prompt_marks_missing_fields() {
        let prompt = build_cv_prompt(&candidate(), &job());
        assert!(prompt.contains("Full Name: Isaac Newton"));
        assert!(prompt.contains("Phone: Not provided"));
        assert!(prompt.contains("GitHub: https://github.com/inewton"));
        assert!(prompt.contains("Location: Grantham, Lincolnshire, England"));
        assert!(prompt.contains("Position: Warden"));
        assert!(prompt.contains("No formal education provided"));
    }

    #[test]
    fn test_fallback_lists_only_present_contact_lines() {
        let cv = fallback_cv(&candidate(), &job());
        assert!(cv.starts_with("# Isaac Newton\n"));
        assert!(cv.contains("- Email: isaac@applesdofall.org"));
        assert!(cv.contains("- GitHub: https://github.com/inewton"));
        assert!(!cv.contains("- Phone:"));
        assert!(!cv.contains("- LinkedIn:"));
        assert!(cv.contains("Professional looking to contribute"));
        assert!(cv.contains("- Technical skills relevant to Warden"));
    }
}
