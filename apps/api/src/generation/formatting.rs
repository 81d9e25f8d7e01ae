//! Renders candidate records as the bullet lists embedded in prompts and fallbacks.

use crate::models::profile::{EducationRow, ExperienceRow};

pub fn format_education(educations: &[EducationRow]) -> String {
    if educations.is_empty() {
        return "No formal education provided".to_string();
    }

    educations
        .iter()
        .map(|edu| {
            let end = edu
                .end_date
                .map(|d| d.format("%Y-%m").to_string())
                .unwrap_or_else(|| "Present".to_string());
            let mut line = format!(
                "- {}, {}, {} to {}",
                edu.institution,
                edu.degree,
                edu.start_date.format("%Y-%m"),
                end
            );
            if let Some(info) = &edu.additional_info {
                line.push_str(", ");
                line.push_str(info);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_experience(experiences: &[ExperienceRow]) -> String {
    if experiences.is_empty() {
        return "No work experience provided".to_string();
    }

    experiences
        .iter()
        .map(|exp| {
            let end = exp
                .end_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "Present".to_string());
            let mut line = format!(
                "- {}, {}, {} to {}",
                exp.company, exp.job_title, exp.start_date, end
            );
            if let Some(description) = &exp.description {
                line.push_str("\n  ");
                line.push_str(description);
            }
            line
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn education(end: Option<NaiveDate>, info: Option<&str>) -> EducationRow {
        EducationRow {
            id: 1,
            profile_id: 1,
            institution: "Trinity College".to_string(),
            degree: "BA Mathematics".to_string(),
            start_date: NaiveDate::from_ymd_opt(2016, 9, 15).unwrap(),
            end_date: end,
            additional_info: info.map(str::to_string),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn experience(end: Option<NaiveDate>, description: Option<&str>) -> ExperienceRow {
        ExperienceRow {
            id: 1,
            profile_id: 1,
            job_title: "Software Engineer".to_string(),
            company: "Tech Company".to_string(),
            start_date: NaiveDate::from_ymd_opt(2020, 1, 1).unwrap(),
            end_date: end,
            description: description.map(str::to_string),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_lists_use_placeholders() {
        assert_eq!(format_education(&[]), "No formal education provided");
        assert_eq!(format_experience(&[]), "No work experience provided");
    }

    #[test]
    fn test_education_uses_year_month_and_info() {
        let rows = vec![education(NaiveDate::from_ymd_opt(2020, 6, 30), Some("First class honours"))];
        assert_eq!(
            format_education(&rows),
            "- Trinity College, BA Mathematics, 2016-09 to 2020-06, First class honours"
        );
    }

    #[test]
    fn test_open_ended_education_is_present() {
        let rows = vec![education(None, None)];
        assert_eq!(
            format_education(&rows),
            "- Trinity College, BA Mathematics, 2016-09 to Present"
        );
    }

    #[test]
    fn test_experience_uses_full_dates_and_indented_description() {
        let rows = vec![
            experience(NaiveDate::from_ymd_opt(2022, 12, 31), Some("Built web apps")),
            experience(None, None),
        ];
        assert_eq!(
            format_experience(&rows),
            "- Tech Company, Software Engineer, 2020-01-01 to 2022-12-31\n  Built web apps\n\
             - Tech Company, Software Engineer, 2020-01-01 to Present"
        );
    }
}
