use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A profile joined with its social media links.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct ProfileRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub personal_website: Option<String>,
    pub other_url: Option<String>,
    pub about_me: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ProfileRow {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct EducationRow {
    pub id: i64,
    pub profile_id: i64,
    pub institution: String,
    pub degree: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub additional_info: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct ExperienceRow {
    pub id: i64,
    pub profile_id: i64,
    pub job_title: String,
    pub company: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/profile`. Unknown fields (such as a client-side `id`) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub linkedin_url: Option<String>,
    pub github_url: Option<String>,
    pub personal_website: Option<String>,
    pub other_url: Option<String>,
    pub about_me: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EducationCreate {
    pub institution: String,
    pub degree: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub additional_info: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExperienceCreate {
    pub profile_id: i64,
    pub job_title: String,
    pub company: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub description: Option<String>,
}

/// Everything stored about one candidate.
#[derive(Debug, Clone, Serialize)]
pub struct Candidate {
    pub profile: ProfileRow,
    pub education: Vec<EducationRow>,
    pub experience: Vec<ExperienceRow>,
}

/// Body of `GET /api/profile/:id/export`.
pub type ProfileExport = Candidate;
