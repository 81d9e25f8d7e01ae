use serde::{Deserialize, Deserializer, Serialize};

/// Structured fields of a job posting. Missing or `null` fields read as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JobDescription {
    #[serde(default, deserialize_with = "nullable_string")]
    pub company_name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub company_address: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub company_city: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub company_postal_code: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub recruiter_name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub title: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub description: String,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?
        .map(|s| s.trim().to_string())
        .unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedCv {
    pub format: String,
    pub cv_text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewResponse {
    #[serde(rename = "matchScore")]
    pub match_score: u8,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GapSeverity {
    Critical,
    Important,
    #[serde(rename = "Nice-to-have")]
    NiceToHave,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gap {
    pub gap_text: String,
    pub severity: GapSeverity,
    pub suggestion: String,
}

impl Gap {
    pub fn new(gap_text: impl Into<String>, severity: GapSeverity, suggestion: impl Into<String>) -> Self {
        Self {
            gap_text: gap_text.into(),
            severity,
            suggestion: suggestion.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GapAnalysis {
    pub gaps: Vec<Gap>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoverLetterStyle {
    #[default]
    Professional,
    Creative,
    Technical,
}

impl CoverLetterStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoverLetterStyle::Professional => "professional",
            CoverLetterStyle::Creative => "creative",
            CoverLetterStyle::Technical => "technical",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewriteStyle {
    #[default]
    Professional,
    Concise,
    Impactful,
    Quantitative,
}

impl RewriteStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            RewriteStyle::Professional => "professional",
            RewriteStyle::Concise => "concise",
            RewriteStyle::Impactful => "impactful",
            RewriteStyle::Quantitative => "quantitative",
        }
    }
}
