//! Job-description extraction: free-form posting text into `JobDescription`.

use serde::Deserialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::generation::prompts::{fill, JOB_EXTRACT_PROMPT_TEMPLATE};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::llm_client::{extract_json_object, ChatModel};
use crate::models::job::JobDescription;

/// What the model returned, before deciding whether the text was a posting at all.
#[derive(Debug, PartialEq)]
pub enum Extraction {
    Parsed(JobDescription),
    NotAJobDescription,
    Unparseable,
}

#[derive(Debug, Deserialize)]
struct ExtractionReply {
    #[serde(default = "default_true")]
    is_job_description: bool,
    #[serde(flatten)]
    job: JobDescription,
}

fn default_true() -> bool {
    true
}

pub fn build_extraction_prompt(job_text: &str) -> String {
    fill(JOB_EXTRACT_PROMPT_TEMPLATE, &[("job_text", job_text)])
}

/// Pulls the JSON object out of the model reply and decodes it.
pub fn parse_extraction(reply: &str) -> Extraction {
    let Some(json) = extract_json_object(reply) else {
        return Extraction::Unparseable;
    };

    match serde_json::from_str::<ExtractionReply>(json) {
        Ok(parsed) if !parsed.is_job_description => Extraction::NotAJobDescription,
        Ok(parsed) if parsed.job.title.is_empty() && parsed.job.description.is_empty() => {
            Extraction::NotAJobDescription
        }
        Ok(parsed) => Extraction::Parsed(parsed.job),
        Err(e) => {
            warn!("Job description JSON did not decode: {e}");
            Extraction::Unparseable
        }
    }
}

/// Best-effort result when the reply has no usable JSON: keep the posting text whole.
pub fn fallback_job_description(job_text: &str) -> JobDescription {
    JobDescription {
        description: job_text.trim().to_string(),
        ..JobDescription::default()
    }
}

pub async fn extract_job_description(
    llm: &dyn ChatModel,
    job_text: &str,
) -> Result<JobDescription, AppError> {
    if job_text.trim().is_empty() {
        return Err(AppError::Validation("jobDescription cannot be empty".to_string()));
    }

    let prompt = build_extraction_prompt(job_text);
    let reply = llm
        .complete(&prompt, Some(JSON_ONLY_SYSTEM))
        .await
        .map_err(|e| {
            warn!("Job description extraction failed: {e}");
            AppError::LlmUnavailable
        })?;

    match parse_extraction(&reply) {
        Extraction::Parsed(job) => {
            info!("Extracted job description: title={:?} company={:?}", job.title, job.company_name);
            Ok(job)
        }
        Extraction::NotAJobDescription => Err(AppError::UnprocessableEntity(
            "The provided text does not appear to be a job description".to_string(),
        )),
        Extraction::Unparseable => {
            warn!("Model reply had no parseable JSON, keeping raw posting text");
            Ok(fallback_job_description(job_text))
        }
    }
}
