use tracing::warn;

use crate::errors::AppError;
use crate::generation::prompts::{fill, GREETING_PROMPT_TEMPLATE};
use crate::llm_client::ChatModel;

/// Asks the model for a short greeting. There is no canned fallback.
pub async fn greet(llm: &dyn ChatModel, name: Option<&str>) -> Result<String, AppError> {
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::Validation("Name is required".to_string()))?;

    let prompt = fill(GREETING_PROMPT_TEMPLATE, &[("name", name)]);
    llm.complete(&prompt, None).await.map_err(|e| {
        warn!("Greeting generation failed: {e}");
        AppError::LlmUnavailable
    })
}
