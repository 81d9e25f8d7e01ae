//! Rewrites a single resume achievement statement in a chosen style.

use tracing::{info, warn};

use crate::generation::prompts::{fill, ACHIEVEMENT_PROMPT_TEMPLATE};
use crate::llm_client::prompts::PLAIN_OUTPUT_INSTRUCTION;
use crate::llm_client::ChatModel;
use crate::models::job::RewriteStyle;

pub const EMPTY_ACHIEVEMENT_REPLY: &str = "Please provide an achievement statement to rewrite.";

pub fn build_achievement_prompt(text: &str, style: RewriteStyle, context: Option<&str>) -> String {
    let context = context
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or("No additional context provided.");

    fill(
        ACHIEVEMENT_PROMPT_TEMPLATE,
        &[
            ("style", style.as_str()),
            ("achievement", text),
            ("context", context),
            ("plain_output", PLAIN_OUTPUT_INSTRUCTION),
        ],
    )
}

fn strip_pair(text: &str, quote: char) -> &str {
    text.strip_prefix(quote)
        .and_then(|inner| inner.strip_suffix(quote))
        .unwrap_or(text)
}

/// Trims the reply and removes one pair of double quotes, then one pair of single quotes.
pub fn clean_rewrite(reply: &str) -> String {
    let text = strip_pair(reply.trim(), '"');
    strip_pair(text, '\'').to_string()
}

/// Minimal local polish used when the model is unavailable.
pub fn fallback_rewrite(text: &str) -> String {
    let mut enhanced = text.trim().to_string();
    if !enhanced.ends_with('.') {
        enhanced.push('.');
    }

    let mut chars = enhanced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => enhanced,
    }
}

pub async fn rewrite_achievement(
    llm: &dyn ChatModel,
    text: &str,
    style: RewriteStyle,
    context: Option<&str>,
) -> String {
    if text.trim().is_empty() {
        return EMPTY_ACHIEVEMENT_REPLY.to_string();
    }

    let prompt = build_achievement_prompt(text, style, context);
    match llm.complete(&prompt, None).await {
        Ok(reply) => {
            info!("Rewrote achievement in {} style", style.as_str());
            clean_rewrite(&reply)
        }
        Err(e) => {
            warn!("AI service unavailable, using basic enhancement: {e}");
            fallback_rewrite(text)
        }
    }
}
