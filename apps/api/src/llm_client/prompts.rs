// Shared prompt fragments. Each generation module keeps its own templates
// in generation/prompts.rs; only cross-cutting pieces live here.

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Instruction appended to prompts whose reply is pasted verbatim into a document.
pub const PLAIN_OUTPUT_INSTRUCTION: &str = "\
    The output should be ONLY the requested text. \
    No extra explanations, introductions, or markdown code fences around it.";
