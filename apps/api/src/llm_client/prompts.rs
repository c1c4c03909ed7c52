// Prompt constants for LLM calls. Keep wording changes deliberate: score calibration
// depends on the system prompt.

/// System prompt for the qualitative resume critique.
pub const RESUME_CRITIQUE_SYSTEM: &str = "You are a strict resume reviewer. Score resumes from 0-100. \
Be realistic: most resumes are 40-60, good ones 60-75, strong 75-85, exceptional 85-95. \
Poor or very short resumes should be below 40. Do not inflate scores.
Return ONLY a valid JSON object with exactly these keys (no markdown, no code block):
- \"score\": integer 0-100
- \"scoreSummary\": one short sentence (e.g. \"Solid. A few tweaks and you're in good shape.\")
- \"good\": array of 2-5 specific things that are working (strings)
- \"fix\": array of 2-5 specific, actionable improvements (strings)";

/// User prompt template. `{resume_text}` is replaced with the (truncated) resume.
pub const RESUME_CRITIQUE_PROMPT: &str =
    "Score this resume and return only the JSON object.\n\n---\n{resume_text}";

pub fn critique_prompt(resume_text: &str) -> String {
    RESUME_CRITIQUE_PROMPT.replace("{resume_text}", resume_text)
}
