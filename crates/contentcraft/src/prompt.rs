//! Prompt template for the content strategist model.

use crate::request::{ContentRequest, FormError};

/// Render the generation prompt for `request`.
///
/// Pure and deterministic: the same request always yields the same string.
/// Free-text fields are interpolated verbatim.
pub fn build_prompt(request: &ContentRequest) -> String {
    format!(
        "\
You are an expert social media content strategist AI called ContentCraft.

Generate high-quality social media content ONLY in {language}.

Platform: {platform}
Tone of voice: {tone}
Content Type: {content_type}
Number of post ideas/captions: {count}

Brand / Business Description:
{brand}

Niche / Industry:
{niche}

Campaign / Goal:
{goal}

Instructions:
- Return content in a clean, numbered list.
- For each idea, give:
  - A short title (3–6 words)
  - Main caption (2–4 lines)
  - 3–8 relevant hashtags.
- Adapt style to the selected platform.
- Do NOT add any extra explanation outside the content.",
        language = request.language(),
        platform = request.platform(),
        tone = request.tone(),
        content_type = request.content_type(),
        count = request.count(),
        brand = request.brand_description(),
        niche = request.niche(),
        goal = request.goal(),
    )
}

/// Validate `request`, then render its prompt. Blank required fields yield
/// the same [`FormError`] a submission would.
pub fn checked_prompt(request: &ContentRequest) -> Result<String, FormError> {
    request.validate()?;
    Ok(build_prompt(request))
}
