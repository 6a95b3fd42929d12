//! Prompt text sent to the generative model.
//!
//! The prompt asks for a JSON document shaped like [`crate::brand::BrandIdentity`]
//! followed by a logo data URI labeled [`LOGO_IMAGE_LABEL`].

/// Label the model is asked to put in front of the logo data URI.
pub const LOGO_IMAGE_LABEL: &str = "LOGO_IMAGE:";

/// Render the brand-identity prompt.
///
/// Inputs are interpolated verbatim; `personality` is already a
/// comma-separated list.
pub fn build_prompt(
    description: &str,
    demographic: &str,
    industry: &str,
    personality: &str,
) -> String {
    format!(
        r##"You are a professional brand designer and marketing strategist. Create a comprehensive brand identity package for the following company:

Company Description: {description}
Target Demographic: {demographic}
Industry: {industry}
Brand Personality: {personality}

Please provide a complete brand identity package in JSON format with the following structure:
{{
    "brand_name_suggestions": ["suggestion1", "suggestion2", "suggestion3"],
    "taglines": ["tagline1", "tagline2", "tagline3"],
    "color_palette": {{
        "primary": "#hexcode",
        "secondary": "#hexcode",
        "accent": "#hexcode",
        "neutral": "#hexcode",
        "text": "#hexcode"
    }},
    "color_psychology": "Explanation of color choices",
    "typography": {{
        "primary_font": "Font name and style",
        "secondary_font": "Font name and style",
        "font_rationale": "Why these fonts work"
    }},
    "logo_concepts": [
        {{
            "concept": "Logo concept 1",
            "description": "Detailed description",
            "style": "Design style"
        }},
        {{
            "concept": "Logo concept 2",
            "description": "Detailed description",
            "style": "Design style"
        }},
        {{
            "concept": "Logo concept 3",
            "description": "Detailed description",
            "style": "Design style"
        }}
    ],
    "brand_voice": {{
        "tone": "Brand tone description",
        "personality_traits": ["trait1", "trait2", "trait3"],
        "communication_style": "How the brand communicates"
    }},
    "brand_guidelines": {{
        "logo_usage": "Guidelines for logo usage",
        "color_usage": "Guidelines for color application",
        "typography_usage": "Guidelines for font usage",
        "imagery_style": "Style guide for images and graphics"
    }},
    "marketing_applications": {{
        "website_copy": "Sample homepage copy",
        "social_media_bio": "Sample social media bio",
        "elevator_pitch": "30-second brand pitch"
    }}
}}

Additionally, generate a simple, modern, and unique logo for this brand as a base64-encoded SVG or PNG image. Output the image as a data URI (e.g., data:image/svg+xml;base64,... or data:image/png;base64,...). Place the data URI immediately after the JSON, clearly labeled as '{LOGO_IMAGE_LABEL}'.

Make sure all hex codes are valid and the brand identity is cohesive and professional.
"##
    )
}
