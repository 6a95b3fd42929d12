//! Display-ready projection of a [`BrandIdentity`].
//!
//! Each section is present exactly when the matching document field is present.
//! Absent keys are skipped during serialization so templates can test them with
//! `is defined`.

use serde::Serialize;

use crate::brand::{BrandIdentity, ColorPalette};

/// Shown for a sub-field the model left out of a section it did return.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BrandView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name_suggestions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taglines: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub palette: Option<PaletteView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typography: Option<TypographyView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_concepts: Option<Vec<ConceptView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_voice: Option<VoiceView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marketing: Option<MarketingView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guidelines: Option<GuidelinesView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaletteView {
    pub swatches: Vec<SwatchView>,
    /// Only shown alongside the palette
    #[serde(skip_serializing_if = "Option::is_none")]
    pub psychology: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SwatchView {
    pub role: String,
    pub hex: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypographyView {
    pub primary_font: String,
    pub secondary_font: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConceptView {
    pub heading: String,
    pub style: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VoiceView {
    pub tone: String,
    pub personality_traits: String,
    pub communication_style: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketingView {
    pub website_copy: String,
    pub social_media_bio: String,
    pub elevator_pitch: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GuidelinesView {
    pub logo_usage: String,
    pub color_usage: String,
    pub typography_usage: String,
    pub imagery_style: String,
}

fn or_na(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// `primary` → `Primary`, `light_neutral` → `Light_Neutral`.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

impl PaletteView {
    fn new(palette: &ColorPalette, psychology: &Option<String>) -> Self {
        Self {
            swatches: palette
                .swatches()
                .iter()
                .map(|s| SwatchView {
                    role: title_case(&s.role),
                    hex: s.hex.clone(),
                })
                .collect(),
            psychology: psychology.clone(),
        }
    }
}

impl BrandView {
    pub fn from_identity(identity: &BrandIdentity) -> Self {
        Self {
            name_suggestions: identity.brand_name_suggestions.clone(),
            taglines: identity.taglines.clone(),
            palette: identity
                .color_palette
                .as_ref()
                .map(|p| PaletteView::new(p, &identity.color_psychology)),
            typography: identity.typography.as_ref().map(|t| TypographyView {
                primary_font: or_na(&t.primary_font),
                secondary_font: or_na(&t.secondary_font),
                rationale: t.font_rationale.clone(),
            }),
            logo_concepts: identity.logo_concepts.as_ref().map(|concepts| {
                concepts
                    .iter()
                    .enumerate()
                    .map(|(i, c)| ConceptView {
                        heading: format!("Concept {}: {}", i + 1, c.concept),
                        style: c.style.clone(),
                        description: c.description.clone(),
                    })
                    .collect()
            }),
            brand_voice: identity.brand_voice.as_ref().map(|v| VoiceView {
                tone: or_na(&v.tone),
                personality_traits: v
                    .personality_traits
                    .as_deref()
                    .unwrap_or_default()
                    .join(", "),
                communication_style: or_na(&v.communication_style),
            }),
            marketing: identity
                .marketing_applications
                .as_ref()
                .map(|m| MarketingView {
                    website_copy: or_na(&m.website_copy),
                    social_media_bio: or_na(&m.social_media_bio),
                    elevator_pitch: or_na(&m.elevator_pitch),
                }),
            guidelines: identity.brand_guidelines.as_ref().map(|g| GuidelinesView {
                logo_usage: or_na(&g.logo_usage),
                color_usage: or_na(&g.color_usage),
                typography_usage: or_na(&g.typography_usage),
                imagery_style: or_na(&g.imagery_style),
            }),
            logo_image: identity
                .generated_logo_image
                .clone()
                .filter(|uri| uri.starts_with("data:image/")),
        }
    }
}
