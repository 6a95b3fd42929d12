//! The brand identity document returned by the model.
//!
//! The decoded JSON object is kept as-is and is what gets serialized, so an
//! export is exactly what the model produced. The typed sections are read from
//! it independently: a section with an unexpected shape is left out of the
//! typed view without affecting the others.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::deserializers::{
    de_option_string_list_forgiving, de_option_text_forgiving, de_text_forgiving, json_kind,
    value_to_text,
};
use crate::error::{BrandzError, Result};

/// Key the interpreter uses for the extracted logo data URI.
pub const LOGO_IMAGE_KEY: &str = "generated_logo_image";

/// Typed sections are read-only views of `document`; use the setters to change
/// the document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BrandIdentity {
    pub brand_name_suggestions: Option<Vec<String>>,
    pub taglines: Option<Vec<String>>,
    pub color_palette: Option<ColorPalette>,
    pub color_psychology: Option<String>,
    pub typography: Option<Typography>,
    pub logo_concepts: Option<Vec<LogoConcept>>,
    pub brand_voice: Option<BrandVoice>,
    pub brand_guidelines: Option<BrandGuidelines>,
    pub marketing_applications: Option<MarketingApplications>,
    /// Data URI attached by the interpreter, never requested as part of the JSON
    pub generated_logo_image: Option<String>,
    /// Set instead of every other field when generation failed as a whole
    pub error: Option<String>,
    document: Map<String, Value>,
}

fn section<T>(
    document: &Map<String, Value>,
    key: &str,
    decode: impl FnOnce(Value) -> std::result::Result<Option<T>, serde_json::Error>,
) -> Option<T> {
    let value = document.get(key).filter(|v| !v.is_null())?;
    match decode(value.clone()) {
        Ok(decoded) => decoded,
        Err(e) => {
            tracing::warn!("Ignoring `{}` section with unexpected shape: {}", key, e);
            None
        }
    }
}

fn text(value: Value) -> std::result::Result<Option<String>, serde_json::Error> {
    Ok(value_to_text(value))
}

impl BrandIdentity {
    /// Decode a JSON object into a brand identity. Anything other than an
    /// object is malformed; section shapes are never fatal.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(document) => Ok(Self::from_document(document)),
            other => Err(BrandzError::MalformedJson {
                message: format!("expected a JSON object, got {}", json_kind(&other)),
            }),
        }
    }

    pub fn from_document(document: Map<String, Value>) -> Self {
        Self {
            brand_name_suggestions: section(&document, "brand_name_suggestions", |v| {
                de_option_string_list_forgiving(v)
            }),
            taglines: section(&document, "taglines", |v| de_option_string_list_forgiving(v)),
            color_palette: section(&document, "color_palette", |v| {
                ColorPalette::deserialize(v).map(Some)
            }),
            color_psychology: section(&document, "color_psychology", text),
            typography: section(&document, "typography", |v| {
                Typography::deserialize(v).map(Some)
            }),
            logo_concepts: section(&document, "logo_concepts", |v| {
                Vec::<LogoConcept>::deserialize(v).map(Some)
            }),
            brand_voice: section(&document, "brand_voice", |v| {
                BrandVoice::deserialize(v).map(Some)
            }),
            brand_guidelines: section(&document, "brand_guidelines", |v| {
                BrandGuidelines::deserialize(v).map(Some)
            }),
            marketing_applications: section(&document, "marketing_applications", |v| {
                MarketingApplications::deserialize(v).map(Some)
            }),
            generated_logo_image: section(&document, LOGO_IMAGE_KEY, text),
            error: section(&document, "error", text),
            document,
        }
    }

    /// The JSON object exactly as decoded, plus any attached logo.
    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    pub fn set_logo_image(&mut self, uri: impl Into<String>) {
        let uri = uri.into();
        self.document
            .insert(LOGO_IMAGE_KEY.to_string(), Value::String(uri.clone()));
        self.generated_logo_image = Some(uri);
    }

    /// The document-level failure message, if the document reports one.
    pub fn failure(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.trim().is_empty())
    }

    pub fn has_logo_image(&self) -> bool {
        self.generated_logo_image.is_some()
    }
}

impl Serialize for BrandIdentity {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.document.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for BrandIdentity {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let document = Map::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_document(document))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Typography {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_option_text_forgiving"
    )]
    pub primary_font: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_option_text_forgiving"
    )]
    pub secondary_font: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_option_text_forgiving"
    )]
    pub font_rationale: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogoConcept {
    #[serde(default, deserialize_with = "de_text_forgiving")]
    pub concept: String,
    #[serde(default, deserialize_with = "de_text_forgiving")]
    pub description: String,
    #[serde(default, deserialize_with = "de_text_forgiving")]
    pub style: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandVoice {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_option_text_forgiving"
    )]
    pub tone: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_option_string_list_forgiving"
    )]
    pub personality_traits: Option<Vec<String>>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_option_text_forgiving"
    )]
    pub communication_style: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BrandGuidelines {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_option_text_forgiving"
    )]
    pub logo_usage: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_option_text_forgiving"
    )]
    pub color_usage: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_option_text_forgiving"
    )]
    pub typography_usage: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_option_text_forgiving"
    )]
    pub imagery_style: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MarketingApplications {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_option_text_forgiving"
    )]
    pub website_copy: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_option_text_forgiving"
    )]
    pub social_media_bio: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "de_option_text_forgiving"
    )]
    pub elevator_pitch: Option<String>,
}

/// One palette entry, e.g. `primary` → `#1A73E8`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColorSwatch {
    pub role: String,
    pub hex: String,
}

/// Palette roles in the order the model listed them.
///
/// Serialized as a JSON object (`{"primary": "#..."}`); a plain map type would
/// lose the model's ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorPalette(pub Vec<ColorSwatch>);

impl ColorPalette {
    pub fn swatches(&self) -> &[ColorSwatch] {
        &self.0
    }

    pub fn get(&self, role: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|s| s.role == role)
            .map(|s| s.hex.as_str())
    }
}

impl Serialize for ColorPalette {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for swatch in &self.0 {
            map.serialize_entry(&swatch.role, &swatch.hex)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for ColorPalette {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PaletteVisitor;

        impl<'de> Visitor<'de> for PaletteVisitor {
            type Value = ColorPalette;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of color role to hex code")
            }

            fn visit_map<A>(self, mut access: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut swatches: Vec<ColorSwatch> = Vec::new();
                while let Some((role, value)) = access.next_entry::<String, Value>()? {
                    let Some(hex) = value_to_text(value) else {
                        continue;
                    };
                    // last duplicate wins, like a JSON object
                    if let Some(existing) = swatches.iter_mut().find(|s| s.role == role) {
                        existing.hex = hex;
                    } else {
                        swatches.push(ColorSwatch { role, hex });
                    }
                }
                Ok(ColorPalette(swatches))
            }
        }

        deserializer.deserialize_map(PaletteVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_document() -> Value {
        json!({
            "brand_name_suggestions": ["Lumen", "Brightly", "Glowup"],
            "taglines": ["Light the way", "Shine on"],
            "color_palette": {
                "primary": "#1A73E8",
                "secondary": "#FBBC05",
                "accent": "#EA4335",
                "neutral": "#F1F3F4",
                "text": "#202124"
            },
            "color_psychology": "Blue builds trust.",
            "typography": {
                "primary_font": "Montserrat Bold",
                "secondary_font": "Roboto Regular",
                "font_rationale": "Modern and legible."
            },
            "logo_concepts": [
                {"concept": "Beam", "description": "A rising ray", "style": "Minimal"}
            ],
            "brand_voice": {
                "tone": "Warm",
                "personality_traits": ["Helpful", "Clear"],
                "communication_style": "Short sentences."
            },
            "brand_guidelines": {
                "logo_usage": "Keep clear space.",
                "color_usage": "Primary for CTAs.",
                "typography_usage": "Headlines in Montserrat.",
                "imagery_style": "Bright photography."
            },
            "marketing_applications": {
                "website_copy": "Welcome to Lumen.",
                "social_media_bio": "Lighting up your day.",
                "elevator_pitch": "Lumen makes lighting simple."
            }
        })
    }

    #[test]
    fn test_full_document_decodes() {
        let identity = BrandIdentity::from_value(full_document()).unwrap();
        assert_eq!(identity.brand_name_suggestions.as_ref().unwrap().len(), 3);
        let palette = identity.color_palette.as_ref().unwrap();
        assert_eq!(palette.get("accent"), Some("#EA4335"));
        let roles: Vec<&str> = palette.swatches().iter().map(|s| s.role.as_str()).collect();
        assert_eq!(roles, ["primary", "secondary", "accent", "neutral", "text"]);
        assert_eq!(
            identity.typography.as_ref().unwrap().primary_font.as_deref(),
            Some("Montserrat Bold")
        );
        assert_eq!(identity.logo_concepts.as_ref().unwrap()[0].style, "Minimal");
        assert_eq!(identity.document().len(), 9);
        assert!(!identity.has_logo_image());
        assert!(identity.failure().is_none());
    }

    #[test]
    fn test_reserializes_to_the_same_json() {
        let identity = BrandIdentity::from_value(full_document()).unwrap();
        assert_eq!(serde_json::to_value(&identity).unwrap(), full_document());
    }

    #[test]
    fn test_unknown_keys_are_preserved() {
        let identity = BrandIdentity::from_value(json!({"a": 1, "mascot": {"name": "Lu"}})).unwrap();
        assert_eq!(identity.document().get("a"), Some(&json!(1)));
        assert_eq!(
            serde_json::to_value(&identity).unwrap(),
            json!({"a": 1, "mascot": {"name": "Lu"}})
        );
    }

    #[test]
    fn test_missing_logo_concept_fields_default_to_empty() {
        let identity =
            BrandIdentity::from_value(json!({"logo_concepts": [{"concept": "Wave"}]})).unwrap();
        let concept = &identity.logo_concepts.unwrap()[0];
        assert_eq!(concept.concept, "Wave");
        assert_eq!(concept.description, "");
        assert_eq!(concept.style, "");
    }

    #[test]
    fn test_null_sections_are_absent() {
        let identity =
            BrandIdentity::from_value(json!({"typography": null, "taglines": null})).unwrap();
        assert!(identity.typography.is_none());
        assert!(identity.taglines.is_none());
    }

    #[test]
    fn test_non_object_is_malformed() {
        let err = BrandIdentity::from_value(json!([1, 2])).unwrap_err();
        assert!(matches!(err, BrandzError::MalformedJson { .. }));
    }

    #[test]
    fn test_mistyped_section_leaves_the_rest_intact() {
        let input = json!({
            "taglines": ["Brew better"],
            "typography": "Montserrat and Roboto",
            "color_palette": ["#112233", "#445566"]
        });
        let identity = BrandIdentity::from_value(input.clone()).unwrap();
        assert_eq!(identity.taglines, Some(vec!["Brew better".to_string()]));
        assert!(identity.typography.is_none());
        assert!(identity.color_palette.is_none());
        assert_eq!(serde_json::to_value(&identity).unwrap(), input);
    }

    #[test]
    fn test_serializes_exactly_what_was_decoded() {
        let input = json!({
            "color_psychology": 42,
            "taglines": "One",
            "brand_name_suggestions": ["A", null]
        });
        let identity = BrandIdentity::from_value(input.clone()).unwrap();
        assert_eq!(identity.color_psychology.as_deref(), Some("42"));
        assert_eq!(identity.taglines, Some(vec!["One".to_string()]));
        assert_eq!(identity.brand_name_suggestions, Some(vec!["A".to_string()]));
        assert_eq!(serde_json::to_value(&identity).unwrap(), input);
    }

    #[test]
    fn test_set_logo_image_updates_document() {
        let mut identity = BrandIdentity::from_value(json!({"a": 1})).unwrap();
        identity.set_logo_image("data:image/png;base64,QUJD");
        assert!(identity.has_logo_image());
        assert_eq!(
            identity.document().get(LOGO_IMAGE_KEY),
            Some(&json!("data:image/png;base64,QUJD"))
        );
    }

    #[test]
    fn test_error_document() {
        let identity = BrandIdentity::from_value(json!({"error": "quota exceeded"})).unwrap();
        assert_eq!(identity.failure(), Some("quota exceeded"));
        let blank = BrandIdentity::from_value(json!({"error": "  "})).unwrap();
        assert!(blank.failure().is_none());
    }

    #[test]
    fn test_palette_duplicate_roles_keep_first_position() {
        let palette: ColorPalette =
            serde_json::from_str(r##"{"primary": "#000", "accent": "#111", "primary": "#222"}"##)
                .unwrap();
        assert_eq!(palette.swatches().len(), 2);
        assert_eq!(palette.swatches()[0].hex, "#222");
    }
}
