//! The company brief collected by the form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BrandzError, MISSING_REQUIRED_FIELDS, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Industry {
    #[default]
    Technology,
    Healthcare,
    Finance,
    Education,
    Retail,
    #[serde(rename = "Food & Beverage")]
    FoodAndBeverage,
    Travel,
    Fashion,
    #[serde(rename = "Real Estate")]
    RealEstate,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 10] = [
        Industry::Technology,
        Industry::Healthcare,
        Industry::Finance,
        Industry::Education,
        Industry::Retail,
        Industry::FoodAndBeverage,
        Industry::Travel,
        Industry::Fashion,
        Industry::RealEstate,
        Industry::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Industry::Technology => "Technology",
            Industry::Healthcare => "Healthcare",
            Industry::Finance => "Finance",
            Industry::Education => "Education",
            Industry::Retail => "Retail",
            Industry::FoodAndBeverage => "Food & Beverage",
            Industry::Travel => "Travel",
            Industry::Fashion => "Fashion",
            Industry::RealEstate => "Real Estate",
            Industry::Other => "Other",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Industry {
    type Err = BrandzError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Industry::ALL
            .into_iter()
            .find(|i| i.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BrandzError::validation(format!("Unknown industry: {wanted}")))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Personality {
    Professional,
    Friendly,
    Innovative,
    Trustworthy,
    Playful,
    Luxury,
    Minimalist,
    Bold,
    Caring,
    Energetic,
}

impl Personality {
    pub const ALL: [Personality; 10] = [
        Personality::Professional,
        Personality::Friendly,
        Personality::Innovative,
        Personality::Trustworthy,
        Personality::Playful,
        Personality::Luxury,
        Personality::Minimalist,
        Personality::Bold,
        Personality::Caring,
        Personality::Energetic,
    ];

    /// Preselected on a fresh form.
    pub const DEFAULTS: [Personality; 2] = [Personality::Professional, Personality::Trustworthy];

    pub fn label(&self) -> &'static str {
        match self {
            Personality::Professional => "Professional",
            Personality::Friendly => "Friendly",
            Personality::Innovative => "Innovative",
            Personality::Trustworthy => "Trustworthy",
            Personality::Playful => "Playful",
            Personality::Luxury => "Luxury",
            Personality::Minimalist => "Minimalist",
            Personality::Bold => "Bold",
            Personality::Caring => "Caring",
            Personality::Energetic => "Energetic",
        }
    }
}

impl fmt::Display for Personality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Personality {
    type Err = BrandzError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        Personality::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| BrandzError::validation(format!("Unknown brand personality: {wanted}")))
    }
}

/// Form input for one submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BrandBrief {
    pub company_description: String,
    pub target_demographic: String,
    pub industry: Industry,
    pub brand_personality: Vec<Personality>,
}

impl Default for BrandBrief {
    fn default() -> Self {
        Self {
            company_description: String::new(),
            target_demographic: String::new(),
            industry: Industry::default(),
            brand_personality: Personality::DEFAULTS.to_vec(),
        }
    }
}

impl BrandBrief {
    pub fn new(
        company_description: impl Into<String>,
        target_demographic: impl Into<String>,
        industry: Industry,
        mut brand_personality: Vec<Personality>,
    ) -> Self {
        brand_personality.sort();
        brand_personality.dedup();
        Self {
            company_description: company_description.into(),
            target_demographic: target_demographic.into(),
            industry,
            brand_personality,
        }
    }

    /// Build a brief from urlencoded form pairs. `brand_personality` may repeat;
    /// a missing `industry` falls back to the first choice. An empty
    /// personality selection is allowed.
    pub fn from_form_pairs(pairs: &[(String, String)]) -> Result<Self> {
        let mut description = String::new();
        let mut demographic = String::new();
        let mut industry = Industry::default();
        let mut personality = Vec::new();

        for (key, value) in pairs {
            match key.as_str() {
                "company_description" => description = value.clone(),
                "target_demographic" => demographic = value.clone(),
                "industry" if !value.trim().is_empty() => industry = value.parse()?,
                "brand_personality" if !value.trim().is_empty() => {
                    personality.push(value.parse()?)
                }
                _ => {}
            }
        }

        Ok(Self::new(description, demographic, industry, personality))
    }

    /// Pre-flight check run before any upstream call.
    pub fn validate(&self) -> Result<()> {
        if self.company_description.trim().is_empty() || self.target_demographic.trim().is_empty()
        {
            return Err(BrandzError::validation(MISSING_REQUIRED_FIELDS));
        }
        Ok(())
    }

    /// Personalities joined the way the prompt expects them.
    pub fn personality_list(&self) -> String {
        self.brand_personality
            .iter()
            .map(Personality::label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    pub fn to_prompt(&self) -> String {
        crate::prompts::build_prompt(
            &self.company_description,
            &self.target_demographic,
            self.industry.label(),
            &self.personality_list(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
        items
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_default_brief_matches_form_defaults() {
        let brief = BrandBrief::default();
        assert_eq!(brief.industry, Industry::Technology);
        assert_eq!(brief.personality_list(), "Professional, Trustworthy");
    }

    #[test]
    fn test_industry_labels_round_trip() {
        for industry in Industry::ALL {
            assert_eq!(industry.label().parse::<Industry>().unwrap(), industry);
        }
        assert_eq!(
            "food & beverage".parse::<Industry>().unwrap(),
            Industry::FoodAndBeverage
        );
        assert!("Mining".parse::<Industry>().is_err());
    }

    #[test]
    fn test_from_form_pairs_with_repeated_personality() {
        let brief = BrandBrief::from_form_pairs(&pairs(&[
            ("company_description", "Eco-friendly coffee roaster"),
            ("target_demographic", "Urban millennials"),
            ("industry", "Food & Beverage"),
            ("brand_personality", "Playful"),
            ("brand_personality", "Caring"),
            ("brand_personality", "Playful"),
        ]))
        .unwrap();
        assert_eq!(brief.industry, Industry::FoodAndBeverage);
        assert_eq!(
            brief.brand_personality,
            vec![Personality::Playful, Personality::Caring]
        );
        assert_eq!(brief.personality_list(), "Playful, Caring");
    }

    #[test]
    fn test_from_form_pairs_defaults_industry() {
        let brief = BrandBrief::from_form_pairs(&pairs(&[("company_description", "x")])).unwrap();
        assert_eq!(brief.industry, Industry::Technology);
        assert!(brief.brand_personality.is_empty());
    }

    #[test]
    fn test_unknown_choice_is_a_validation_error() {
        let err = BrandBrief::from_form_pairs(&pairs(&[("brand_personality", "Grumpy")]))
            .unwrap_err();
        assert!(matches!(err, BrandzError::Validation { .. }));
    }

    #[test]
    fn test_validate_requires_description_and_demographic() {
        let mut brief = BrandBrief::new("A bakery", "  ", Industry::Retail, vec![]);
        let err = brief.validate().unwrap_err();
        assert_eq!(err.to_string(), MISSING_REQUIRED_FIELDS);

        brief.target_demographic = "Families".to_string();
        assert!(brief.validate().is_ok());

        brief.company_description.clear();
        assert!(brief.validate().is_err());
    }

    #[test]
    fn test_to_prompt_uses_joined_personality() {
        let brief = BrandBrief::new(
            "A bakery",
            "Families",
            Industry::Retail,
            vec![Personality::Bold, Personality::Friendly],
        );
        let prompt = brief.to_prompt();
        assert!(prompt.contains("Brand Personality: Friendly, Bold"));
        assert!(prompt.contains("Industry: Retail"));
    }
}
