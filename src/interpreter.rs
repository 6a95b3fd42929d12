//! Turns the model's free text into a [`BrandIdentity`].
//!
//! The JSON object is located with a [`SpanStrategy`] and decoded; the logo
//! data URI is searched for separately across the whole text, because the
//! model is told to put it after the JSON.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use crate::brand::BrandIdentity;
use crate::error::{BrandzError, Result};

static GREEDY_SPAN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\{.*\}").unwrap());
static SVG_URI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"data:image/svg\+xml;base64,[A-Za-z0-9+/=\n]+").unwrap());
static PNG_URI_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"data:image/png;base64,[A-Za-z0-9+/=\n]+").unwrap());

/// How the JSON object is located inside the model's prose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanStrategy {
    /// First `{` to last `}` in the whole text, across newlines. Extra
    /// brace blocks in surrounding prose end up inside the span.
    #[default]
    GreedyBraces,
    /// First depth-balanced `{...}` block; braces inside JSON strings are
    /// ignored.
    BalancedBraces,
}

impl SpanStrategy {
    pub fn find_span<'a>(&self, text: &'a str) -> Option<&'a str> {
        match self {
            SpanStrategy::GreedyBraces => GREEDY_SPAN_RE.find(text).map(|m| m.as_str()),
            SpanStrategy::BalancedBraces => first_balanced_object(text),
        }
    }
}

/// Interpret model output with the default strategy.
pub fn interpret(raw_text: &str) -> Result<BrandIdentity> {
    interpret_with(SpanStrategy::default(), raw_text)
}

pub fn interpret_with(strategy: SpanStrategy, raw_text: &str) -> Result<BrandIdentity> {
    let span = strategy
        .find_span(raw_text)
        .ok_or(BrandzError::Interpretation)?;

    let value: Value = serde_json::from_str(span).map_err(|e| BrandzError::MalformedJson {
        message: e.to_string(),
    })?;
    let mut identity = BrandIdentity::from_value(value)?;

    if let Some(logo) = extract_logo_image(raw_text) {
        identity.set_logo_image(logo);
    }

    tracing::debug!(
        "Interpreted {} chars of model output (span={} chars, logo={})",
        raw_text.len(),
        span.len(),
        identity.has_logo_image()
    );
    Ok(identity)
}

/// First SVG data URI in `text`, or else the first PNG one.
pub fn extract_logo_image(text: &str) -> Option<String> {
    SVG_URI_RE
        .find(text)
        .or_else(|| PNG_URI_RE.find(text))
        .map(|m| m.as_str().to_string())
}

fn first_balanced_object(text: &str) -> Option<&str> {
    let mut depth: u32 = 0;
    let mut start: Option<usize> = None;
    let mut in_string = false;
    let mut escape = false;

    for (idx, ch) in text.char_indices() {
        if in_string {
            if escape {
                escape = false;
                continue;
            }
            match ch {
                '\\' => escape = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            // quotes only matter once inside an object; prose may hold stray ones
            '"' if depth > 0 => in_string = true,
            '{' => {
                if depth == 0 {
                    start = Some(idx);
                }
                depth += 1;
            }
            '}' => {
                if depth > 0 {
                    depth -= 1;
                    if depth == 0
                        && let Some(s) = start
                    {
                        return Some(&text[s..idx + 1]);
                    }
                }
            }
            _ => {}
        }
    }

    None
}
