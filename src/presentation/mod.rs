//! HTML pages and downloads for the brand studio.

pub mod export;
pub mod view;

use serde::Serialize;
use tera::{Context, Tera};

use crate::brand::BrandIdentity;
use crate::brief::{BrandBrief, Industry, Personality};
use crate::error::Result;
use crate::generation::SubmissionState;

pub use export::{Export, IDENTITY_FILE_NAME, LOGO_FILE_NAME, export_identity_json, export_logo};
pub use view::{BrandView, NOT_AVAILABLE};

pub const APP_TITLE: &str = "BrandZ";
pub const SUCCESS_BANNER: &str = "Brand identity generated successfully using Gemini 2.0 Flash!";

const BASE_TEMPLATE: &str = include_str!("../../templates/base.html");
const INDEX_TEMPLATE: &str = include_str!("../../templates/index.html");
const SETUP_TEMPLATE: &str = include_str!("../../templates/setup.html");

#[derive(Debug, Clone, Serialize)]
pub struct ChoiceView {
    pub label: &'static str,
    pub selected: bool,
}

/// Form contents, pre-filled from the last brief.
#[derive(Debug, Clone, Serialize)]
pub struct FormView {
    pub description: String,
    pub demographic: String,
    pub industries: Vec<ChoiceView>,
    pub personalities: Vec<ChoiceView>,
}

impl FormView {
    pub fn from_brief(brief: &BrandBrief) -> Self {
        Self {
            description: brief.company_description.clone(),
            demographic: brief.target_demographic.clone(),
            industries: Industry::ALL
                .iter()
                .map(|i| ChoiceView {
                    label: i.label(),
                    selected: *i == brief.industry,
                })
                .collect(),
            personalities: Personality::ALL
                .iter()
                .map(|p| ChoiceView {
                    label: p.label(),
                    selected: brief.brand_personality.contains(p),
                })
                .collect(),
        }
    }
}

impl Default for FormView {
    fn default() -> Self {
        Self::from_brief(&BrandBrief::default())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResultView {
    pub banner: &'static str,
    pub model: String,
    pub brand: BrandView,
    /// Offer the logo download; independent of whether the logo can be displayed
    pub has_logo: bool,
    /// Compact JSON carried by the download forms
    pub document_json: String,
}

impl ResultView {
    pub fn new(identity: &BrandIdentity, model: impl Into<String>) -> Result<Self> {
        Ok(Self {
            banner: SUCCESS_BANNER,
            model: model.into(),
            brand: BrandView::from_identity(identity),
            has_logo: identity.has_logo_image(),
            document_json: serde_json::to_string(identity)?,
        })
    }
}

/// Tera engine holding the embedded page templates.
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            ("base.html", BASE_TEMPLATE),
            ("index.html", INDEX_TEMPLATE),
            ("setup.html", SETUP_TEMPLATE),
        ])?;
        Ok(Self { tera })
    }

    fn base_context() -> Context {
        let mut ctx = Context::new();
        ctx.insert("app_title", APP_TITLE);
        ctx
    }

    /// The form page, optionally followed by an error or a result.
    pub fn render_page(
        &self,
        form: &FormView,
        result: Option<&ResultView>,
        error: Option<&str>,
    ) -> Result<String> {
        let mut ctx = Self::base_context();
        ctx.insert("form", form);
        if let Some(result) = result {
            ctx.insert("result", result);
        }
        if let Some(error) = error {
            ctx.insert("error", error);
        }
        Ok(self.tera.render("index.html", &ctx)?)
    }

    /// Instructions shown instead of the form while the API key is missing.
    pub fn render_setup(&self, message: &str) -> Result<String> {
        let mut ctx = Self::base_context();
        ctx.insert("message", message);
        Ok(self.tera.render("setup.html", &ctx)?)
    }

    /// Page for a submission in any state.
    pub fn render_submission(
        &self,
        brief: &BrandBrief,
        state: &SubmissionState,
        model: &str,
    ) -> Result<String> {
        let form = FormView::from_brief(brief);
        match state {
            SubmissionState::Rendering(identity) => {
                let result = ResultView::new(identity, model)?;
                self.render_page(&form, Some(&result), None)
            }
            SubmissionState::Failed(err) => {
                self.render_page(&form, None, Some(&err.to_string()))
            }
            SubmissionState::Idle | SubmissionState::Submitted => {
                self.render_page(&form, None, None)
            }
        }
    }
}
