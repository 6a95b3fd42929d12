//! One form submission, from brief to brand identity.

use tracing::{info, warn};

use crate::brand::BrandIdentity;
use crate::brief::BrandBrief;
use crate::clients::{ContentGenerator, SharedGenerator};
use crate::error::{BrandzError, Result};
use crate::interpreter::{SpanStrategy, interpret_with};

/// Where a submission stands.
///
/// `Idle → Submitted → {Rendering, Failed}`; both end states go back to `Idle`
/// once the page has been shown.
#[derive(Debug)]
pub enum SubmissionState {
    Idle,
    Submitted,
    Rendering(Box<BrandIdentity>),
    Failed(BrandzError),
}

impl SubmissionState {
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitted => "submitted",
            SubmissionState::Rendering(_) => "rendering",
            SubmissionState::Failed(_) => "failed",
        }
    }
}

/// Build the prompt, call the model once and interpret its answer.
pub async fn generate_brand_identity(
    generator: &dyn ContentGenerator,
    brief: &BrandBrief,
    strategy: SpanStrategy,
) -> Result<BrandIdentity> {
    let prompt = brief.to_prompt();
    let raw = generator.generate(&prompt).await?;
    let identity = interpret_with(strategy, &raw)?;
    if let Some(failure) = identity.failure() {
        return Err(BrandzError::ModelReported {
            message: failure.to_string(),
        });
    }
    Ok(identity)
}

/// Run a submitted brief to its end state. Validation happens before the
/// model client is touched, so an incomplete brief never reaches the API.
pub async fn submit(
    shared: &SharedGenerator,
    brief: &BrandBrief,
    strategy: SpanStrategy,
) -> SubmissionState {
    let state = SubmissionState::Submitted;
    info!(
        "Submission {} (industry={}, personality=[{}])",
        state.label(),
        brief.industry,
        brief.personality_list()
    );

    let result = async {
        brief.validate()?;
        let generator = shared.get()?;
        generate_brand_identity(generator.as_ref(), brief, strategy).await
    }
    .await;

    let next = match result {
        Ok(identity) => SubmissionState::Rendering(Box::new(identity)),
        Err(err) => SubmissionState::Failed(err),
    };
    match &next {
        SubmissionState::Failed(err) => warn!("Submission {}: {}", next.label(), err),
        _ => info!("Submission {}", next.label()),
    }
    next
}
