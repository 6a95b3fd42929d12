//! HTTP surface for the brand studio.
//!
//! Axum router serving the form, one generation per `POST /generate`, and the
//! two downloads. Downloads are stateless: the result page posts the document
//! back in a hidden field.

use std::sync::Arc;

use axum::{
    Form, Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::brand::BrandIdentity;
use crate::brief::BrandBrief;
use crate::clients::SharedGenerator;
use crate::config::Config;
use crate::error::{BrandzError, Result};
use crate::generation::{SubmissionState, submit};
use crate::interpreter::SpanStrategy;
use crate::presentation::{Export, FormView, Renderer, export_identity_json, export_logo};

/// Shared state for HTTP server
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub generator: Arc<SharedGenerator>,
    pub renderer: Arc<Renderer>,
    pub strategy: SpanStrategy,
}

impl AppState {
    pub fn new(config: Config) -> Result<Self> {
        let config = Arc::new(config);
        let generator = SharedGenerator::new(config.clone());
        Self::with_generator(config, generator)
    }

    pub fn with_generator(config: Arc<Config>, generator: SharedGenerator) -> Result<Self> {
        Ok(Self {
            config,
            generator: Arc::new(generator),
            renderer: Arc::new(Renderer::new()?),
            strategy: SpanStrategy::default(),
        })
    }

    pub fn with_strategy(mut self, strategy: SpanStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

impl IntoResponse for BrandzError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        (status, self.to_string()).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct DocumentForm {
    pub document: String,
}

impl DocumentForm {
    fn identity(&self) -> Result<BrandIdentity> {
        let value = serde_json::from_str(&self.document)
            .map_err(|e| BrandzError::validation(format!("Invalid brand identity document: {e}")))?;
        BrandIdentity::from_value(value)
            .map_err(|e| BrandzError::validation(format!("Invalid brand identity document: {e}")))
    }
}

fn attachment(export: Export) -> Response {
    (
        [
            (header::CONTENT_TYPE, export.content_type.to_string()),
            (header::CONTENT_DISPOSITION, export.content_disposition()),
        ],
        export.body,
    )
        .into_response()
}

/// Health check endpoint
pub async fn health_handler() -> impl IntoResponse {
    "ok"
}

/// Form page, or setup instructions while the API key is missing
pub async fn index_handler(State(state): State<AppState>) -> Result<Response> {
    if let Err(err) = state.config.api_key() {
        tracing::warn!("{}", err);
        let html = state.renderer.render_setup(&err.to_string())?;
        return Ok((err.status_code(), Html(html)).into_response());
    }
    let html = state.renderer.render_page(&FormView::default(), None, None)?;
    Ok(Html(html).into_response())
}

/// Run one submission and render its end state
pub async fn generate_handler(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response> {
    let brief = match BrandBrief::from_form_pairs(&pairs) {
        Ok(brief) => brief,
        Err(err) => {
            let html = state
                .renderer
                .render_page(&FormView::default(), None, Some(&err.to_string()))?;
            return Ok((err.status_code(), Html(html)).into_response());
        }
    };

    let outcome = submit(&state.generator, &brief, state.strategy).await;
    let status = match &outcome {
        SubmissionState::Failed(err) => err.status_code(),
        _ => StatusCode::OK,
    };
    let html = state
        .renderer
        .render_submission(&brief, &outcome, &state.config.gemini.model)?;
    Ok((status, Html(html)).into_response())
}

/// `brand_identity.json` download
pub async fn export_identity_handler(Form(form): Form<DocumentForm>) -> Result<Response> {
    let identity = form.identity()?;
    Ok(attachment(export_identity_json(&identity)?))
}

/// `brand_logo.txt` download
pub async fn export_logo_handler(Form(form): Form<DocumentForm>) -> Result<Response> {
    let identity = form.identity()?;
    match export_logo(&identity) {
        Some(export) => Ok(attachment(export)),
        None => Ok((StatusCode::NOT_FOUND, "No logo image in this brand identity").into_response()),
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/generate", post(generate_handler))
        .route("/export/identity", post(export_identity_handler))
        .route("/export/logo", post(export_logo_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any))
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_http_server(state: AppState) -> Result<()> {
    let bind = state.config.server.http_bind;
    if state.config.api_key().is_err() {
        tracing::warn!("GEMINI_API_KEY is missing; the form will show setup instructions");
    }

    let app = router(state);

    let listener = tokio::net::TcpListener::bind(bind)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind HTTP listener: {}", e))?;

    tracing::info!("Starting HTTP server on http://{}", bind);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("HTTP server error: {}", e))?;

    Ok(())
}
