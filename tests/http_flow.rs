use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use brandz::clients::{ContentGenerator, ModelError, SharedGenerator};
use brandz::config::Config;
use brandz::http::{AppState, router};
use brandz::presentation::SUCCESS_BANNER;
use tower::ServiceExt;

struct FakeModel {
    reply: &'static str,
    calls: AtomicUsize,
}

#[async_trait]
impl ContentGenerator for FakeModel {
    async fn generate(&self, _prompt: &str) -> Result<String, ModelError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.reply.to_string())
    }

    fn model_name(&self) -> &str {
        "fake"
    }
}

fn app_with(reply: &'static str) -> (axum::Router, Arc<FakeModel>) {
    let model = Arc::new(FakeModel {
        reply,
        calls: AtomicUsize::new(0),
    });
    let config = Arc::new(Config::default().with_api_key("test-key"));
    let shared = SharedGenerator::preloaded(config.clone(), model.clone());
    let state = AppState::with_generator(config, shared).unwrap();
    (router(state), model)
}

fn form_post(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

fn encode(pairs: &[(&str, &str)]) -> String {
    serde_urlencoded::to_string(pairs).unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

const DOCUMENT: &str = r#"{"taglines": ["Paddle further"]} LOGO_IMAGE: data:image/png;base64,QUJD"#;

#[tokio::test]
async fn health_is_ok() {
    let (app, _) = app_with("{}");
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_text(response).await, "ok");
}

#[tokio::test]
async fn index_shows_form() {
    let (app, _) = app_with("{}");
    let response = app
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains("action=\"/generate\""));
}

#[tokio::test]
async fn index_without_key_shows_setup() {
    let state = AppState::new(Config::default()).unwrap();
    let response = router(state)
        .oneshot(Request::get("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let html = body_text(response).await;
    assert!(html.contains("GEMINI_API_KEY"));
    assert!(!html.contains("<form"));
}

#[tokio::test]
async fn blank_demographic_is_rejected_without_calling_model() {
    let (app, model) = app_with(DOCUMENT);
    let body = encode(&[
        ("company_description", "Kayak rentals"),
        ("target_demographic", "  "),
        ("industry", "Travel"),
    ]);
    let response = app.oneshot(form_post("/generate", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let html = body_text(response).await;
    assert!(html.contains("Please fill in all required fields."));
    assert!(html.contains(">Kayak rentals</textarea>"));
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn successful_generation_renders_result() {
    let (app, model) = app_with(DOCUMENT);
    let body = encode(&[
        ("company_description", "Kayak rentals"),
        ("target_demographic", "Weekend adventurers"),
        ("industry", "Food & Beverage"),
        ("brand_personality", "Playful"),
        ("brand_personality", "Bold"),
    ]);
    let response = app.oneshot(form_post("/generate", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let html = body_text(response).await;
    assert!(html.contains(SUCCESS_BANNER));
    assert!(html.contains("Paddle further"));
    assert!(html.contains(r#"<option value="Playful" selected>"#));
    assert!(html.contains(r#"<option value="Bold" selected>"#));
    assert!(html.contains("Download Logo Image"));
    assert_eq!(model.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn unparseable_reply_is_bad_gateway() {
    let (app, _) = app_with("Sorry, I cannot do that.");
    let body = encode(&[
        ("company_description", "Kayak rentals"),
        ("target_demographic", "Weekend adventurers"),
    ]);
    let response = app.oneshot(form_post("/generate", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let html = body_text(response).await;
    assert!(html.contains("Could not parse brand identity response"));
}

#[tokio::test]
async fn unknown_industry_is_rejected() {
    let (app, model) = app_with(DOCUMENT);
    let body = encode(&[
        ("company_description", "Kayak rentals"),
        ("target_demographic", "Weekend adventurers"),
        ("industry", "Mining"),
    ]);
    let response = app.oneshot(form_post("/generate", body)).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(model.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn identity_export_is_an_attachment() {
    let (app, _) = app_with("{}");
    let document = r#"{"taglines":["Go"],"extra_key":1}"#;
    let response = app
        .oneshot(form_post(
            "/export/identity",
            encode(&[("document", document)]),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"brand_identity.json\""
    );
    assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
    let body = body_text(response).await;
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value, serde_json::json!({"taglines": ["Go"], "extra_key": 1}));
    assert!(body.contains("\n  \"taglines\""));
}

#[tokio::test]
async fn logo_export_needs_a_logo() {
    let (app, _) = app_with("{}");
    let response = app
        .clone()
        .oneshot(form_post(
            "/export/logo",
            encode(&[("document", r#"{"taglines":["Go"]}"#)]),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let document = r#"{"generated_logo_image":"data:image/png;base64,QUJD"}"#;
    let response = app
        .oneshot(form_post("/export/logo", encode(&[("document", document)])))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_DISPOSITION],
        "attachment; filename=\"brand_logo.txt\""
    );
    assert_eq!(body_text(response).await, "data:image/png;base64,QUJD");
}

#[tokio::test]
async fn invalid_document_is_bad_request() {
    let (app, _) = app_with("{}");
    let response = app
        .oneshot(form_post("/export/identity", encode(&[("document", "not json")])))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
