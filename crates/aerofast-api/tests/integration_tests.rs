//! Integration tests for the Aerofast API.
//!
//! Every route family is exercised through an in-process router with
//! `tower::ServiceExt::oneshot`. Each test builds its own state.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use aerofast_api::create_router;
use aerofast_api::handlers::HealthResponse;
use aerofast_api::state::AppState;
use aerofast_core::config::AerofastConfig;
use aerofast_core::pacing::{ImmediatePacer, Pacer, TokioPacer};

// =============================================================================
// Helpers
// =============================================================================

fn make_app_with(config: AerofastConfig, pacer: Arc<dyn Pacer>) -> axum::Router {
    create_router(AppState::with_pacer(config, pacer))
}

/// Router whose concierge replies and contact timeline never wait.
fn make_app() -> axum::Router {
    make_app_with(AerofastConfig::default(), Arc::new(ImmediatePacer))
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn post_empty(uri: &str) -> Request<Body> {
    Request::post(uri).body(Body::empty()).unwrap()
}

fn post_json(uri: &str, json: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

fn put_json(uri: &str, json: Value) -> Request<Body> {
    Request::put(uri)
        .header("content-type", "application/json")
        .body(Body::from(json.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::delete(uri).body(Body::empty()).unwrap()
}

async fn body_json(resp: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Send `req` and return status plus JSON body (Null for empty bodies).
async fn send(app: &axum::Router, req: Request<Body>) -> (StatusCode, Value) {
    let resp = app.clone().oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, json)
}

async fn open_visit(app: &axum::Router) -> String {
    let (status, json) = send(app, post_empty("/visits")).await;
    assert_eq!(status, StatusCode::CREATED);
    json["visit_id"].as_str().unwrap().to_string()
}

/// Let reply workers and contact timelines run.
async fn settle() {
    for _ in 0..32 {
        tokio::task::yield_now().await;
    }
}

fn inquiry() -> Value {
    serde_json::json!({
        "name": "Dana Reyes",
        "company": "Skyline MRO",
        "email": "dana@skyline-mro.com",
        "message": "Need 500x NAS1149F0363P with certs."
    })
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let app = make_app();
    let resp = app.clone().oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let health: HealthResponse = serde_json::from_value(body_json(resp).await).unwrap();
    assert_eq!(health.status, "healthy");
    assert_eq!(health.open_visits, 0);
    assert_eq!(health.catalog_size, 9);
}

// =============================================================================
// Stateless catalog
// =============================================================================

#[tokio::test]
async fn test_catalog_default_lists_everything_by_id() {
    let app = make_app();
    let (status, json) = send(&app, get("/catalog")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 9);
    assert_eq!(json["query"], "");
    assert_eq!(json["sort"]["field"], "id");
    assert_eq!(json["items"][0]["id"], "bolts");
}

#[tokio::test]
async fn test_catalog_search() {
    let app = make_app();
    let (_, json) = send(&app, get("/catalog?q=bolt")).await;
    assert_eq!(json["count"], 1);
    assert_eq!(json["items"][0]["name"], "Bolts");

    let (status, json) = send(&app, get("/catalog?q=xyz123")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);
    assert_eq!(json["items"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_catalog_sort_params() {
    let app = make_app();
    let (status, json) = send(&app, get("/catalog?sort=name&dir=desc")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["items"][0]["name"], "Washers");
    assert_eq!(json["sort"]["direction"], "desc");
}

#[tokio::test]
async fn test_catalog_rejects_unknown_sort() {
    let app = make_app();
    let (status, json) = send(&app, get("/catalog?sort=price")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "bad_request");
    assert!(json["message"].as_str().unwrap().contains("price"));

    let (status, _) = send(&app, get("/catalog?dir=sideways")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_catalog_detail() {
    let app = make_app();
    let (status, json) = send(&app, get("/catalog/pins")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "Pins");
    assert_eq!(json["stock_level"], "medium");
    assert_eq!(json["standards"], serde_json::json!(["MS", "NAS", "AN"]));
    assert!(json["specs"].get("manufacturers").is_none());

    let (status, json) = send(&app, get("/catalog/gears")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");
}

// =============================================================================
// Stateless concierge
// =============================================================================

#[tokio::test]
async fn test_quick_actions() {
    let app = make_app();
    let (status, json) = send(&app, get("/concierge/quick-actions")).await;
    assert_eq!(status, StatusCode::OK);
    let actions = json["actions"].as_array().unwrap();
    assert_eq!(actions.len(), 4);
    assert_eq!(actions[3]["label"], "Track Order");
}

#[tokio::test]
async fn test_respond() {
    let app = make_app();
    let (status, json) = send(
        &app,
        post_json("/concierge/respond", serde_json::json!({"text": "Where are you located?"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["intent"], "location");
    assert!(json["reply"]["text"].as_str().unwrap().contains("Palestine, TX"));

    let (_, json) = send(
        &app,
        post_json("/concierge/respond", serde_json::json!({"text": "hello"})),
    )
    .await;
    assert!(json["intent"].is_null());
    assert!(json["reply"]["text"]
        .as_str()
        .unwrap()
        .starts_with("I've noted that inquiry."));
}

// =============================================================================
// Content
// =============================================================================

#[tokio::test]
async fn test_content_routes() {
    let app = make_app();

    let (status, json) = send(&app, get("/content/company")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["phone"], "903-723-0693");

    let (_, json) = send(&app, get("/content/navigation")).await;
    let anchors: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|item| item["anchor"].as_str())
        .collect();
    assert!(anchors.contains(&"#contact"));
    assert!(anchors.contains(&"#products"));

    for uri in ["/content/services", "/content/news"] {
        let (status, json) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert!(!json.as_array().unwrap().is_empty(), "{}", uri);
    }

    let (_, json) = send(&app, get("/content/manufacturers")).await;
    assert!(!json["manufacturers"].as_array().unwrap().is_empty());
}

// =============================================================================
// Visits and conversation
// =============================================================================

#[tokio::test]
async fn test_open_visit_greets() {
    let app = make_app();
    let (status, json) = send(&app, post_empty("/visits")).await;
    assert_eq!(status, StatusCode::CREATED);
    let messages = json["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0]["id"], 1);
    assert_eq!(messages[0]["sender"], "bot");
    assert_eq!(json["quick_actions"].as_array().unwrap().len(), 4);

    let (_, health) = send(&app, get("/health")).await;
    assert_eq!(health["open_visits"], 1);
}

#[tokio::test]
async fn test_conversation_round_trip() {
    let app = make_app();
    let visit = open_visit(&app).await;
    let uri = format!("/visits/{}/messages", visit);

    let (status, json) = send(
        &app,
        post_json(&uri, serde_json::json!({"text": "Can I get a price on AN960 washers?"})),
    )
    .await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(json["message"]["sender"], "user");
    assert_eq!(json["message"]["id"], 2);

    settle().await;

    let (status, json) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["typing"], false);
    let messages = json["messages"].as_array().unwrap();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2]["sender"], "bot");
    assert_eq!(messages[2]["action"]["label"], "Start RFQ");
    assert_eq!(messages[2]["action"]["target_anchor"], "#contact");
}

#[tokio::test]
async fn test_blank_and_over_long_messages_rejected() {
    let app = make_app();
    let visit = open_visit(&app).await;
    let uri = format!("/visits/{}/messages", visit);

    let (status, json) = send(&app, post_json(&uri, serde_json::json!({"text": "   "}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["message"], "message cannot be empty");

    let long = "x".repeat(2001);
    let (status, _) = send(&app, post_json(&uri, serde_json::json!({"text": long}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    settle().await;
    let (_, json) = send(&app, get(&uri)).await;
    assert_eq!(json["messages"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_quick_action_submission() {
    let app = make_app();
    let visit = open_visit(&app).await;

    let (status, json) = send(&app, post_empty(&format!("/visits/{}/quick-actions/1", visit))).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(json["message"]["text"], "How do I search your inventory?");

    settle().await;
    let (_, json) = send(&app, get(&format!("/visits/{}/messages", visit))).await;
    let last = json["messages"].as_array().unwrap().last().cloned().unwrap();
    assert_eq!(last["action"]["target_anchor"], "#products");

    let (status, _) = send(&app, post_empty(&format!("/visits/{}/quick-actions/9", visit))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_close_visit() {
    let app = make_app();
    let visit = open_visit(&app).await;

    let (status, _) = send(&app, delete(&format!("/visits/{}", visit))).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, json) = send(&app, get(&format!("/visits/{}/messages", visit))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "not_found");

    let (status, _) = send(&app, delete(&format!("/visits/{}", visit))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_visit() {
    let app = make_app();
    let id = uuid::Uuid::new_v4();
    for uri in [
        format!("/visits/{}/messages", id),
        format!("/visits/{}/catalog", id),
        format!("/visits/{}/contact", id),
        format!("/visits/{}/stream", id),
    ] {
        let (status, _) = send(&app, get(&uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
    }
}

#[tokio::test]
async fn test_visit_cap() {
    let mut config = AerofastConfig::default();
    config.server.max_visits = 1;
    let app = make_app_with(config, Arc::new(ImmediatePacer));

    open_visit(&app).await;
    let (status, json) = send(&app, post_empty("/visits")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["error"], "service_unavailable");
}

#[tokio::test(start_paused = true)]
async fn test_abandoned_visits_do_not_block_new_ones() {
    let mut config = AerofastConfig::default();
    config.server.max_visits = 3;
    let app = make_app_with(config, Arc::new(ImmediatePacer));

    let mut abandoned = Vec::new();
    for _ in 0..3 {
        abandoned.push(open_visit(&app).await);
    }
    let (status, _) = send(&app, post_empty("/visits")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

    // Pages closed without DELETE; a day passes.
    tokio::time::advance(std::time::Duration::from_secs(86_400)).await;

    let (status, _) = send(&app, post_empty("/visits")).await;
    assert_eq!(status, StatusCode::CREATED);
    let (_, health) = send(&app, get("/health")).await;
    assert_eq!(health["open_visits"], 1);

    let (status, _) = send(&app, get(&format!("/visits/{}/messages", abandoned[0]))).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test(start_paused = true)]
async fn test_active_visit_survives_idle_timeout() {
    let mut config = AerofastConfig::default();
    config.server.max_visits = 1;
    config.server.visit_idle_timeout_secs = 60;
    let app = make_app_with(config, Arc::new(ImmediatePacer));
    let visit = open_visit(&app).await;

    for _ in 0..5 {
        tokio::time::advance(std::time::Duration::from_secs(45)).await;
        let (status, _) = send(&app, get(&format!("/visits/{}/catalog", visit))).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (status, _) = send(&app, post_empty("/visits")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
}

// =============================================================================
// Visit catalog view
// =============================================================================

#[tokio::test]
async fn test_visit_catalog_view() {
    let app = make_app();
    let visit = open_visit(&app).await;
    let base = format!("/visits/{}/catalog", visit);

    let (status, json) = send(
        &app,
        put_json(&format!("{}/query", base), serde_json::json!({"query": "xyz123"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["count"], 0);

    // Same column twice flips to descending.
    let sort_uri = format!("{}/sort", base);
    send(&app, post_json(&sort_uri, serde_json::json!({"field": "name"}))).await;
    let (_, json) = send(&app, post_json(&sort_uri, serde_json::json!({"field": "name"}))).await;
    assert_eq!(json["sort"]["field"], "name");
    assert_eq!(json["sort"]["direction"], "desc");

    // Clearing keeps the sort.
    let (_, json) = send(&app, delete(&format!("{}/query", base))).await;
    assert_eq!(json["count"], 9);
    assert_eq!(json["items"][0]["name"], "Washers");

    let (_, json) = send(&app, post_empty(&format!("{}/reset", base))).await;
    assert_eq!(json["sort"]["field"], "id");
    assert_eq!(json["sort"]["direction"], "asc");

    let (status, _) = send(&app, post_json(&sort_uri, serde_json::json!({"field": "weight"}))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, json) = send(&app, get(&base)).await;
    assert_eq!(json["count"], 9);
}

// =============================================================================
// Contact desk
// =============================================================================

#[tokio::test]
async fn test_contact_submit_and_busy() {
    // Real delays: the desk stays in Submitting for the rest of the test.
    let app = make_app_with(AerofastConfig::default(), Arc::new(TokioPacer));
    let visit = open_visit(&app).await;
    let uri = format!("/visits/{}/contact", visit);

    let (status, json) = send(&app, get(&uri)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["state"], "idle");
    assert_eq!(json["can_submit"], true);

    let (status, json) = send(&app, post_json(&uri, inquiry())).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(json["state"], "submitting");
    assert_eq!(json["transmitted"], false);
    assert!(json["reference"].is_string());

    let (status, json) = send(&app, post_json(&uri, inquiry())).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"], "conflict");

    let (_, json) = send(&app, get(&uri)).await;
    assert_eq!(json["can_submit"], false);
}

#[tokio::test]
async fn test_contact_invalid_inquiry() {
    let app = make_app();
    let visit = open_visit(&app).await;
    let uri = format!("/visits/{}/contact", visit);

    let mut bad = inquiry();
    bad["email"] = Value::from("not-an-email");
    let (status, json) = send(&app, post_json(&uri, bad)).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["error"], "unprocessable_entity");

    let (_, json) = send(&app, get(&uri)).await;
    assert_eq!(json["state"], "idle");
}

#[tokio::test]
async fn test_contact_cycle_completes_with_immediate_pacer() {
    let app = make_app();
    let visit = open_visit(&app).await;
    let uri = format!("/visits/{}/contact", visit);

    let (status, _) = send(&app, post_json(&uri, inquiry())).await;
    assert_eq!(status, StatusCode::ACCEPTED);

    settle().await;
    let (_, json) = send(&app, get(&uri)).await;
    assert_eq!(json["state"], "idle");
    assert_eq!(json["can_submit"], true);
}

// =============================================================================
// Event stream
// =============================================================================

#[tokio::test]
async fn test_stream_is_event_stream() {
    let app = make_app();
    let visit = open_visit(&app).await;
    let resp = app
        .clone()
        .oneshot(get(&format!("/visits/{}/stream", visit)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(content_type.starts_with("text/event-stream"));
}

// =============================================================================
// Rate limiting
// =============================================================================

#[tokio::test]
async fn test_rate_limit_applies_to_interactive_routes() {
    let mut config = AerofastConfig::default();
    config.server.rate_limit_per_sec = 2;
    let app = make_app_with(config, Arc::new(ImmediatePacer));

    let mut statuses = Vec::new();
    for _ in 0..6 {
        let (status, _) = send(
            &app,
            post_json("/concierge/respond", serde_json::json!({"text": "hi"})),
        )
        .await;
        statuses.push(status);
    }
    assert!(statuses.contains(&StatusCode::TOO_MANY_REQUESTS));

    // Public read-only routes are not limited.
    for _ in 0..6 {
        let (status, _) = send(&app, get("/catalog")).await;
        assert_eq!(status, StatusCode::OK);
    }
}
