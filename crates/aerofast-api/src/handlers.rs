//! Route handler functions for all API endpoints.
//!
//! Each handler extracts query/path parameters via axum extractors,
//! interacts with AppState services, and returns JSON responses.

use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::sse::{Event, KeepAlive, Sse};
use axum::Json;
use serde::{Deserialize, Serialize};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;
use uuid::Uuid;

use aerofast_catalog::{CatalogSnapshot, CatalogView, SortState};
use aerofast_concierge::{QuickAction, Resolution};
use aerofast_contact::{InquiryForm, InquiryReceipt};
use aerofast_core::content::{CompanyProfile, NavItem, NewsArticle, ServiceOffering};
use aerofast_core::error::AerofastError;
use aerofast_core::types::{ChatMessage, InquiryState, ProductCategory, SortDirection, SortField};

use crate::error::ApiError;
use crate::state::AppState;
use crate::visits::{Visit, VisitRegistry};

// =============================================================================
// Request types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct CatalogParams {
    pub q: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UtteranceRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct CatalogQueryRequest {
    pub query: String,
}

#[derive(Debug, Deserialize)]
pub struct SortRequest {
    pub field: String,
}

// =============================================================================
// Response types
// =============================================================================

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
    pub open_visits: u64,
    pub catalog_size: u64,
}

#[derive(Debug, Serialize)]
pub struct CategoryDetail {
    #[serde(flatten)]
    pub category: ProductCategory,
    /// The `standard` label split into individual badges.
    pub standards: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct QuickActionsResponse {
    pub actions: &'static [QuickAction],
}

#[derive(Debug, Serialize)]
pub struct ManufacturersResponse {
    pub manufacturers: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct VisitResponse {
    pub visit_id: Uuid,
    pub session_id: Uuid,
    pub desk_id: Uuid,
    pub messages: Vec<ChatMessage>,
    pub quick_actions: &'static [QuickAction],
}

#[derive(Debug, Serialize)]
pub struct MessagesResponse {
    pub messages: Vec<ChatMessage>,
    pub typing: bool,
}

#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    /// The visitor's own message, already appended.
    pub message: ChatMessage,
    /// True until the reply lands.
    pub typing: bool,
}

#[derive(Debug, Serialize)]
pub struct ContactStatusResponse {
    pub desk_id: Uuid,
    pub state: InquiryState,
    pub can_submit: bool,
}

// =============================================================================
// Helpers
// =============================================================================

fn find_visit(visits: &VisitRegistry, id: Uuid) -> Result<Arc<Visit>, ApiError> {
    visits
        .get(id)
        .ok_or_else(|| ApiError::NotFound(format!("Visit {} not found", id)))
}

fn parse_sort(params: &CatalogParams, default: SortState) -> Result<SortState, AerofastError> {
    let field = match params.sort.as_deref() {
        Some(s) => s.parse::<SortField>()?,
        None => default.field,
    };
    let direction = match params.dir.as_deref() {
        Some(s) => s.parse::<SortDirection>()?,
        None => default.direction,
    };
    Ok(SortState::new(field, direction))
}

fn default_sort(state: &AppState) -> SortState {
    SortState::new(
        state.config.catalog.default_sort_field,
        state.config.catalog.default_sort_direction,
    )
}

fn visit_snapshot(state: &AppState, visit: &Visit) -> CatalogSnapshot {
    visit.with_catalog(|view| view.snapshot(&state.engine))
}

// =============================================================================
// Site-wide handlers
// =============================================================================

/// GET /health - health check.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
        open_visits: state.visits.len() as u64,
        catalog_size: state.engine.catalog().len() as u64,
    })
}

/// GET /catalog - stateless filter and sort.
pub async fn catalog(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> Result<Json<CatalogSnapshot>, ApiError> {
    let sort = parse_sort(&params, default_sort(&state))?;
    let mut view = CatalogView::new(sort);
    if let Some(q) = params.q {
        view.set_query(q);
    }
    Ok(Json(view.snapshot(&state.engine)))
}

/// GET /catalog/{id} - category detail.
pub async fn catalog_item(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CategoryDetail>, ApiError> {
    let category = state.engine.require(&id)?;
    Ok(Json(CategoryDetail {
        standards: category.standards().into_iter().map(String::from).collect(),
        category: category.clone(),
    }))
}

/// GET /concierge/quick-actions
pub async fn quick_actions(State(state): State<AppState>) -> Json<QuickActionsResponse> {
    Json(QuickActionsResponse {
        actions: state.responder.quick_actions(),
    })
}

/// POST /concierge/respond - one-off reply, no conversation.
pub async fn respond(
    State(state): State<AppState>,
    Json(req): Json<UtteranceRequest>,
) -> Result<Json<Resolution>, ApiError> {
    let max = state.config.concierge.max_message_length;
    if req.text.chars().count() > max {
        return Err(ApiError::BadRequest(format!(
            "message exceeds maximum length of {} characters",
            max
        )));
    }
    Ok(Json(state.responder.resolve(&req.text)))
}

/// GET /content/company
pub async fn company(State(state): State<AppState>) -> Json<CompanyProfile> {
    Json(state.content.company.clone())
}

/// GET /content/navigation
pub async fn navigation(State(state): State<AppState>) -> Json<Vec<NavItem>> {
    Json(state.content.navigation.clone())
}

/// GET /content/services
pub async fn services(State(state): State<AppState>) -> Json<Vec<ServiceOffering>> {
    Json(state.content.services.clone())
}

/// GET /content/news
pub async fn news(State(state): State<AppState>) -> Json<Vec<NewsArticle>> {
    Json(state.content.news.clone())
}

/// GET /content/manufacturers
pub async fn manufacturers(State(state): State<AppState>) -> Json<ManufacturersResponse> {
    Json(ManufacturersResponse {
        manufacturers: state.content.manufacturers.clone(),
    })
}

// =============================================================================
// Visit lifecycle
// =============================================================================

/// POST /visits - mount a page.
pub async fn open_visit(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<VisitResponse>), ApiError> {
    let visit = Visit::open(
        Arc::clone(&state.responder),
        Arc::clone(&state.pacer),
        &state.config,
    );
    let visit = state.visits.insert(visit).map_err(|_| {
        ApiError::ServiceUnavailable(format!(
            "Visit limit of {} reached",
            state.config.server.max_visits
        ))
    })?;

    Ok((
        StatusCode::CREATED,
        Json(VisitResponse {
            visit_id: visit.id,
            session_id: visit.chat.id(),
            desk_id: visit.contact.id(),
            messages: visit.chat.history(),
            quick_actions: state.responder.quick_actions(),
        }),
    ))
}

/// DELETE /visits/{id} - unmount; pending replies and timers are cancelled.
pub async fn close_visit(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    if state.visits.close(id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound(format!("Visit {} not found", id)))
    }
}

// =============================================================================
// Concierge conversation
// =============================================================================

/// GET /visits/{id}/messages
pub async fn messages(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessagesResponse>, ApiError> {
    let visit = find_visit(&state.visits, id)?;
    Ok(Json(MessagesResponse {
        messages: visit.chat.history(),
        typing: visit.chat.is_typing(),
    }))
}

/// POST /visits/{id}/messages - submit an utterance; the reply follows
/// after the typing delay.
pub async fn post_message(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UtteranceRequest>,
) -> Result<(StatusCode, Json<SubmitResponse>), ApiError> {
    let visit = find_visit(&state.visits, id)?;
    let message = visit.chat.submit(&req.text)?;
    Ok((
        StatusCode::ACCEPTED,
        Json(SubmitResponse {
            message,
            typing: visit.chat.is_typing(),
        }),
    ))
}

/// POST /visits/{id}/quick-actions/{index}
pub async fn post_quick_action(
    State(state): State<AppState>,
    Path((id, index)): Path<(Uuid, usize)>,
) -> Result<(StatusCode, Json<SubmitResponse>), ApiError> {
    let visit = find_visit(&state.visits, id)?;
    let message = visit.chat.submit_quick_action(index)?;
    Ok((
        StatusCode::ACCEPTED,
        Json(SubmitResponse {
            message,
            typing: visit.chat.is_typing(),
        }),
    ))
}

// =============================================================================
// Catalog view
// =============================================================================

/// GET /visits/{id}/catalog
pub async fn visit_catalog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CatalogSnapshot>, ApiError> {
    let visit = find_visit(&state.visits, id)?;
    Ok(Json(visit_snapshot(&state, &visit)))
}

/// PUT /visits/{id}/catalog/query
pub async fn set_catalog_query(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<CatalogQueryRequest>,
) -> Result<Json<CatalogSnapshot>, ApiError> {
    let visit = find_visit(&state.visits, id)?;
    visit.with_catalog(|view| view.set_query(req.query));
    Ok(Json(visit_snapshot(&state, &visit)))
}

/// DELETE /visits/{id}/catalog/query - clear the search, keep the sort.
pub async fn clear_catalog_query(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CatalogSnapshot>, ApiError> {
    let visit = find_visit(&state.visits, id)?;
    visit.with_catalog(|view| view.clear_query());
    Ok(Json(visit_snapshot(&state, &visit)))
}

/// POST /visits/{id}/catalog/sort - click a column header.
pub async fn toggle_catalog_sort(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<SortRequest>,
) -> Result<Json<CatalogSnapshot>, ApiError> {
    let visit = find_visit(&state.visits, id)?;
    let field = req.field.parse::<SortField>()?;
    visit.with_catalog(|view| view.toggle_sort(field));
    Ok(Json(visit_snapshot(&state, &visit)))
}

/// POST /visits/{id}/catalog/reset - clear the search and restore the
/// default sort.
pub async fn reset_catalog(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CatalogSnapshot>, ApiError> {
    let visit = find_visit(&state.visits, id)?;
    visit.with_catalog(|view| view.reset());
    Ok(Json(visit_snapshot(&state, &visit)))
}

// =============================================================================
// Contact desk
// =============================================================================

/// GET /visits/{id}/contact
pub async fn contact_status(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ContactStatusResponse>, ApiError> {
    let visit = find_visit(&state.visits, id)?;
    Ok(Json(ContactStatusResponse {
        desk_id: visit.contact.id(),
        state: visit.contact.state(),
        can_submit: visit.contact.can_submit(),
    }))
}

/// POST /visits/{id}/contact - submit an RFQ inquiry.
pub async fn submit_inquiry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(form): Json<InquiryForm>,
) -> Result<(StatusCode, Json<InquiryReceipt>), ApiError> {
    let visit = find_visit(&state.visits, id)?;
    let receipt = visit.contact.submit(form)?;
    Ok((StatusCode::ACCEPTED, Json(receipt)))
}

// =============================================================================
// Event stream
// =============================================================================

/// GET /visits/{id}/stream - SSE of the visit's site events.
pub async fn stream(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>> + Send>, ApiError> {
    let visit = find_visit(&state.visits, id)?;
    let rx = visit.subscribe();
    let stream = BroadcastStream::new(rx).filter_map(|result| match result {
        Ok(event) => {
            let data = serde_json::to_string(&event).unwrap_or_default();
            Some(Ok(Event::default().event(event.event_name()).data(data)))
        }
        Err(_) => None,
    });

    Ok(Sse::new(stream).keep_alive(KeepAlive::new().interval(Duration::from_secs(15))))
}
