//! Application state shared across all route handlers.
//!
//! AppState holds the immutable site data and engines plus the registry of
//! open visits. It is passed to handlers via axum's State extractor.

use std::sync::Arc;
use std::time::Instant;

use aerofast_catalog::CatalogQueryEngine;
use aerofast_concierge::ConciergeResponder;
use aerofast_core::config::AerofastConfig;
use aerofast_core::content::SiteContent;
use aerofast_core::pacing::{Pacer, TokioPacer};

use crate::visits::VisitRegistry;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AerofastConfig>,
    pub engine: Arc<CatalogQueryEngine>,
    pub responder: Arc<ConciergeResponder>,
    pub content: Arc<SiteContent>,
    pub visits: Arc<VisitRegistry>,
    /// Delay source for concierge replies and the contact timeline.
    pub pacer: Arc<dyn Pacer>,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// State serving the published catalog, rules and content with real
    /// delays.
    pub fn new(config: AerofastConfig) -> Self {
        Self::with_pacer(config, Arc::new(TokioPacer))
    }

    pub fn with_pacer(config: AerofastConfig, pacer: Arc<dyn Pacer>) -> Self {
        let visits = VisitRegistry::new(
            config.server.max_visits,
            config.server.visit_idle_timeout(),
        );
        Self {
            config: Arc::new(config),
            engine: Arc::new(CatalogQueryEngine::default()),
            responder: Arc::new(ConciergeResponder::standard()),
            content: Arc::new(SiteContent::aerospace_fasteners()),
            visits: Arc::new(visits),
            pacer,
            start_time: Instant::now(),
        }
    }
}
