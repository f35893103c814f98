//! Visits: the server-side half of one mounted page.
//!
//! A visit owns everything interactive on the page: the concierge
//! conversation, the contact desk, the catalog filters, and the event
//! channel the page listens on. Closing a visit tears all of it down, so
//! no timer fires into a page that is gone. Pages that disappear without
//! closing their visit are reclaimed once idle.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use aerofast_catalog::{CatalogView, SortState};
use aerofast_concierge::{ChatSession, ConciergeResponder};
use aerofast_contact::ContactDesk;
use aerofast_core::config::AerofastConfig;
use aerofast_core::events::SiteEvent;
use aerofast_core::pacing::Pacer;
use chrono::{DateTime, Utc};
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::Instant;
use uuid::Uuid;

/// Events buffered per visit before a slow SSE subscriber starts lagging.
const EVENT_CAPACITY: usize = 64;

pub struct Visit {
    pub id: Uuid,
    pub opened_at: DateTime<Utc>,
    pub chat: ChatSession,
    pub contact: ContactDesk,
    catalog: Mutex<CatalogView>,
    events: broadcast::Sender<SiteEvent>,
    last_seen: Mutex<Instant>,
}

impl std::fmt::Debug for Visit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Visit")
            .field("id", &self.id)
            .field("opened_at", &self.opened_at)
            .field("chat", &self.chat)
            .field("contact_state", &self.contact.state())
            .field("subscribers", &self.events.receiver_count())
            .finish()
    }
}

impl Visit {
    /// Mount a page. Must be called inside a tokio runtime.
    pub fn open(
        responder: Arc<ConciergeResponder>,
        pacer: Arc<dyn Pacer>,
        config: &AerofastConfig,
    ) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        let default_sort = SortState::new(
            config.catalog.default_sort_field,
            config.catalog.default_sort_direction,
        );
        Self {
            id: Uuid::new_v4(),
            opened_at: Utc::now(),
            chat: ChatSession::new(responder, Arc::clone(&pacer), &config.concierge, events.clone()),
            contact: ContactDesk::new(pacer, &config.contact, events.clone()),
            catalog: Mutex::new(CatalogView::new(default_sort)),
            events,
            last_seen: Mutex::new(Instant::now()),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SiteEvent> {
        self.events.subscribe()
    }

    /// Run `f` against the visit's catalog view.
    pub fn with_catalog<T>(&self, f: impl FnOnce(&mut CatalogView) -> T) -> T {
        let mut view = self.catalog.lock().expect("catalog view mutex poisoned");
        f(&mut view)
    }

    /// Record activity from the page.
    pub fn touch(&self) {
        *self.last_seen.lock().expect("last_seen mutex poisoned") = Instant::now();
    }

    pub fn idle_for(&self) -> Duration {
        self.last_seen
            .lock()
            .expect("last_seen mutex poisoned")
            .elapsed()
    }

    /// Idle longer than `timeout` with nobody listening on the event stream.
    pub fn is_stale(&self, timeout: Duration) -> bool {
        self.events.receiver_count() == 0 && self.idle_for() >= timeout
    }

    /// Cancel pending replies and the contact timeline.
    pub fn close(&self) {
        self.chat.close();
        self.contact.close();
    }
}

/// Open visits, capped at a configured maximum.
pub struct VisitRegistry {
    visits: Mutex<HashMap<Uuid, Arc<Visit>>>,
    max_visits: usize,
    idle_timeout: Option<Duration>,
}

impl VisitRegistry {
    /// `idle_timeout` of `None` keeps visits until they are closed.
    pub fn new(max_visits: usize, idle_timeout: Option<Duration>) -> Self {
        Self {
            visits: Mutex::new(HashMap::new()),
            max_visits,
            idle_timeout,
        }
    }

    /// Register `visit`, or hand it back if the registry is still full
    /// after reclaiming idle visits.
    pub fn insert(&self, visit: Visit) -> Result<Arc<Visit>, Visit> {
        let mut visits = self.visits.lock().expect("visit registry mutex poisoned");
        let mut reclaimed = Vec::new();
        if visits.len() >= self.max_visits {
            reclaimed = self.take_stale(&mut visits);
        }
        let result = if visits.len() >= self.max_visits {
            Err(visit)
        } else {
            let visit = Arc::new(visit);
            visits.insert(visit.id, Arc::clone(&visit));
            tracing::info!(visit_id = %visit.id, open_visits = visits.len(), "Visit opened");
            Ok(visit)
        };
        drop(visits);
        close_reclaimed(&reclaimed);
        result
    }

    /// Look up a visit and mark it active.
    pub fn get(&self, id: Uuid) -> Option<Arc<Visit>> {
        let visit = self
            .visits
            .lock()
            .expect("visit registry mutex poisoned")
            .get(&id)
            .cloned()?;
        visit.touch();
        Some(visit)
    }

    /// Remove and tear down a visit. Returns false if it was not open.
    pub fn close(&self, id: Uuid) -> bool {
        let removed = self
            .visits
            .lock()
            .expect("visit registry mutex poisoned")
            .remove(&id);
        match removed {
            Some(visit) => {
                visit.close();
                tracing::info!(visit_id = %id, "Visit closed");
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.visits.lock().expect("visit registry mutex poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Close every visit that has gone idle. Returns how many were closed.
    pub fn sweep_idle(&self) -> usize {
        let reclaimed = {
            let mut visits = self.visits.lock().expect("visit registry mutex poisoned");
            self.take_stale(&mut visits)
        };
        close_reclaimed(&reclaimed);
        reclaimed.len()
    }

    fn take_stale(&self, visits: &mut HashMap<Uuid, Arc<Visit>>) -> Vec<Arc<Visit>> {
        let Some(timeout) = self.idle_timeout else {
            return Vec::new();
        };
        let stale: Vec<Uuid> = visits
            .values()
            .filter(|visit| visit.is_stale(timeout))
            .map(|visit| visit.id)
            .collect();
        stale.iter().filter_map(|id| visits.remove(id)).collect()
    }

    /// Periodically reclaim idle visits. `None` when expiry is disabled.
    pub fn spawn_sweeper(self: &Arc<Self>) -> Option<JoinHandle<()>> {
        let timeout = self.idle_timeout?;
        let period = (timeout / 4).max(Duration::from_secs(1));
        let registry = Arc::clone(self);
        Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                registry.sweep_idle();
            }
        }))
    }

    /// Tear down every open visit.
    pub fn close_all(&self) {
        let drained: Vec<Arc<Visit>> = self
            .visits
            .lock()
            .expect("visit registry mutex poisoned")
            .drain()
            .map(|(_, visit)| visit)
            .collect();
        for visit in &drained {
            visit.close();
        }
        if !drained.is_empty() {
            tracing::info!(closed = drained.len(), "All visits closed");
        }
    }
}

fn close_reclaimed(reclaimed: &[Arc<Visit>]) {
    for visit in reclaimed {
        visit.close();
        tracing::info!(
            visit_id = %visit.id,
            idle_secs = visit.idle_for().as_secs(),
            "Idle visit closed"
        );
    }
}
