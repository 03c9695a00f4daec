//! Shared application state injected into all Axum handlers.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::AiConfig;
use crate::error::AppError;
use crate::persistence::Store;
use crate::service::{AssistantService, PostService, VisitService};

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
///
/// The store is built once at startup and handed in here; nothing in the
/// crate holds a global connection.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Post accessor.
    pub posts: Arc<PostService>,
    /// Visit accessor.
    pub visits: Arc<VisitService>,
    /// AI relay.
    pub assistant: Arc<AssistantService>,
    /// When the process started serving; drives the dashboard uptime.
    pub started_at: Instant,
}

impl AppState {
    /// Wires the services around one store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the outbound HTTP client cannot
    /// be built.
    pub fn new(store: Arc<dyn Store>, ai: &AiConfig) -> Result<Self, AppError> {
        Ok(Self {
            posts: Arc::new(PostService::new(Arc::clone(&store))),
            visits: Arc::new(VisitService::new(store)),
            assistant: Arc::new(AssistantService::from_config(ai)?),
            started_at: Instant::now(),
        })
    }

    /// Time since the state was built.
    #[must_use]
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}
