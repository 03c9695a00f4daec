//! Visit service: records and counts visits.

use std::sync::Arc;

use crate::error::AppError;
use crate::persistence::{Store, Visit};

/// Typed accessor over the `visits` collection.
#[derive(Debug, Clone)]
pub struct VisitService {
    store: Arc<dyn Store>,
}

impl VisitService {
    /// Creates a new `VisitService` over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Records one visit now.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage failure.
    pub async fn record(&self) -> Result<Visit, AppError> {
        let visit = self.store.insert_visit().await?;
        tracing::debug!(visit_id = %visit.id, "visit recorded");
        Ok(visit)
    }

    /// Returns the total number of recorded visits.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Persistence`] on storage failure.
    pub async fn count(&self) -> Result<u64, AppError> {
        self.store.count_visits().await
    }
}
