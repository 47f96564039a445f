use super::{default_catalog, ActivityRepository, SignupError};
use crate::model::ActivityCatalog;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Activities kept in process memory; lost on restart.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    catalog: Arc<RwLock<ActivityCatalog>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_catalog(catalog: ActivityCatalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    /// Storage pre-filled with the Mergington activities.
    pub fn seeded() -> Self {
        Self::with_catalog(default_catalog())
    }
}

#[async_trait]
impl ActivityRepository for MemoryStorage {
    #[instrument(skip(self))]
    async fn list_activities(&self) -> Result<ActivityCatalog, SignupError> {
        Ok(self.catalog.read().await.clone())
    }

    #[instrument(skip(self))]
    async fn signup(&self, activity: &str, email: &str) -> Result<(), SignupError> {
        let mut catalog = self.catalog.write().await;
        let entry = catalog
            .get_activity_mut(activity)
            .ok_or_else(|| SignupError::ActivityNotFound(activity.to_string()))?;

        if entry.has_participant(email) {
            return Err(SignupError::AlreadySignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }
        if entry.is_full() {
            return Err(SignupError::ActivityFull(activity.to_string()));
        }

        entry.details.participants.push(email.to_string());
        debug!(spots_left = entry.spots_left(), "Participant added");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn unregister(&self, activity: &str, email: &str) -> Result<(), SignupError> {
        let mut catalog = self.catalog.write().await;
        let entry = catalog
            .get_activity_mut(activity)
            .ok_or_else(|| SignupError::ActivityNotFound(activity.to_string()))?;

        if !entry.has_participant(email) {
            return Err(SignupError::NotSignedUp {
                activity: activity.to_string(),
                email: email.to_string(),
            });
        }

        entry.details.participants.retain(|p| p != email);
        debug!(spots_left = entry.spots_left(), "Participant removed");
        Ok(())
    }
}
