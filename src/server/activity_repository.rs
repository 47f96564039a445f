use super::SignupError;
use crate::model::ActivityCatalog;
use async_trait::async_trait;

#[async_trait]
pub trait ActivityRepository: Send + Sync {
    async fn list_activities(&self) -> Result<ActivityCatalog, SignupError>;
    async fn signup(&self, activity: &str, email: &str) -> Result<(), SignupError>;
    async fn unregister(&self, activity: &str, email: &str) -> Result<(), SignupError>;
}
