use crate::api::ActivityService;
use crate::model::LoadState;

pub const LOAD_FAILED_MESSAGE: &str = "Failed to load activities. Please try again later.";

/// Fetches the full catalog. Any failure, including a malformed body, becomes
/// [`LoadState::Failed`]; there is no retry.
pub async fn load_activities(service: &dyn ActivityService) -> LoadState {
    match service.fetch_activities().await {
        Ok(catalog) => {
            log::debug!("Loaded {} activities", catalog.len());
            LoadState::Loaded(catalog)
        }
        Err(err) => {
            log::error!("Error fetching activities: {}", err);
            LoadState::Failed
        }
    }
}
