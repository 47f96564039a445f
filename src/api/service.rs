use crate::model::{ActivityCatalog, ApiError, MessageResponse, ParticipantRef};
use async_trait::async_trait;

/// The three calls the page makes against the backend.
///
/// Futures are not `Send`: the browser client runs everything on the page's
/// event loop.
#[async_trait(?Send)]
pub trait ActivityService {
    /// `GET /activities`
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError>;

    /// `POST /activities/{activity}/signup?email={email}`
    async fn signup(&self, participant: &ParticipantRef) -> Result<MessageResponse, ApiError>;

    /// `POST /activities/{activity}/unregister?email={email}`
    ///
    /// A successful response may come without a body, hence the `Option`.
    async fn unregister(
        &self,
        participant: &ParticipantRef,
    ) -> Result<Option<MessageResponse>, ApiError>;
}
