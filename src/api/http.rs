use super::{activities_url, signup_url, unregister_url, ActivityService};
use crate::model::{
    ActivityCatalog, ApiError, ErrorResponse, MessageResponse, ParticipantRef,
};
use async_trait::async_trait;
use gloo_net::http::{Request, Response};

/// [`ActivityService`] over `fetch`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpActivityService {
    base_url: String,
}

impl HttpActivityService {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    async fn send(request: Result<Response, gloo_net::Error>) -> Result<Response, ApiError> {
        let response = request.map_err(|e| ApiError::Network(e.to_string()))?;
        if response.ok() {
            Ok(response)
        } else {
            Err(Self::status_error(&response).await)
        }
    }

    async fn status_error(response: &Response) -> ApiError {
        let detail = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.detail);
        ApiError::Status {
            status: response.status(),
            detail,
        }
    }
}

#[async_trait(?Send)]
impl ActivityService for HttpActivityService {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        let url = activities_url(&self.base_url);
        log::debug!("Fetching activities from {}", url);

        let response = Self::send(Request::get(&url).send().await).await?;
        response
            .json::<ActivityCatalog>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn signup(&self, participant: &ParticipantRef) -> Result<MessageResponse, ApiError> {
        let url = signup_url(&self.base_url, participant);
        log::debug!("Signing up {} for {}", participant.email, participant.activity);

        let response = Self::send(Request::post(&url).send().await).await?;
        response
            .json::<MessageResponse>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }

    async fn unregister(
        &self,
        participant: &ParticipantRef,
    ) -> Result<Option<MessageResponse>, ApiError> {
        let url = unregister_url(&self.base_url, participant);
        log::debug!(
            "Unregistering {} from {}",
            participant.email,
            participant.activity
        );

        let response = Self::send(Request::post(&url).send().await).await?;
        Ok(response.json::<MessageResponse>().await.ok())
    }
}
