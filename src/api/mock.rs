use super::ActivityService;
use crate::model::{
    Activity, ActivityCatalog, ApiError, MessageResponse, ParticipantRef,
};
use async_trait::async_trait;
use std::cell::RefCell;

/// In-memory stand-in for the backend. `failure` short-circuits every call.
#[derive(Default)]
pub struct MockActivityService {
    pub catalog: RefCell<ActivityCatalog>,
    pub failure: RefCell<Option<ApiError>>,
    pub unregister_body: bool,
    pub calls: RefCell<Vec<String>>,
}

impl MockActivityService {
    pub fn with_activities(activities: Vec<Activity>) -> Self {
        Self {
            catalog: RefCell::new(activities.into_iter().collect()),
            unregister_body: true,
            ..Default::default()
        }
    }

    pub fn fail_with(self, error: ApiError) -> Self {
        *self.failure.borrow_mut() = Some(error);
        self
    }

    fn check(&self, call: String) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(call);
        match self.failure.borrow().clone() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn not_found() -> ApiError {
        ApiError::Status {
            status: 404,
            detail: Some("Activity not found".to_string()),
        }
    }
}

#[async_trait(?Send)]
impl ActivityService for MockActivityService {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        self.check("fetch".to_string())?;
        Ok(self.catalog.borrow().clone())
    }

    async fn signup(&self, participant: &ParticipantRef) -> Result<MessageResponse, ApiError> {
        self.check(format!("signup {}", participant.email))?;
        let mut catalog = self.catalog.borrow_mut();
        let activity = catalog
            .get_activity_mut(&participant.activity)
            .ok_or_else(Self::not_found)?;
        if activity.has_participant(&participant.email) {
            return Err(ApiError::Status {
                status: 400,
                detail: Some("Student is already signed up".to_string()),
            });
        }
        activity.details.participants.push(participant.email.clone());
        Ok(MessageResponse {
            message: format!(
                "Signed up {} for {}",
                participant.email, participant.activity
            ),
        })
    }

    async fn unregister(
        &self,
        participant: &ParticipantRef,
    ) -> Result<Option<MessageResponse>, ApiError> {
        self.check(format!("unregister {}", participant.email))?;
        let mut catalog = self.catalog.borrow_mut();
        let activity = catalog
            .get_activity_mut(&participant.activity)
            .ok_or_else(Self::not_found)?;
        if !activity.has_participant(&participant.email) {
            return Err(ApiError::Status {
                status: 400,
                detail: Some("Student is not signed up for this activity".to_string()),
            });
        }
        activity
            .details
            .participants
            .retain(|email| email != &participant.email);
        Ok(self.unregister_body.then(|| MessageResponse {
            message: format!(
                "Unregistered {} from {}",
                participant.email, participant.activity
            ),
        }))
    }
}
