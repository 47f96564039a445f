use super::{ActionOutcome, FALLBACK_ERROR_MESSAGE};
use crate::api::ActivityService;
use crate::model::{Message, ParticipantRef};

pub const SIGNUP_FAILED_MESSAGE: &str = "Failed to sign up. Please try again.";

pub async fn handle_signup(
    service: &dyn ActivityService,
    participant: &ParticipantRef,
) -> ActionOutcome {
    match service.signup(participant).await {
        Ok(response) => ActionOutcome::success(Message::success(response.message)),
        Err(err) => {
            if err.is_transport() {
                log::error!("Error signing up: {}", err);
            }
            ActionOutcome::failure(Message::from_api_error(
                &err,
                FALLBACK_ERROR_MESSAGE,
                SIGNUP_FAILED_MESSAGE,
            ))
        }
    }
}
