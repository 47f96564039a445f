use super::{ActionOutcome, FALLBACK_ERROR_MESSAGE};
use crate::api::ActivityService;
use crate::model::{Message, ParticipantRef};

pub const UNREGISTER_FAILED_MESSAGE: &str = "Failed to unregister. Please try again.";

pub async fn handle_unregister(
    service: &dyn ActivityService,
    participant: &ParticipantRef,
) -> ActionOutcome {
    match service.unregister(participant).await {
        Ok(response) => {
            let text = response.map(|r| r.message).unwrap_or_else(|| {
                format!(
                    "Unregistered {} from {}",
                    participant.email, participant.activity
                )
            });
            ActionOutcome::success(Message::success(text))
        }
        Err(err) => {
            if err.is_transport() {
                log::error!("Error unregistering: {}", err);
            }
            ActionOutcome::failure(Message::from_api_error(
                &err,
                FALLBACK_ERROR_MESSAGE,
                UNREGISTER_FAILED_MESSAGE,
            ))
        }
    }
}
