use super::{handle_signup, handle_unregister};
use crate::api::ActivityService;
use crate::model::{Message, ParticipantRef};
use std::future::Future;

/// Runs a signup and applies its outcome to the page.
///
/// The message is shown first. On success the form is reset and the catalog
/// re-fetched. Whatever the outcome, the message is cleared once `wait`
/// resolves.
pub async fn signup_and_sync<W, F>(
    service: &dyn ActivityService,
    participant: &ParticipantRef,
    set_message: impl Fn(Option<Message>),
    reset: impl FnOnce(),
    refresh: impl FnOnce(),
    wait: W,
) where
    W: FnOnce() -> F,
    F: Future<Output = ()>,
{
    let outcome = handle_signup(service, participant).await;
    set_message(Some(outcome.message));
    if outcome.succeeded {
        reset();
        refresh();
    }

    wait().await;
    set_message(None);
}

/// Runs an unregister and applies its outcome. The message stays until
/// something replaces it.
pub async fn unregister_and_sync(
    service: &dyn ActivityService,
    participant: &ParticipantRef,
    set_message: impl Fn(Option<Message>),
    refresh: impl FnOnce(),
) {
    let outcome = handle_unregister(service, participant).await;
    set_message(Some(outcome.message));
    if outcome.succeeded {
        refresh();
    }
}
