use crate::model::ParticipantRef;

/// Percent-encodes one path segment or query value the way the browser's
/// `encodeURIComponent` does.
fn encode_component(value: &str) -> String {
    String::from(js_sys::encode_uri_component(value))
}

fn base(base_url: &str) -> &str {
    base_url.trim_end_matches('/')
}

pub fn activities_url(base_url: &str) -> String {
    format!("{}/activities", base(base_url))
}

pub fn signup_url(base_url: &str, participant: &ParticipantRef) -> String {
    participant_url(base_url, participant, "signup")
}

pub fn unregister_url(base_url: &str, participant: &ParticipantRef) -> String {
    participant_url(base_url, participant, "unregister")
}

fn participant_url(base_url: &str, participant: &ParticipantRef, action: &str) -> String {
    format!(
        "{}/activities/{}/{}?email={}",
        base(base_url),
        encode_component(&participant.activity),
        action,
        encode_component(&participant.email)
    )
}
