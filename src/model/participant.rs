use serde::{Deserialize, Serialize};

/// One email enrolled (or about to be enrolled) in one activity.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParticipantRef {
    pub activity: String,
    pub email: String,
}

impl ParticipantRef {
    pub fn new(activity: impl Into<String>, email: impl Into<String>) -> Self {
        ParticipantRef {
            activity: activity.into(),
            email: email.into(),
        }
    }
}
