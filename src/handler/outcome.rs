use crate::model::Message;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionOutcome {
    pub message: Message,
    /// The server accepted the change; the page must re-synchronize.
    pub succeeded: bool,
}

impl ActionOutcome {
    pub fn success(message: Message) -> Self {
        Self {
            message,
            succeeded: true,
        }
    }

    pub fn failure(message: Message) -> Self {
        Self {
            message,
            succeeded: false,
        }
    }
}
