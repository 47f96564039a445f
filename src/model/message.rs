use super::ApiError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// Class applied to the message area next to `message`.
    pub fn css_class(&self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

/// Text shown in the shared message area.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn success(text: impl Into<String>) -> Self {
        Message {
            kind: MessageKind::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Message {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    /// Error message for a failed request: the server's `detail` verbatim when
    /// it sent one, `status_fallback` for other non-success responses and
    /// `transport_fallback` when no response arrived at all.
    pub fn from_api_error(
        error: &ApiError,
        status_fallback: &str,
        transport_fallback: &str,
    ) -> Self {
        if let Some(detail) = error.detail() {
            return Message::error(detail);
        }
        if error.is_transport() {
            Message::error(transport_fallback)
        } else {
            Message::error(status_fallback)
        }
    }
}
