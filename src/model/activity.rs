use serde::{Deserialize, Serialize};

/// The body of one entry in the `GET /activities` map. The activity name is
/// the map key and lives on [`Activity`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Activity {
    pub name: String,
    pub details: ActivityDetails,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Activity {
            name: name.into(),
            details: ActivityDetails {
                description: description.into(),
                schedule: schedule.into(),
                max_participants,
                participants: Vec::new(),
            },
        }
    }

    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.details.participants = participants.into_iter().map(Into::into).collect();
        self
    }

    pub fn participants(&self) -> &[String] {
        &self.details.participants
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.details.participants.iter().any(|p| p == email)
    }

    /// Remaining capacity. Never negative, even if the server reports more
    /// participants than `max_participants`.
    pub fn spots_left(&self) -> u32 {
        let taken = u32::try_from(self.details.participants.len()).unwrap_or(u32::MAX);
        self.details.max_participants.saturating_sub(taken)
    }

    pub fn is_full(&self) -> bool {
        self.spots_left() == 0
    }
}
