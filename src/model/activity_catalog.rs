use super::{Activity, ActivityDetails};
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Ordered set of activities keyed by name.
///
/// On the wire this is a JSON object mapping each name to its
/// [`ActivityDetails`]. Key order is kept as received so the page lists
/// activities in the order the server sends them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    pub fn new() -> Self {
        ActivityCatalog {
            activities: Vec::new(),
        }
    }

    pub fn get_activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Adds `activity` unless one with the same name is already present.
    pub fn add_activity(&mut self, activity: Activity) {
        if self.activities.iter().any(|a| a.name == activity.name) {
            return;
        }
        self.activities.push(activity);
    }

    pub fn get_activity(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.name == name)
    }

    pub fn get_activity_mut(&mut self, name: &str) -> Option<&mut Activity> {
        self.activities
            .iter_mut()
            .find(|activity| activity.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|activity| activity.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl FromIterator<Activity> for ActivityCatalog {
    fn from_iter<I: IntoIterator<Item = Activity>>(iter: I) -> Self {
        let mut catalog = ActivityCatalog::new();
        for activity in iter {
            catalog.add_activity(activity);
        }
        catalog
    }
}

impl Serialize for ActivityCatalog {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.activities.len()))?;
        for activity in &self.activities {
            map.serialize_entry(&activity.name, &activity.details)?;
        }
        map.end()
    }
}

struct CatalogVisitor;

impl<'de> Visitor<'de> for CatalogVisitor {
    type Value = ActivityCatalog;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map of activity names to activity details")
    }

    fn visit_map<M>(self, mut access: M) -> Result<Self::Value, M::Error>
    where
        M: MapAccess<'de>,
    {
        let mut catalog = ActivityCatalog::new();
        while let Some((name, details)) = access.next_entry::<String, ActivityDetails>()? {
            catalog.add_activity(Activity { name, details });
        }
        Ok(catalog)
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(CatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RESPONSE: &str = r#"{
        "Programming Class": {
            "description": "Learn programming fundamentals",
            "schedule": "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            "max_participants": 20,
            "participants": ["emma@mergington.edu"]
        },
        "Chess Club": {
            "description": "Learn strategies and compete in chess tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 10,
            "participants": ["a@x.com", "b@x.com"]
        },
        "Art Studio": {
            "description": "Painting and drawing",
            "schedule": "Wednesdays",
            "max_participants": 18,
            "participants": []
        }
    }"#;

    #[test]
    fn parses_activities_in_wire_order() {
        let catalog: ActivityCatalog = serde_json::from_str(RESPONSE).unwrap();

        let names: Vec<_> = catalog.names().collect();
        assert_eq!(names, vec!["Programming Class", "Chess Club", "Art Studio"]);

        let chess = catalog.get_activity("Chess Club").unwrap();
        assert_eq!(chess.spots_left(), 8);
        assert_eq!(chess.participants(), ["a@x.com", "b@x.com"]);
        assert!(catalog.get_activity("Art Studio").unwrap().participants().is_empty());
    }

    #[test]
    fn serializes_back_to_a_name_keyed_map() {
        let catalog: ActivityCatalog = [
            Activity::new("Chess Club", "Chess", "Fridays", 12).with_participants(["a@x.com"]),
            Activity::new("Debate Club", "Debate", "Mondays", 16),
        ]
        .into_iter()
        .collect();

        let value = serde_json::to_value(&catalog).unwrap();
        assert_eq!(value["Chess Club"]["max_participants"], 12);
        assert_eq!(value["Chess Club"]["participants"][0], "a@x.com");
        assert_eq!(value["Debate Club"]["participants"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn duplicate_names_keep_the_first_entry() {
        let mut catalog = ActivityCatalog::new();
        catalog.add_activity(Activity::new("Chess Club", "first", "", 5));
        catalog.add_activity(Activity::new("Chess Club", "second", "", 9));

        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.get_activity("Chess Club").unwrap().details.description,
            "first"
        );
    }

    #[test]
    fn rejects_malformed_payload() {
        assert!(serde_json::from_str::<ActivityCatalog>(r#"["Chess Club"]"#).is_err());
        assert!(serde_json::from_str::<ActivityCatalog>(
            r#"{"Chess Club": {"description": "x"}}"#
        )
        .is_err());
    }
}
