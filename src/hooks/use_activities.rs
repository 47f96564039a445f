use crate::providers::ActivitiesContext;
use yew::prelude::*;

/// Hook to access the activity list, the message area and the page actions.
#[hook]
pub fn use_activities() -> ActivitiesContext {
    use_context::<ActivitiesContext>()
        .expect("use_activities must be used within an ActivitiesProvider")
}
