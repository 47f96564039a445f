use crate::components::ParticipantList;
use crate::model::{Activity, ParticipantRef};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ActivityCardProps {
    pub activity: Activity,
    pub on_unregister: Callback<ParticipantRef>,
}

pub fn spots_left_label(activity: &Activity) -> String {
    format!("{} spots left", activity.spots_left())
}

#[function_component(ActivityCard)]
pub fn activity_card(props: &ActivityCardProps) -> Html {
    let activity = &props.activity;

    html! {
        <div class={classes!("mergington-activity-card", activity.is_full().then_some("full"))}>
            <h4 class="mergington-activity-card__name">{&activity.name}</h4>
            <p class="mergington-activity-card__description">{&activity.details.description}</p>
            <p class="mergington-activity-card__schedule">
                <strong>{"Schedule: "}</strong>{&activity.details.schedule}
            </p>
            <p class="mergington-activity-card__availability">
                <strong>{"Availability: "}</strong>{spots_left_label(activity)}
            </p>
            <ParticipantList
                activity={AttrValue::from(activity.name.clone())}
                participants={activity.details.participants.clone()}
                on_unregister={props.on_unregister.clone()}
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_shows_remaining_capacity() {
        let activity = Activity::new("Chess Club", "Chess", "Fridays", 10)
            .with_participants(["a@x.com", "b@x.com"]);
        assert_eq!(spots_left_label(&activity), "8 spots left");

        let full = Activity::new("Tiny", "", "", 1).with_participants(["a@x.com"]);
        assert_eq!(spots_left_label(&full), "0 spots left");
    }

    #[test]
    fn props_carry_the_activity() {
        let activity = Activity::new("Debate Club", "Debate", "Mondays", 16);
        let props = yew::props!(ActivityCardProps {
            activity: activity.clone(),
            on_unregister: Callback::noop(),
        });

        assert_eq!(props.activity, activity);
    }
}
