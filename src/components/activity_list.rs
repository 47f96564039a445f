use crate::components::ActivityCard;
use crate::handler::LOAD_FAILED_MESSAGE;
use crate::hooks::use_activities;
use crate::model::LoadState;
use yew::prelude::*;

/// One card per activity, rebuilt from the latest fetch.
#[function_component(ActivityList)]
pub fn activity_list() -> Html {
    let context = use_activities();

    html! {
        <div id="activities-list" class="mergington-activity-list">
            {match &context.state {
                LoadState::Loading => html! {
                    <p class="mergington-activity-list__loading">{"Loading activities..."}</p>
                },
                LoadState::Failed => html! {
                    <p class="mergington-activity-list__error">{LOAD_FAILED_MESSAGE}</p>
                },
                LoadState::Loaded(catalog) => html! {
                    <>{for catalog.get_activities().iter().map(|activity| {
                        html! {
                            <ActivityCard
                                key={activity.name.clone()}
                                activity={activity.clone()}
                                on_unregister={context.unregister.clone()}
                            />
                        }
                    })}</>
                },
            }}
        </div>
    }
}
