use crate::api::HttpActivityService;
use crate::config::Config;
use crate::handler::{load_activities, signup_and_sync, unregister_and_sync};
use crate::model::{LoadState, Message, ParticipantRef};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Page state shared by the list, the form and the message area.
///
/// Overlapping requests are not coordinated: whichever response arrives last
/// decides the message and the final re-render.
#[derive(Clone, PartialEq)]
pub struct ActivitiesContext {
    pub state: LoadState,
    pub message: Option<Message>,
    /// Re-fetches the catalog and redraws everything from it.
    pub refresh: Callback<()>,
    /// Signs a participant up. The second callback fires only on success.
    pub signup: Callback<(ParticipantRef, Callback<()>)>,
    pub unregister: Callback<ParticipantRef>,
}

#[derive(Properties, PartialEq)]
pub struct ActivitiesProviderProps {
    #[prop_or_default]
    pub config: Config,
    pub children: Children,
}

#[function_component(ActivitiesProvider)]
pub fn activities_provider(props: &ActivitiesProviderProps) -> Html {
    let state = use_state(|| LoadState::Loading);
    let message = use_state(|| None::<Message>);
    let service = use_memo(props.config.api_base_url.clone(), |base_url| {
        HttpActivityService::new(base_url.clone())
    });

    let refresh = {
        let service = service.clone();
        let state = state.clone();
        Callback::from(move |_: ()| {
            let service = service.clone();
            let state = state.clone();
            spawn_local(async move {
                state.set(load_activities(&*service).await);
            });
        })
    };

    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            refresh.emit(());
            || ()
        });
    }

    let unregister = {
        let service = service.clone();
        let message = message.clone();
        let refresh = refresh.clone();
        Callback::from(move |participant: ParticipantRef| {
            let service = service.clone();
            let message = message.clone();
            let refresh = refresh.clone();
            spawn_local(async move {
                unregister_and_sync(
                    &*service,
                    &participant,
                    |text| message.set(text),
                    || refresh.emit(()),
                )
                .await;
            });
        })
    };

    let signup = {
        let service = service.clone();
        let message = message.clone();
        let refresh = refresh.clone();
        let timeout_ms = props.config.message_timeout_ms;
        Callback::from(
            move |(participant, on_success): (ParticipantRef, Callback<()>)| {
                let service = service.clone();
                let message = message.clone();
                let refresh = refresh.clone();
                spawn_local(async move {
                    signup_and_sync(
                        &*service,
                        &participant,
                        |text| message.set(text),
                        || on_success.emit(()),
                        || refresh.emit(()),
                        || TimeoutFuture::new(timeout_ms),
                    )
                    .await;
                });
            },
        )
    };

    let context = ActivitiesContext {
        state: (*state).clone(),
        message: (*message).clone(),
        refresh,
        signup,
        unregister,
    };

    html! {
        <ContextProvider<ActivitiesContext> {context}>
            {props.children.clone()}
        </ContextProvider<ActivitiesContext>>
    }
}
