use crate::hooks::use_activities;
use yew::prelude::*;

#[function_component(MessageBanner)]
pub fn message_banner() -> Html {
    let context = use_activities();

    match &context.message {
        Some(message) => html! {
            <div id="message" class={classes!("message", message.kind.css_class())}>
                {&message.text}
            </div>
        },
        None => html! {
            <div id="message" class="message hidden"></div>
        },
    }
}
