use crate::model::ParticipantRef;
use yew::prelude::*;

pub const EMPTY_ROSTER_MESSAGE: &str = "No participants yet";

#[derive(Properties, PartialEq)]
pub struct ParticipantListProps {
    pub activity: AttrValue,
    pub participants: Vec<String>,
    pub on_unregister: Callback<ParticipantRef>,
}

/// Roster of one activity, each entry with its own unregister button.
#[function_component(ParticipantList)]
pub fn participant_list(props: &ParticipantListProps) -> Html {
    html! {
        <div class="mergington-participants">
            <h5 class="mergington-participants__title">{"Participants:"}</h5>
            if props.participants.is_empty() {
                <p class="mergington-participants__empty">{EMPTY_ROSTER_MESSAGE}</p>
            } else {
                <ul class="mergington-participants__items">
                    {for props.participants.iter().map(|email| {
                        let onclick = {
                            let on_unregister = props.on_unregister.clone();
                            let participant = ParticipantRef::new(props.activity.as_str(), email.as_str());
                            Callback::from(move |_: MouseEvent| {
                                on_unregister.emit(participant.clone());
                            })
                        };

                        html! {
                            <li class="mergington-participants__item">
                                <span class="mergington-participants__email">{email}</span>
                                <button
                                    class="mergington-participants__delete"
                                    title="Unregister"
                                    {onclick}
                                >
                                    {"🗑️"}
                                </button>
                            </li>
                        }
                    })}
                </ul>
            }
        </div>
    }
}
