use crate::hooks::use_activities;
use crate::model::ParticipantRef;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

/// Email field plus an activity picker filled from the current catalog.
#[function_component(SignupForm)]
pub fn signup_form() -> Html {
    let context = use_activities();
    let form_ref = use_node_ref();
    let email_ref = use_node_ref();
    let activity_ref = use_node_ref();

    let onsubmit = {
        let signup = context.signup.clone();
        let form_ref = form_ref.clone();
        let email_ref = email_ref.clone();
        let activity_ref = activity_ref.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();

            let (Some(email), Some(activity)) = (
                email_ref.cast::<HtmlInputElement>(),
                activity_ref.cast::<HtmlSelectElement>(),
            ) else {
                log::warn!("Signup form submitted before it was mounted");
                return;
            };

            let reset = {
                let form_ref = form_ref.clone();
                Callback::from(move |_: ()| {
                    if let Some(form) = form_ref.cast::<HtmlFormElement>() {
                        form.reset();
                    }
                })
            };

            signup.emit((ParticipantRef::new(activity.value(), email.value()), reset));
        })
    };

    let names: Vec<String> = context
        .state
        .catalog()
        .map(|catalog| catalog.names().map(str::to_string).collect())
        .unwrap_or_default();

    html! {
        <form id="signup-form" class="mergington-signup-form" ref={form_ref} {onsubmit}>
            <div class="mergington-signup-form__group">
                <label for="email">{"Student Email:"}</label>
                <input
                    ref={email_ref}
                    type="email"
                    id="email"
                    required=true
                    placeholder="your-email@mergington.edu"
                />
            </div>
            <div class="mergington-signup-form__group">
                <label for="activity">{"Select Activity:"}</label>
                <select ref={activity_ref} id="activity" required=true>
                    <option value="">{"-- Select an activity --"}</option>
                    {for names.into_iter().map(|name| html! {
                        <option key={name.clone()} value={name.clone()}>{name}</option>
                    })}
                </select>
            </div>
            <button type="submit" class="mergington-signup-form__submit">{"Sign Up"}</button>
        </form>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use crate::model::{Activity, ActivityCatalog, LoadState};
    use crate::providers::ActivitiesContext;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;
    use web_sys::SubmitEventInit;
    use yew::AppHandle;

    wasm_bindgen_test_configure!(run_in_browser);

    type Submitted = Rc<RefCell<Vec<(ParticipantRef, Callback<()>)>>>;

    #[derive(Properties, PartialEq)]
    struct HarnessProps {
        context: ActivitiesContext,
    }

    #[function_component(Harness)]
    fn harness(props: &HarnessProps) -> Html {
        html! {
            <ContextProvider<ActivitiesContext> context={props.context.clone()}>
                <SignupForm />
            </ContextProvider<ActivitiesContext>>
        }
    }

    fn context(submitted: &Submitted) -> ActivitiesContext {
        let catalog: ActivityCatalog = [
            Activity::new("Chess Club", "Chess", "Fridays", 12),
            Activity::new("Debate Club", "Debate", "Mondays", 16),
        ]
        .into_iter()
        .collect();
        let signup = {
            let submitted = submitted.clone();
            Callback::from(move |request: (ParticipantRef, Callback<()>)| {
                submitted.borrow_mut().push(request);
            })
        };

        ActivitiesContext {
            state: LoadState::Loaded(catalog),
            message: None,
            refresh: Callback::noop(),
            signup,
            unregister: Callback::noop(),
        }
    }

    async fn mount(context: ActivitiesContext) -> (web_sys::Element, AppHandle<Harness>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&root).unwrap();
        let app = yew::Renderer::<Harness>::with_root_and_props(
            root.clone(),
            HarnessProps { context },
        )
        .render();
        yew::platform::time::sleep(Duration::ZERO).await;
        (root, app)
    }

    fn element<T: JsCast>(root: &web_sys::Element, selector: &str) -> T {
        root.query_selector(selector)
            .unwrap()
            .unwrap()
            .dyn_into::<T>()
            .unwrap()
    }

    fn submit(form: &HtmlFormElement) -> SubmitEvent {
        let init = SubmitEventInit::new();
        init.set_bubbles(true);
        init.set_cancelable(true);
        let event = SubmitEvent::new_with_event_init_dict("submit", &init).unwrap();
        form.dispatch_event(&event).unwrap();
        event
    }

    #[wasm_bindgen_test]
    async fn lists_one_option_per_activity() {
        let submitted = Submitted::default();
        let (root, _app) = mount(context(&submitted)).await;

        let options = root.query_selector_all("#activity option").unwrap();
        assert_eq!(options.length(), 3);
        assert_eq!(
            options.get(1).unwrap().text_content().as_deref(),
            Some("Chess Club")
        );
    }

    #[wasm_bindgen_test]
    async fn submit_sends_both_fields_without_navigating() {
        let submitted = Submitted::default();
        let (root, _app) = mount(context(&submitted)).await;

        let email: HtmlInputElement = element(&root, "#email");
        let activity: HtmlSelectElement = element(&root, "#activity");
        email.set_value("new@mergington.edu");
        activity.set_value("Debate Club");

        let event = submit(&element(&root, "#signup-form"));

        assert!(event.default_prevented());
        let submitted = submitted.borrow();
        assert_eq!(submitted.len(), 1);
        assert_eq!(
            submitted[0].0,
            ParticipantRef::new("Debate Club", "new@mergington.edu")
        );
    }

    #[wasm_bindgen_test]
    async fn success_callback_resets_the_form() {
        let submitted = Submitted::default();
        let (root, _app) = mount(context(&submitted)).await;

        let email: HtmlInputElement = element(&root, "#email");
        let activity: HtmlSelectElement = element(&root, "#activity");
        email.set_value("new@mergington.edu");
        activity.set_value("Chess Club");
        submit(&element(&root, "#signup-form"));

        let on_success = submitted.borrow()[0].1.clone();
        on_success.emit(());

        assert_eq!(email.value(), "");
        assert_eq!(activity.value(), "");
    }
}
