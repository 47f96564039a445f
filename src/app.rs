use crate::components::{ActivityList, MessageBanner, SignupForm};
use crate::config::Config;
use crate::providers::ActivitiesProvider;
use yew::prelude::*;

#[function_component(App)]
pub fn app() -> Html {
    let config = use_memo((), |_| Config::new());

    html! {
        <ActivitiesProvider config={(*config).clone()}>
            <header class="mergington-header">
                <h1>{"Mergington High School"}</h1>
                <h2>{"Extracurricular Activities"}</h2>
            </header>

            <main class="mergington-main">
                <section id="activities-container" class="mergington-card">
                    <h3>{"Available Activities"}</h3>
                    <ActivityList />
                </section>

                <section id="signup-container" class="mergington-card">
                    <h3>{"Sign Up for an Activity"}</h3>
                    <SignupForm />
                    <MessageBanner />
                </section>
            </main>

            <footer class="mergington-footer">
                <p>{"© 2023 Mergington High School"}</p>
            </footer>
        </ActivitiesProvider>
    }
}
