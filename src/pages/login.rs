//! Login route.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::Redirect;

use crate::forms::login::LoginForm;
use crate::state::session::use_session;

/// Already-authenticated visitors are sent to the front page.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    view! {
        <Title text="Log in | Sellpoint"/>
        <section class="page page--narrow">
            <Show when=move || !session.is_authenticated() fallback=|| view! { <Redirect path="/"/> }>
                <LoginForm/>
            </Show>
        </section>
    }
}
