//! Registration route and its legacy `/signup` alias.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::Redirect;

use crate::config::REGISTER_PATH;
use crate::forms::register::RegisterForm;

#[component]
pub fn RegisterPage() -> impl IntoView {
    view! {
        <Title text="Register | Sellpoint"/>
        <section class="page page--narrow">
            <RegisterForm/>
        </section>
    }
}

#[component]
pub fn SignupRedirect() -> impl IntoView {
    view! { <Redirect path=REGISTER_PATH/> }
}
