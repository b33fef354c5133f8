//! New-ad route.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::forms::ad_form::AdForm;

#[component]
pub fn CreateAdPage() -> impl IntoView {
    view! {
        <Title text="New ad | Sellpoint"/>
        <section class="page page--narrow">
            <AdForm/>
        </section>
    }
}
