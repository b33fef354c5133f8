//! Fallback for unknown routes.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Not found | Sellpoint"/>
        <section class="page page--narrow not-found">
            <h1>"Page not found"</h1>
            <p>"The page you are looking for does not exist."</p>
            <a class="btn btn--primary" href="/">"Back to the front page"</a>
        </section>
    }
}
