//! Grid of ad cards.

#[cfg(test)]
#[path = "ad_list_test.rs"]
mod ad_list_test;

use leptos::prelude::*;

use super::ad_card::{AdCard, AdCardModel};
use crate::net::types::{Ad, User};
use crate::state::session::use_session;

/// One card per ad, in response order.
pub fn card_models(ads: &[Ad], viewer: Option<&User>) -> Vec<AdCardModel> {
    ads.iter().map(|ad| AdCardModel::new(ad, viewer)).collect()
}

#[component]
pub fn AdList(
    #[prop(into)] ads: Signal<Vec<Ad>>,
    #[prop(optional, into)] loading: Signal<bool>,
    #[prop(default = "No ads to show.")] empty_text: &'static str,
) -> impl IntoView {
    let session = use_session();
    let cards = Memo::new(move |_| {
        let viewer = session.user();
        ads.with(|ads| card_models(ads, viewer.as_ref()))
    });

    view! {
        <section class="ad-list">
            <Show
                when=move || !cards.with(Vec::is_empty)
                fallback=move || {
                    view! {
                        <p class="ad-list__empty">{move || if loading.get() { "Loading..." } else { empty_text }}</p>
                    }
                }
            >
                <div class="ad-list__grid">
                    <For each=move || cards.get() key=|card| card.id let:card>
                        <AdCard model=card/>
                    </For>
                </div>
            </Show>
        </section>
    }
}
