//! Front page: category filter above the ad grid.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::ad_list::AdList;
use crate::components::category_filter::CategoryFilterSelect;
use crate::state::listing::{CategoryFilter, ListingQuery, ListingState};

#[component]
pub fn MainPage() -> impl IntoView {
    let listing = RwSignal::new(ListingState::default());
    let filter = RwSignal::new(CategoryFilter::All);
    let hide_sold = RwSignal::new(false);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::ad_api::list_categories().await {
            Ok(categories) => listing.update(|s| s.categories = categories),
            Err(err) => log::warn!("category list failed: {err}"),
        }
    });

    Effect::new(move || {
        let query = ListingQuery { filter: filter.get(), unsold_only: hide_sold.get() };
        listing.update(|s| s.begin(query));

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let ListingQuery { filter, unsold_only } = query;
            let result = match filter {
                CategoryFilter::All if unsold_only => crate::net::ad_api::list_unsold_ads().await,
                CategoryFilter::All => crate::net::ad_api::list_ads().await,
                CategoryFilter::Category(id) => crate::net::ad_api::list_ads_by_category(id)
                    .await
                    .map(|ads| ads.into_iter().filter(|ad| !(unsold_only && ad.is_sold)).collect()),
            };
            if let Err(err) = &result {
                log::warn!("ad list failed: {err}");
            }
            listing.update(|s| {
                s.finish(query, result);
            });
        });
        #[cfg(not(feature = "csr"))]
        let _ = query;
    });

    let on_filter = Callback::new(move |next: CategoryFilter| filter.set(next));
    let ads = Signal::derive(move || listing.with(|s| s.items.clone()));
    let categories = Signal::derive(move || listing.with(|s| s.categories.clone()));
    let heading = move || {
        listing.with(|s| match s.query.filter {
            CategoryFilter::All => "All ads".to_owned(),
            CategoryFilter::Category(id) => s.category_name(id).unwrap_or("Ads").to_owned(),
        })
    };
    let loading = Signal::derive(move || listing.with(|s| s.loading));

    view! {
        <Title text="Sellpoint"/>
        <section class="page main-page">
            <div class="main-page__filters">
                <CategoryFilterSelect categories=categories selected=filter on_change=on_filter/>
                <label class="form-check">
                    <input
                        type="checkbox"
                        prop:checked=move || hide_sold.get()
                        on:change=move |ev| hide_sold.set(event_target_checked(&ev))
                    />
                    "Hide sold"
                </label>
            </div>
            <h1 class="main-page__heading">{heading}</h1>
            {move || listing.with(|s| s.error.clone()).map(|msg| view! { <p class="page__error">{msg}</p> })}
            <AdList ads=ads loading=loading/>
        </section>
    }
}
