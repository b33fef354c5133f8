//! Ad detail route (`/ad/:id`).

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use super::parse_id_param;
use crate::components::large_ad::LargeAd;
use crate::net::types::Ad;

#[component]
pub fn AdViewPage() -> impl IntoView {
    let params = use_params_map();
    let ad_id = Memo::new(move |_| parse_id_param(params.read().get("id").as_deref()));
    let ad = RwSignal::new(None::<Ad>);
    let category_name = RwSignal::new(None::<String>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(id) = ad_id.get() else {
            error.set(Some("Ad not found.".to_owned()));
            return;
        };
        ad.set(None);
        category_name.set(None);
        error.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::ad_api::get_ad(id).await;
            if ad_id.get_untracked() != Some(id) {
                return;
            }
            match result {
                Ok(loaded) => {
                    if let Some(category_id) = loaded.category {
                        match crate::net::ad_api::get_category(category_id).await {
                            Ok(category) => category_name.set(Some(category.name)),
                            Err(err) => log::warn!("category {category_id} failed: {err}"),
                        }
                    }
                    ad.set(Some(loaded));
                }
                Err(err) => {
                    log::warn!("ad {id} failed: {err}");
                    error.set(Some(super::load_error_message(&err, "Ad")));
                }
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    });

    let title = move || ad.with(|ad| ad.as_ref().map_or_else(|| "Sellpoint".to_owned(), |ad| format!("{} | Sellpoint", ad.title)));

    view! {
        <Title text=title/>
        <section class="page">
            {move || {
                if let Some(message) = error.get() {
                    return view! { <p class="page__error">{message}</p> }.into_any();
                }
                match ad.get() {
                    Some(ad) => view! { <LargeAd ad=ad category_name=category_name.get()/> }.into_any(),
                    None => view! { <p class="page__loading">"Loading..."</p> }.into_any(),
                }
            }}
        </section>
    }
}
