//! Public seller profile (`/visit-profile/:id`).

#[cfg(test)]
#[path = "visit_profile_test.rs"]
mod visit_profile_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use super::parse_id_param;
use crate::components::ad_list::AdList;
use crate::net::types::{Ad, Id, User};

/// The subset of `ads` whose owner is `user_id`.
pub fn ads_owned_by(ads: Vec<Ad>, user_id: Id) -> Vec<Ad> {
    ads.into_iter()
        .filter(|ad| ad.owner.as_ref().and_then(|o| o.id) == Some(user_id))
        .collect()
}

#[component]
pub fn VisitProfilePage() -> impl IntoView {
    let params = use_params_map();
    let user_id = Memo::new(move |_| parse_id_param(params.read().get("id").as_deref()));
    let user = RwSignal::new(None::<User>);
    let ads = RwSignal::new(Vec::<Ad>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(id) = user_id.get() else {
            error.set(Some("User not found.".to_owned()));
            return;
        };
        user.set(None);
        ads.set(Vec::new());
        error.set(None);
        loading.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::user_api::get_user(id).await {
                Ok(found) => user.set(Some(found)),
                Err(err) => {
                    error.set(Some(super::load_error_message(&err, "User")));
                    loading.set(false);
                    return;
                }
            }
            match crate::net::ad_api::list_ads().await {
                Ok(list) => ads.set(ads_owned_by(list, id)),
                Err(err) => log::warn!("ads for user {id} failed: {err}"),
            }
            loading.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = id;
            loading.set(false);
        }
    });

    let name = move || user.with(|u| u.as_ref().map(User::full_name).unwrap_or_default());

    view! {
        <Title text=move || format!("{} | Sellpoint", name())/>
        <section class="page profile">
            {move || {
                if let Some(message) = error.get() {
                    return view! { <p class="page__error">{message}</p> }.into_any();
                }
                view! {
                    <h1>{name}</h1>
                    {move || {
                        user.with(|u| {
                            u.as_ref()
                                .and_then(|u| u.address.as_ref())
                                .map(|a| view! { <p class="profile__contact">{a.city.clone()}</p> })
                        })
                    }}
                    <AdList ads=ads loading=loading empty_text="This seller has no ads."/>
                }
                    .into_any()
            }}
        </section>
    }
}
