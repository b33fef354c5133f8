//! Edit route (`/ad/:id/edit`); only the owner gets the form.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use super::parse_id_param;
use crate::forms::ad_form::AdForm;
use crate::net::types::Ad;
use crate::state::session::use_session;
use crate::util::permissions::is_owner;

#[component]
pub fn EditAdPage() -> impl IntoView {
    let session = use_session();
    let params = use_params_map();
    let ad_id = Memo::new(move |_| parse_id_param(params.read().get("id").as_deref()));
    let ad = RwSignal::new(None::<Ad>);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let Some(id) = ad_id.get() else {
            error.set(Some("Ad not found.".to_owned()));
            return;
        };
        ad.set(None);
        error.set(None);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::ad_api::get_ad(id).await {
                Ok(loaded) if ad_id.get_untracked() == Some(id) => ad.set(Some(loaded)),
                Ok(_) => {}
                Err(err) => error.set(Some(super::load_error_message(&err, "Ad"))),
            }
        });
        #[cfg(not(feature = "csr"))]
        let _ = id;
    });

    view! {
        <Title text="Edit ad | Sellpoint"/>
        <section class="page page--narrow">
            {move || {
                if let Some(message) = error.get() {
                    return view! { <p class="page__error">{message}</p> }.into_any();
                }
                let Some(loaded) = ad.get() else {
                    return view! { <p class="page__loading">"Loading..."</p> }.into_any();
                };
                if !is_owner(session.user().as_ref(), &loaded) {
                    return view! { <p class="page__error">"You can only edit your own ads."</p> }.into_any();
                }
                view! { <AdForm existing=loaded/> }.into_any()
            }}
        </section>
    }
}
