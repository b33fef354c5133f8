//! Owner controls on the ad detail view: edit link and delete.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::confirm_modal::ConfirmModal;
use crate::net::types::Id;

#[component]
pub fn AdModifyDialog(ad_id: Id, #[prop(into)] title: String) -> impl IntoView {
    let navigate = use_navigate();
    let confirming = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);
    let deleted = RwSignal::new(false);

    Effect::new(move || {
        if deleted.get() {
            navigate("/", NavigateOptions::default());
        }
    });

    let on_confirm = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::net::ad_api::delete_ad(ad_id).await;
            busy.set(false);
            confirming.set(false);
            match result {
                Ok(()) => {
                    log::info!("ad {ad_id} deleted");
                    deleted.set(true);
                }
                Err(err) => error.set(Some(err.user_message())),
            }
        });
        #[cfg(not(feature = "csr"))]
        {
            busy.set(false);
            confirming.set(false);
        }
    });
    let on_cancel = Callback::new(move |()| confirming.set(false));
    let body = format!("Delete \"{title}\"? This cannot be undone.");

    view! {
        <div class="ad-modify">
            <a class="btn" href=format!("/ad/{ad_id}/edit")>"Edit"</a>
            <button class="btn btn--danger" on:click=move |_| confirming.set(true)>"Delete"</button>
            {move || error.get().map(|msg| view! { <p class="form-banner form-banner--error">{msg}</p> })}
            <Show when=move || confirming.get()>
                <ConfirmModal
                    title="Delete ad"
                    body=body.clone()
                    confirm_label="Delete"
                    on_confirm=on_confirm
                    on_cancel=on_cancel
                />
            </Show>
        </div>
    }
}
