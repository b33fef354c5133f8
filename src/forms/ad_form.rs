//! Shared create/edit form for ads.

#[cfg(test)]
#[path = "ad_form_test.rs"]
mod ad_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use super::submit::FormDraft;
use super::validation::{FieldError, FieldRules, FormPhase, Pattern, Validator, Violation};
use super::{FormBanner, TextAreaField, TextField, field_feedback};
use crate::net::types::{Ad, AdImage, AdPayload, Category, Id};
use crate::state::listing::CategoryFilter;

pub const TITLE: FieldRules = FieldRules::required().max(100);
pub const PRICE: FieldRules = FieldRules::required().pattern(Pattern::Digits);
pub const DESCRIPTION: FieldRules = FieldRules::required().max(512);
/// Largest price the backend column accepts.
pub const MAX_PRICE: u32 = 32_767;

/// Parse a digits-only price, `None` when above [`MAX_PRICE`].
pub fn parse_price(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|price| *price <= MAX_PRICE)
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdDraft {
    pub title: String,
    pub price: String,
    pub description: String,
    pub category: Option<Id>,
    /// `Some` only when editing.
    pub is_sold: Option<bool>,
}

impl AdDraft {
    pub fn from_ad(ad: &Ad) -> Self {
        Self {
            title: ad.title.clone(),
            price: ad.price.to_string(),
            description: ad.description.clone(),
            category: ad.category,
            is_sold: Some(ad.is_sold),
        }
    }
}

impl FormDraft for AdDraft {
    type Payload = AdPayload;

    fn validate(&self) -> Vec<FieldError> {
        let price = self.price.trim();
        let price_ok = price.is_empty() || !price.chars().all(|c| c.is_ascii_digit()) || parse_price(price).is_some();
        Validator::new()
            .field("title", self.title.trim(), TITLE)
            .field("price", price, PRICE)
            .ensure("price", price_ok, Violation::OutOfRange)
            .field("description", self.description.trim(), DESCRIPTION)
            .finish()
    }

    fn payload(&self) -> AdPayload {
        AdPayload {
            title: self.title.trim().to_owned(),
            price: parse_price(&self.price).unwrap_or_default(),
            description: self.description.trim().to_owned(),
            category: self.category,
            is_sold: self.is_sold,
        }
    }
}

/// Create a new ad when `existing` is `None`, otherwise edit it.
#[component]
pub fn AdForm(#[prop(optional)] existing: Option<Ad>) -> impl IntoView {
    let navigate = use_navigate();
    let initial = existing.as_ref().map(AdDraft::from_ad).unwrap_or_default();
    let editing = existing.as_ref().map(|ad| ad.id);

    let title = RwSignal::new(initial.title);
    let price = RwSignal::new(initial.price);
    let description = RwSignal::new(initial.description);
    let category = RwSignal::new(initial.category);
    let is_sold = RwSignal::new(initial.is_sold);
    let images = RwSignal::new(existing.map(|ad| ad.images).unwrap_or_default());
    let categories = RwSignal::new(Vec::<Category>::new());
    let file_names = RwSignal::new(Vec::<String>::new());
    let phase = RwSignal::new(FormPhase::Untouched);
    let banner = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    #[cfg(feature = "csr")]
    let files = StoredValue::new_local(Vec::<web_sys::File>::new());

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        match crate::net::ad_api::list_categories().await {
            Ok(list) => categories.set(list),
            Err(err) => log::warn!("category list failed: {err}"),
        }
    });

    let draft = move || AdDraft {
        title: title.get(),
        price: price.get(),
        description: description.get(),
        category: category.get(),
        is_sold: is_sold.get(),
    };
    let errors = Memo::new(move |_| draft().validate());

    #[cfg(feature = "csr")]
    let on_files = move |ev: leptos::ev::Event| {
        let input: web_sys::HtmlInputElement = event_target(&ev);
        let picked: Vec<web_sys::File> = input
            .files()
            .map(|list| (0..list.length()).filter_map(|i| list.get(i)).collect())
            .unwrap_or_default();
        file_names.set(picked.iter().map(web_sys::File::name).collect());
        files.set_value(picked);
    };
    #[cfg(not(feature = "csr"))]
    let on_files = move |_ev: leptos::ev::Event| file_names.set(Vec::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        phase.set(FormPhase::Validated);
        if busy.get_untracked() {
            return;
        }
        let current = draft();
        busy.set(true);
        banner.set(None);

        #[cfg(feature = "csr")]
        {
            let navigate = navigate.clone();
            let pending = files.get_value();
            leptos::task::spawn_local(async move {
                let result = super::submit::submit(&current, |payload| async move {
                    match editing {
                        Some(id) => crate::net::ad_api::update_ad(id, &payload).await,
                        None => crate::net::ad_api::create_ad(&payload).await,
                    }
                })
                .await;
                match result {
                    Ok(ad) => {
                        for file in &pending {
                            if let Err(err) = crate::net::ad_api::add_image(ad.id, file, None).await {
                                log::warn!("image upload for ad {} failed: {err}", ad.id);
                            }
                        }
                        busy.set(false);
                        navigate(&format!("/ad/{}", ad.id), leptos_router::NavigateOptions::default());
                    }
                    Err(err) => {
                        busy.set(false);
                        banner.set(err.banner());
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (current, &navigate, editing);
            busy.set(false);
        }
    };

    let remove_image = move |image: AdImage| {
        let Some(image_id) = image.id else {
            return;
        };
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            match crate::net::ad_api::delete_image(image_id).await {
                Ok(()) => images.update(|list| list.retain(|i| i.id != Some(image_id))),
                Err(err) => banner.set(Some(err.user_message())),
            }
        });
        #[cfg(not(feature = "csr"))]
        images.update(|list| list.retain(|i| i.id != Some(image_id)));
    };

    view! {
        <form class="ad-form" novalidate=true on:submit=on_submit>
            <h1>{if editing.is_some() { "Edit ad" } else { "New ad" }}</h1>
            <FormBanner message=banner/>
            <TextField label="Title" value=title autofocus=true feedback=field_feedback(phase, errors, "title")/>
            <TextField label="Price (NOK)" input_type="number" value=price feedback=field_feedback(phase, errors, "price")/>
            <TextAreaField label="Description" value=description feedback=field_feedback(phase, errors, "description")/>
            <label class="form-field">
                <span class="form-field__label">"Category"</span>
                <select
                    class="form-field__input"
                    prop:value=move || {
                        category.get().map_or(CategoryFilter::All, CategoryFilter::Category).select_value()
                    }
                    on:change=move |ev| {
                        let picked = match CategoryFilter::from_select_value(&event_target_value(&ev)) {
                            CategoryFilter::All => None,
                            CategoryFilter::Category(id) => Some(id),
                        };
                        category.set(picked);
                    }
                >
                    <option value="">"No category"</option>
                    <For each=move || categories.get() key=|c| c.id let:c>
                        <option value=c.id.to_string()>{c.name}</option>
                    </For>
                </select>
            </label>
            {move || {
                is_sold
                    .get()
                    .map(|sold| {
                        view! {
                            <label class="form-check">
                                <input
                                    type="checkbox"
                                    prop:checked=sold
                                    on:change=move |ev| is_sold.set(Some(event_target_checked(&ev)))
                                />
                                "Sold"
                            </label>
                        }
                    })
            }}
            <Show when=move || editing.is_some() && !images.with(Vec::is_empty)>
                <ul class="ad-form__images">
                    <For each=move || images.get() key=|i| (i.id, i.url.clone()) let:image>
                        <li>
                            <img src=image.url.clone() alt=image.description.clone().unwrap_or_default()/>
                            <button
                                class="btn btn--ghost"
                                type="button"
                                on:click=move |_| remove_image(image.clone())
                            >
                                "Remove"
                            </button>
                        </li>
                    </For>
                </ul>
            </Show>
            <Show when=move || editing.is_none()>
                <label class="form-field">
                    <span class="form-field__label">"Images"</span>
                    <input class="form-field__input" type="file" accept="image/*" multiple=true on:change=on_files/>
                    <span class="form-field__hint">
                        {move || file_names.with(|names| names.join(", "))}
                    </span>
                </label>
            </Show>
            <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                {if editing.is_some() { "Save" } else { "Publish" }}
            </button>
        </form>
    }
}
