//! Full ad view: image carousel, details, and viewer-specific controls.
//!
//! DESIGN
//! ======
//! Capabilities are computed once per render from the session user and the
//! ad, then drive which controls appear. The favorite toggle is the only
//! stateful control; its status is loaded from the viewer's favorites list.

#[cfg(test)]
#[path = "large_ad_test.rs"]
mod large_ad_test;

use leptos::prelude::*;

use super::ad_modify_dialog::AdModifyDialog;
use super::confirm_modal::ConfirmModal;
use super::toast::{Toast, ToastState};
#[cfg(feature = "csr")]
use super::toast::show_toast;
use crate::config;
use crate::net::types::{Ad, Id, User};
use crate::state::favorites::FavoriteStatus;
use crate::state::session::use_session;
use crate::util::format::{CarouselSlide, PLACEHOLDER_IMAGE_URL, carousel_slides, distance_label, price_label};
use crate::util::permissions::{AdCapabilities, admin_edit_url};

/// Index after stepping `delta` slides, wrapping at both ends.
pub fn step_slide(current: usize, len: usize, delta: isize) -> usize {
    if len == 0 {
        return 0;
    }
    let len_i = isize::try_from(len).unwrap_or(isize::MAX);
    let current_i = isize::try_from(current % len).unwrap_or(0);
    usize::try_from((current_i + delta).rem_euclid(len_i)).unwrap_or(0)
}

fn slide_source(slide: &CarouselSlide) -> (String, String) {
    match slide {
        CarouselSlide::Image(image) => (image.url.clone(), image.description.clone().unwrap_or_default()),
        CarouselSlide::Placeholder => (PLACEHOLDER_IMAGE_URL.to_owned(), "No image".to_owned()),
    }
}

/// How to reach the seller, with blank fields dropped.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SellerContact {
    pub name: String,
    pub profile_href: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

impl SellerContact {
    pub fn from_owner(owner: &User) -> Self {
        let email = non_blank(&owner.email);
        let name = owner.full_name();
        let name = if name.is_empty() { email.clone().unwrap_or_default() } else { name };
        Self {
            name,
            profile_href: owner.id.map(|id| format!("/visit-profile/{id}")),
            phone: owner.phone_number.as_deref().and_then(non_blank),
            email,
        }
    }

    pub fn mailto(&self) -> Option<String> {
        self.email.as_ref().map(|email| format!("mailto:{email}"))
    }
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

#[component]
fn Carousel(slides: Vec<CarouselSlide>) -> impl IntoView {
    let len = slides.len();
    let slides = StoredValue::new(slides);
    let index = RwSignal::new(0_usize);
    let current = move || slides.with_value(|s| s.get(index.get()).map(slide_source).unwrap_or_default());

    view! {
        <div class="carousel">
            <img class="carousel__image" src=move || current().0 alt=move || current().1/>
            <Show when=move || { len > 1 }>
                <button
                    class="carousel__nav carousel__nav--prev"
                    aria-label="Previous image"
                    on:click=move |_| index.update(|i| *i = step_slide(*i, len, -1))
                >
                    "‹"
                </button>
                <button
                    class="carousel__nav carousel__nav--next"
                    aria-label="Next image"
                    on:click=move |_| index.update(|i| *i = step_slide(*i, len, 1))
                >
                    "›"
                </button>
                <span class="carousel__counter">{move || format!("{} / {len}", index.get() + 1)}</span>
            </Show>
        </div>
    }
}

#[component]
fn FavoriteToggle(ad_id: Id, user_id: Id) -> impl IntoView {
    let status = RwSignal::new(FavoriteStatus::Unknown);
    let confirming = RwSignal::new(false);
    let toast = RwSignal::new(ToastState::default());
    let busy = RwSignal::new(false);
    let toast_ms = config::current().toast_ms;
    #[cfg(not(feature = "csr"))]
    let _ = (user_id, ad_id, toast_ms);

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        let loaded = crate::state::favorites::load_status(
            user_id,
            ad_id,
            crate::net::ad_api::list_favorites_by_user,
            crate::net::ad_api::list_favorites,
        )
        .await;
        match loaded {
            Ok(next) => status.set(next),
            Err(err) => log::warn!("favorite status for ad {ad_id} failed: {err}"),
        }
    });

    let on_add = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::state::favorites::add_favorite(user_id, ad_id, crate::net::ad_api::create_favorite).await;
            busy.set(false);
            match result {
                Ok(next) => {
                    status.set(next);
                    show_toast(toast, "Added to favorites", toast_ms);
                }
                Err(err) => show_toast(toast, err.user_message(), toast_ms),
            }
        });
        #[cfg(not(feature = "csr"))]
        busy.set(false);
    };

    let on_confirm_remove = Callback::new(move |()| {
        confirming.set(false);
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            let result = crate::state::favorites::remove_favorite(user_id, ad_id, crate::net::ad_api::delete_favorite).await;
            busy.set(false);
            match result {
                Ok(next) => {
                    status.set(next);
                    show_toast(toast, "Removed from favorites", toast_ms);
                }
                Err(err) => show_toast(toast, err.user_message(), toast_ms),
            }
        });
        #[cfg(not(feature = "csr"))]
        busy.set(false);
    });
    let on_cancel_remove = Callback::new(move |()| confirming.set(false));

    view! {
        <div class="favorite-toggle">
            {move || {
                if status.get().is_favorited() {
                    view! {
                        <button
                            class="btn btn--favorite btn--favorite-on"
                            disabled=move || busy.get()
                            on:click=move |_| confirming.set(true)
                        >
                            "★ Favorited"
                        </button>
                    }
                        .into_any()
                } else {
                    view! {
                        <button
                            class="btn btn--favorite"
                            disabled=move || busy.get() || status.get() == FavoriteStatus::Unknown
                            on:click=on_add
                        >
                            "☆ Add to favorites"
                        </button>
                    }
                        .into_any()
                }
            }}
            <Show when=move || confirming.get()>
                <ConfirmModal
                    title="Remove favorite"
                    body="Remove this ad from your favorites?"
                    confirm_label="Remove"
                    on_confirm=on_confirm_remove
                    on_cancel=on_cancel_remove
                />
            </Show>
            <Toast toast=toast/>
        </div>
    }
}

#[component]
pub fn LargeAd(ad: Ad, category_name: Option<String>) -> impl IntoView {
    let session = use_session();
    let slides = carousel_slides(&ad);
    let ad = StoredValue::new(ad);

    let capabilities = Memo::new(move |_| {
        let user = session.user();
        ad.with_value(|ad| AdCapabilities::compute(session.is_authenticated(), user.as_ref(), ad))
    });
    let viewer_id = move || session.user().and_then(|u| u.id);

    let (id, title, price, description, is_sold, distance, owner) = ad.with_value(|ad| {
        (
            ad.id,
            ad.title.clone(),
            price_label(ad.price),
            ad.description.clone(),
            ad.is_sold,
            distance_label(ad.distance),
            ad.owner.clone(),
        )
    });
    let seller = owner.as_ref().map(SellerContact::from_owner);
    let admin_url = admin_edit_url(&config::current().admin_base_url, id);
    let modify_title = title.clone();

    view! {
        <article class="large-ad">
            <Carousel slides=slides/>
            <header class="large-ad__header">
                <h1 class="large-ad__title">{title}</h1>
                <span class="large-ad__price">{price}</span>
                {is_sold.then(|| view! { <span class="large-ad__badge">"Sold"</span> })}
                {category_name.map(|name| view! { <span class="large-ad__category">{name}</span> })}
            </header>
            <p class="large-ad__description">{description}</p>
            {move || {
                (!capabilities.get().owner)
                    .then(|| distance.clone())
                    .flatten()
                    .map(|d| view! { <p class="large-ad__distance">{d}</p> })
            }}
            {seller.map(|seller| {
                let mailto = seller.mailto();
                let SellerContact { name, profile_href, phone, email } = seller;
                view! {
                    <section class="large-ad__seller">
                        <p class="large-ad__owner">
                            "Seller: "
                            {match profile_href {
                                Some(href) => view! { <a href=href>{name}</a> }.into_any(),
                                None => view! { <span>{name}</span> }.into_any(),
                            }}
                        </p>
                        {phone.map(|phone| view! { <p class="large-ad__phone">"Phone: " {phone}</p> })}
                        {email.zip(mailto).map(|(email, href)| {
                            view! {
                                <p class="large-ad__email">"Email: " <a href=href>{email}</a></p>
                            }
                        })}
                    </section>
                }
            })}
            <div class="large-ad__actions">
                {move || {
                    let caps = capabilities.get();
                    let favorite = caps
                        .can_favorite
                        .then(viewer_id)
                        .flatten()
                        .map(|user_id| view! { <FavoriteToggle ad_id=id user_id=user_id/> });
                    let modify = caps
                        .owner
                        .then(|| view! { <AdModifyDialog ad_id=id title=modify_title.clone()/> });
                    let admin = caps.staff.then(|| {
                        view! {
                            <a class="btn btn--ghost" href=admin_url.clone() target="_blank" rel="noopener">
                                "Open in admin"
                            </a>
                        }
                    });
                    (favorite, modify, admin)
                }}
            </div>
        </article>
    }
}
