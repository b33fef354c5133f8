//! Compact listing card used by every ad grid.

#[cfg(test)]
#[path = "ad_card_test.rs"]
mod ad_card_test;

use leptos::prelude::*;

use crate::net::types::{Ad, Id, User};
use crate::util::format::{card_image_url, distance_label, price_label};
use crate::util::permissions::is_owner;

/// Everything a card shows, derived once from an ad and the viewer.
#[derive(Clone, Debug, PartialEq)]
pub struct AdCardModel {
    pub id: Id,
    pub href: String,
    pub title: String,
    pub price: String,
    pub image_url: String,
    /// Hidden for the ad's owner.
    pub distance: Option<String>,
    pub sold: bool,
}

impl AdCardModel {
    pub fn new(ad: &Ad, viewer: Option<&User>) -> Self {
        let distance = if is_owner(viewer, ad) { None } else { distance_label(ad.distance) };
        Self {
            id: ad.id,
            href: format!("/ad/{}", ad.id),
            title: ad.title.clone(),
            price: price_label(ad.price),
            image_url: card_image_url(ad),
            distance,
            sold: ad.is_sold,
        }
    }
}

#[component]
pub fn AdCard(model: AdCardModel) -> impl IntoView {
    let AdCardModel { href, title, price, image_url, distance, sold, .. } = model;
    let alt = title.clone();

    view! {
        <a class="ad-card" class:ad-card--sold=sold href=href>
            <img class="ad-card__image" src=image_url alt=alt loading="lazy"/>
            <span class="ad-card__body">
                <span class="ad-card__title">{title}</span>
                <span class="ad-card__price">{price}</span>
                {distance.map(|d| view! { <span class="ad-card__distance">{d}</span> })}
                {sold.then(|| view! { <span class="ad-card__badge">"Sold"</span> })}
            </span>
        </a>
    }
}
