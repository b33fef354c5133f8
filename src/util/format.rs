//! Display formatting for ad cards and the detail view.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::{Ad, AdImage};

pub const PLACEHOLDER_IMAGE_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/6/65/No-Image-Placeholder.svg";

/// Prices are whole kroner rendered as `"100,-"`.
pub fn price_label(price: u32) -> String {
    format!("{price},-")
}

/// Distance hint for non-owners; `None` when unknown or zero.
pub fn distance_label(distance: Option<f64>) -> Option<String> {
    let distance = distance.filter(|d| d.is_finite())?;
    if distance <= 0.0 {
        None
    } else if distance <= 1.0 {
        Some("< 1 km away".to_owned())
    } else {
        Some(format!("~{distance} km away"))
    }
}

/// One entry in the detail-view image carousel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CarouselSlide {
    Image(AdImage),
    Placeholder,
}

/// Thumbnail first, then every other image once; a placeholder when empty.
pub fn carousel_slides(ad: &Ad) -> Vec<CarouselSlide> {
    if ad.images.is_empty() {
        return vec![CarouselSlide::Placeholder];
    }
    let thumbnail_url = ad.thumbnail.as_ref().map(|t| t.url.as_str());
    let mut slides = Vec::with_capacity(ad.images.len() + 1);
    if let Some(thumbnail) = &ad.thumbnail {
        slides.push(CarouselSlide::Image(thumbnail.clone()));
    }
    slides.extend(
        ad.images
            .iter()
            .filter(|img| Some(img.url.as_str()) != thumbnail_url)
            .cloned()
            .map(CarouselSlide::Image),
    );
    slides
}

/// Image shown on list cards: thumbnail, else first image, else placeholder.
pub fn card_image_url(ad: &Ad) -> String {
    ad.thumbnail
        .as_ref()
        .or_else(|| ad.images.first())
        .map_or_else(|| PLACEHOLDER_IMAGE_URL.to_owned(), |img| img.url.clone())
}
