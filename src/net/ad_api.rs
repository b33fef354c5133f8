//! Ads, categories, images, and favorites.
//!
//! One function per backend operation. Each issues exactly one request and
//! returns the decoded record or the unchanged [`ApiError`].

#[cfg(test)]
#[path = "ad_api_test.rs"]
mod ad_api_test;

use super::error::ApiError;
use super::http;
#[cfg(feature = "csr")]
use super::types::AdImage;
use super::types::{Ad, AdPayload, Category, FavoriteAd, Id};

pub(crate) fn ad_endpoint(id: Id) -> String {
    format!("ad/{id}/")
}

#[cfg(any(test, feature = "csr"))]
pub(crate) fn ad_image_upload_endpoint(id: Id) -> String {
    format!("ad/create/image/{id}/")
}

pub(crate) fn ad_image_endpoint(image_id: Id) -> String {
    format!("ad/image/{image_id}/")
}

pub(crate) fn category_endpoint(id: Id) -> String {
    format!("category/{id}/")
}

pub(crate) fn ads_by_category_endpoint(category_id: Id) -> String {
    format!("ad/category/{category_id}/")
}

pub(crate) fn favorites_by_user_endpoint(user_id: Id) -> String {
    format!("ad/favorite/user/{user_id}/")
}

pub(crate) fn favorite_delete_endpoint(user_id: Id, ad_id: Id) -> String {
    format!("favorite/delete/{user_id}/{ad_id}/")
}

/// Every ad, sold or not.
pub async fn list_ads() -> Result<Vec<Ad>, ApiError> {
    http::get_json("ad/list/").await
}

pub async fn list_unsold_ads() -> Result<Vec<Ad>, ApiError> {
    http::get_json("ad/list/unsold/").await
}

pub async fn get_ad(id: Id) -> Result<Ad, ApiError> {
    http::get_json(&ad_endpoint(id)).await
}

/// Create an ad owned by the logged-in user.
pub async fn create_ad(ad: &AdPayload) -> Result<Ad, ApiError> {
    http::post_json("ad/create/", ad).await
}

/// Partial update; the backend rejects non-owners with 401.
pub async fn update_ad(id: Id, ad: &AdPayload) -> Result<Ad, ApiError> {
    http::put_json(&ad_endpoint(id), ad).await
}

pub async fn delete_ad(id: Id) -> Result<(), ApiError> {
    http::delete(&ad_endpoint(id)).await
}

/// Upload one image for ad `id` as multipart (`image`, optional `description`).
#[cfg(feature = "csr")]
pub async fn add_image(id: Id, image: &web_sys::File, description: Option<&str>) -> Result<AdImage, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::Transport("FormData unavailable".to_owned()))?;
    form.append_with_blob("image", image)
        .map_err(|_| ApiError::Transport("could not attach image".to_owned()))?;
    if let Some(description) = description.filter(|d| !d.trim().is_empty()) {
        form.append_with_str("description", description)
            .map_err(|_| ApiError::Transport("could not attach description".to_owned()))?;
    }
    http::post_form(&ad_image_upload_endpoint(id), form).await
}

pub async fn delete_image(image_id: Id) -> Result<(), ApiError> {
    http::delete(&ad_image_endpoint(image_id)).await
}

/// Ads owned by the logged-in user.
pub async fn list_my_ads() -> Result<Vec<Ad>, ApiError> {
    http::get_json("ad/user/list/").await
}

pub async fn list_categories() -> Result<Vec<Category>, ApiError> {
    http::get_json("category/list/").await
}

pub async fn get_category(id: Id) -> Result<Category, ApiError> {
    http::get_json(&category_endpoint(id)).await
}

pub async fn list_ads_by_category(category_id: Id) -> Result<Vec<Ad>, ApiError> {
    http::get_json(&ads_by_category_endpoint(category_id)).await
}

/// Every favorite relation known to the backend.
pub async fn list_favorites() -> Result<Vec<FavoriteAd>, ApiError> {
    http::get_json("list/favorite").await
}

/// Favorite relations belonging to `user_id`.
pub async fn list_favorites_by_user(user_id: Id) -> Result<Vec<FavoriteAd>, ApiError> {
    http::get_json(&favorites_by_user_endpoint(user_id)).await
}

/// Full ad records the logged-in user has favorited.
pub async fn list_my_favorite_ads() -> Result<Vec<Ad>, ApiError> {
    http::get_json("ad/favorite/list/").await
}

pub async fn create_favorite(favorite: FavoriteAd) -> Result<FavoriteAd, ApiError> {
    http::post_json("favorite/create/", &favorite).await
}

pub async fn delete_favorite(favorite: FavoriteAd) -> Result<(), ApiError> {
    http::delete(&favorite_delete_endpoint(favorite.user, favorite.favorite_ad)).await
}
