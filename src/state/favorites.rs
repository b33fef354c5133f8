//! Favorite toggle state for the ad detail view.
//!
//! The toggle functions take the endpoint call as a closure so the detail
//! view passes the real API while tests count invocations.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use std::future::Future;

use crate::net::error::ApiError;
use crate::net::types::{FavoriteAd, Id};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FavoriteStatus {
    /// Favorites not loaded yet (or nobody logged in).
    #[default]
    Unknown,
    Favorited,
    NotFavorited,
}

impl FavoriteStatus {
    /// Status of `ad_id` within one user's favorite relations.
    pub fn from_favorites(favorites: &[FavoriteAd], ad_id: Id) -> Self {
        if favorites.iter().any(|f| f.favorite_ad == ad_id) {
            Self::Favorited
        } else {
            Self::NotFavorited
        }
    }

    pub fn is_favorited(self) -> bool {
        self == Self::Favorited
    }
}

/// Load whether `user_id` has favorited `ad_id`.
///
/// Asks the per-user list first. When that fails, the global relation list
/// is filtered down to the viewer instead.
///
/// # Errors
///
/// Returns the fallback error when both lists fail.
pub async fn load_status<F, Fut, G, Gut>(user_id: Id, ad_id: Id, by_user: F, everyone: G) -> Result<FavoriteStatus, ApiError>
where
    F: FnOnce(Id) -> Fut,
    Fut: Future<Output = Result<Vec<FavoriteAd>, ApiError>>,
    G: FnOnce() -> Gut,
    Gut: Future<Output = Result<Vec<FavoriteAd>, ApiError>>,
{
    let favorites = match by_user(user_id).await {
        Ok(favorites) => favorites,
        Err(err) => {
            log::warn!("favorites for user {user_id} failed, using full list: {err}");
            let mut all = everyone().await?;
            all.retain(|f| f.user == user_id);
            all
        }
    };
    Ok(FavoriteStatus::from_favorites(&favorites, ad_id))
}

/// Create the favorite relation, then report `Favorited`.
///
/// # Errors
///
/// Returns the create error; the caller keeps its previous status.
pub async fn add_favorite<F, Fut>(user_id: Id, ad_id: Id, create: F) -> Result<FavoriteStatus, ApiError>
where
    F: FnOnce(FavoriteAd) -> Fut,
    Fut: Future<Output = Result<FavoriteAd, ApiError>>,
{
    create(FavoriteAd::new(user_id, ad_id)).await?;
    log::debug!("ad {ad_id} favorited by user {user_id}");
    Ok(FavoriteStatus::Favorited)
}

/// Delete the favorite relation, then report `NotFavorited`.
///
/// # Errors
///
/// Returns the delete error; the caller keeps its previous status.
pub async fn remove_favorite<F, Fut>(user_id: Id, ad_id: Id, delete: F) -> Result<FavoriteStatus, ApiError>
where
    F: FnOnce(FavoriteAd) -> Fut,
    Fut: Future<Output = Result<(), ApiError>>,
{
    delete(FavoriteAd::new(user_id, ad_id)).await?;
    log::debug!("ad {ad_id} unfavorited by user {user_id}");
    Ok(FavoriteStatus::NotFavorited)
}
