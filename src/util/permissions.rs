//! Capability predicates for the current viewer.
//!
//! DESIGN
//! ======
//! Every "who may see this control" rule is a plain function of
//! `(authenticated, current user, ad)`, evaluated once per render through
//! [`AdCapabilities::compute`] instead of inline in view markup.

#[cfg(test)]
#[path = "permissions_test.rs"]
mod permissions_test;

use crate::net::types::{Ad, Id, User};

/// The viewer owns the ad. Ownership is matched on email, as the backend
/// serializer does not always include the owner id.
pub fn is_owner(user: Option<&User>, ad: &Ad) -> bool {
    match (user, ad.owner.as_ref()) {
        (Some(user), Some(owner)) => !user.email.is_empty() && owner.email.eq_ignore_ascii_case(&user.email),
        _ => false,
    }
}

pub fn is_staff(user: Option<&User>) -> bool {
    user.is_some_and(|u| u.is_staff)
}

/// Logged in, the ad has a known owner, and the viewer is someone else.
pub fn can_favorite(authenticated: bool, user: Option<&User>, ad: &Ad) -> bool {
    authenticated && user.is_some() && ad.owner.is_some() && !is_owner(user, ad)
}

/// Backend admin change-page for an ad.
pub fn admin_edit_url(admin_base_url: &str, ad_id: Id) -> String {
    format!("{}/sellpoint_ads/ad/{ad_id}/change/", admin_base_url.trim_end_matches('/'))
}

/// All viewer capabilities for one ad.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AdCapabilities {
    pub owner: bool,
    pub staff: bool,
    pub can_favorite: bool,
}

impl AdCapabilities {
    pub fn compute(authenticated: bool, user: Option<&User>, ad: &Ad) -> Self {
        Self {
            owner: is_owner(user, ad),
            staff: is_staff(user),
            can_favorite: can_favorite(authenticated, user, ad),
        }
    }
}
