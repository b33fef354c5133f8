//! Records exchanged with the sellpoint REST backend.
//!
//! DESIGN
//! ======
//! These types mirror the backend serializers field-for-field so serde stays
//! lossless. Fields the backend may omit carry `#[serde(default)]`; the client
//! enforces nothing here beyond shape. Form validation lives in `forms`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Backend primary key.
pub type Id = i64;

/// A postal address attached to a user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub street_address: String,
    pub postal_code: String,
    pub city: String,
}

/// A registered user as returned by `user/self/` and embedded as ad owner.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub is_staff: bool,
}

impl User {
    /// "First Last", trimmed when either part is blank.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_owned()
    }
}

/// An uploaded ad image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdImage {
    #[serde(default)]
    pub id: Option<Id>,
    pub url: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// A classified listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ad {
    pub id: Id,
    pub title: String,
    pub price: u32,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<Id>,
    #[serde(default)]
    pub is_sold: bool,
    #[serde(default)]
    pub thumbnail: Option<AdImage>,
    #[serde(default)]
    pub images: Vec<AdImage>,
    #[serde(default)]
    pub owner: Option<User>,
    /// Kilometres from the viewer's address, computed by the backend.
    #[serde(default)]
    pub distance: Option<f64>,
}

/// Ad category used for filtering and badges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Id,
    pub name: String,
}

/// A (user, ad) bookmark.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FavoriteAd {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Id>,
    pub user: Id,
    pub favorite_ad: Id,
}

impl FavoriteAd {
    pub fn new(user: Id, favorite_ad: Id) -> Self {
        Self { id: None, user, favorite_ad }
    }
}

/// Body for creating or editing an ad.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AdPayload {
    pub title: String,
    pub price: u32,
    pub description: String,
    pub category: Option<Id>,
    /// Only sent when editing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_sold: Option<bool>,
}

/// Login credentials for `user/token/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// JWT pair issued by the backend.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    pub access: String,
    pub refresh: String,
}

/// Body for `user/register/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub password: String,
    pub password2: String,
    pub address: Address,
}

/// Body for `PUT user/self/`; `password` confirms the edit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProfileUpdate {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
}

/// Body for `user/password/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PasswordChange {
    pub old_password: String,
    pub new_password: String,
}

/// Envelope returned by register and self-edit.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserEnvelope {
    pub user: User,
    #[serde(default)]
    pub message: Option<String>,
}
