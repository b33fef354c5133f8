//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page reads route params, loads what it needs through `net`, and
//! delegates rendering to `components` and `forms`.


pub mod ad_view;
pub mod create_ad;
pub mod edit_ad;
pub mod login;
pub mod main_page;
pub mod not_found;
pub mod profile;
pub mod register;
pub mod visit_profile;

use crate::net::error::ApiError;
use crate::net::types::Id;

/// Numeric route param, `None` when missing or malformed.
pub fn parse_id_param(raw: Option<&str>) -> Option<Id> {
    raw?.trim().parse().ok()
}

/// Page-level message for a failed load; 404 reads as "<thing> not found."
pub fn load_error_message(err: &ApiError, thing: &str) -> String {
    if err.status() == Some(404) {
        format!("{thing} not found.")
    } else {
        err.user_message()
    }
}
