//! Stored JWT credentials.
//!
//! The presence of an access token is the whole of "is authenticated" on the
//! client. The backend remains the authority; a rejected token is cleared by
//! the session store, not here.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

use crate::net::types::TokenPair;
use crate::util::storage;

pub const ACCESS_TOKEN_KEY: &str = "sellpoint_access_token";
pub const REFRESH_TOKEN_KEY: &str = "sellpoint_refresh_token";

/// The stored access token, if any. Blank values count as absent.
pub fn access_token() -> Option<String> {
    storage::load(ACCESS_TOKEN_KEY).filter(|t| !t.trim().is_empty())
}

pub fn has_access_token() -> bool {
    access_token().is_some()
}

pub fn store_tokens(tokens: &TokenPair) {
    storage::save(ACCESS_TOKEN_KEY, &tokens.access);
    storage::save(REFRESH_TOKEN_KEY, &tokens.refresh);
}

pub fn clear() {
    storage::remove(ACCESS_TOKEN_KEY);
    storage::remove(REFRESH_TOKEN_KEY);
    log::info!("stored credentials cleared");
}

/// `Authorization` header value for an access token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
