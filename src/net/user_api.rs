//! Authentication and user-profile endpoints.

#[cfg(test)]
#[path = "user_api_test.rs"]
mod user_api_test;

use super::error::ApiError;
use super::http;
use super::types::{Address, Credentials, Id, PasswordChange, ProfileUpdate, Registration, TokenPair, User, UserEnvelope};

pub(crate) fn public_user_endpoint(id: Id) -> String {
    format!("user/user/{id}/")
}

/// Exchange email + password for a JWT pair.
pub async fn obtain_token(credentials: &Credentials) -> Result<TokenPair, ApiError> {
    http::post_json("user/token/", credentials).await
}

pub async fn register(registration: &Registration) -> Result<User, ApiError> {
    let envelope: UserEnvelope = http::post_json("user/register/", registration).await?;
    Ok(envelope.user)
}

/// The user owning the stored credential.
pub async fn get_self_user() -> Result<User, ApiError> {
    http::get_json("user/self/").await
}

/// Edit the logged-in user; `update.password` must be the current password.
pub async fn edit_self_user(update: &ProfileUpdate) -> Result<User, ApiError> {
    let envelope: UserEnvelope = http::put_json("user/self/", update).await?;
    Ok(envelope.user)
}

pub async fn change_password(change: &PasswordChange) -> Result<(), ApiError> {
    let _: serde_json::Value = http::put_json("user/password/", change).await?;
    Ok(())
}

pub async fn update_address(address: &Address) -> Result<Address, ApiError> {
    http::put_json("user/address/", address).await
}

/// Public profile of any user.
pub async fn get_user(id: Id) -> Result<User, ApiError> {
    http::get_json(&public_user_endpoint(id)).await
}
