//! Shared request plumbing for the REST clients.
//!
//! Browser builds (`csr`) issue real requests through `gloo-net`, attaching
//! the stored bearer token when one exists. Native builds return
//! [`ApiError::Unavailable`] so the pure parts of the crate stay testable.
//!
//! Each helper issues exactly one request. Non-2xx responses become
//! [`ApiError::Status`] carrying the decoded body; nothing is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Join the configured API root with a relative endpoint path.
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(any(test, feature = "csr"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

#[cfg(any(test, feature = "csr"))]
impl Method {
    fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

#[cfg(feature = "csr")]
mod browser {
    use gloo_net::http::{Request, RequestBuilder, Response};
    use serde::de::DeserializeOwned;

    use super::{Method, endpoint_url};
    use crate::config;
    use crate::net::error::ApiError;
    use crate::util::credentials;

    pub(super) fn request(method: Method, path: &str) -> RequestBuilder {
        let url = endpoint_url(&config::current().api_base_url, path);
        let builder = match method {
            Method::Get => Request::get(&url),
            Method::Post => Request::post(&url),
            Method::Put => Request::put(&url),
            Method::Delete => Request::delete(&url),
        };
        match credentials::access_token() {
            Some(token) => builder.header("Authorization", &credentials::bearer(&token)),
            None => builder,
        }
    }

    pub(super) fn transport(method: Method, path: &str, err: gloo_net::Error) -> ApiError {
        log::warn!("{} {path}: {err}", method.as_str());
        ApiError::Transport(err.to_string())
    }

    pub(super) async fn check(method: Method, path: &str, resp: Response) -> Result<Response, ApiError> {
        if resp.ok() {
            return Ok(resp);
        }
        let status = resp.status();
        let raw = resp.text().await.unwrap_or_default();
        log::warn!("{} {path} failed: {status}", method.as_str());
        Err(ApiError::from_status(status, &raw))
    }

    pub(super) async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ApiError> {
        resp.json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// `GET` a JSON record.
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    #[cfg(feature = "csr")]
    {
        let method = Method::Get;
        let resp = browser::request(method, path)
            .send()
            .await
            .map_err(|e| browser::transport(method, path, e))?;
        browser::decode(browser::check(method, path, resp).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// `POST` a JSON body and decode the JSON reply.
pub async fn post_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    send_json(path, body, true).await
}

/// `PUT` a JSON body and decode the JSON reply.
pub async fn put_json<B, T>(path: &str, body: &B) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    send_json(path, body, false).await
}

async fn send_json<B, T>(path: &str, body: &B, is_post: bool) -> Result<T, ApiError>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    #[cfg(feature = "csr")]
    {
        let method = if is_post { Method::Post } else { Method::Put };
        let resp = browser::request(method, path)
            .json(body)
            .map_err(|e| browser::transport(method, path, e))?
            .send()
            .await
            .map_err(|e| browser::transport(method, path, e))?;
        browser::decode(browser::check(method, path, resp).await?).await
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (path, body, is_post);
        Err(ApiError::Unavailable)
    }
}

/// `DELETE` a resource; any 2xx body is ignored.
pub async fn delete(path: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let method = Method::Delete;
        let resp = browser::request(method, path)
            .send()
            .await
            .map_err(|e| browser::transport(method, path, e))?;
        browser::check(method, path, resp).await?;
        Ok(())
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = path;
        Err(ApiError::Unavailable)
    }
}

/// `POST` a multipart form (image upload) and decode the JSON reply.
#[cfg(feature = "csr")]
pub async fn post_form<T: DeserializeOwned>(path: &str, form: web_sys::FormData) -> Result<T, ApiError> {
    let method = Method::Post;
    let resp = browser::request(method, path)
        .body(form)
        .map_err(|e| browser::transport(method, path, e))?
        .send()
        .await
        .map_err(|e| browser::transport(method, path, e))?;
    browser::decode(browser::check(method, path, resp).await?).await
}
