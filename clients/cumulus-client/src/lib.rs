// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Cumulus API Client Library
//!
//! Typed access to the Cumulus cloud API: compute instances and security
//! groups, object storage buckets, managed database instances, and
//! virtual networks. Every request is signed with HTTP Signature
//! authentication (see cumulus-auth) using credentials supplied at
//! construction time; the client holds no ambient state.
//!
//! ## Usage
//!
//! ```ignore
//! use cumulus_auth::Credentials;
//! use cumulus_client::Client;
//!
//! let creds = Credentials::new("AKIDEXAMPLE", "sekrit", "us-east-1");
//! let client = Client::new("https://api.cumulus.example.com", creds);
//!
//! let listing = client.list_objects_page("my-bucket", None).await?;
//! client.delete_object("my-bucket", "old.log").await?;
//! ```

pub mod compute;
pub mod database;
pub mod error;
pub mod network;
pub mod storage;

pub use error::ClientError;

// Re-export the auth types for convenience
pub use cumulus_auth::{AuthError, Credentials};

use reqwest::Method;
use serde::de::DeserializeOwned;

use error::ApiErrorBody;

/// Session token header name for temporary credentials
const SESSION_TOKEN_HEADER: &str = "X-Cumulus-Session-Token";

/// Typed client for the Cumulus API
#[derive(Clone, Debug)]
pub struct Client {
    base_url: String,
    credentials: Credentials,
    http: reqwest::Client,
}

impl Client {
    /// Create a client for the API at `base_url` using `credentials`
    pub fn new(base_url: impl Into<String>, credentials: Credentials) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            credentials,
            http: reqwest::Client::new(),
        }
    }

    /// Credentials this client signs requests with
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Base URL this client issues requests against
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a signed request for `path` (absolute, starting with `/`)
    ///
    /// The signature covers the path only; query parameters are added by
    /// the caller on the returned builder.
    pub(crate) fn signed(
        &self,
        method: Method,
        path: &str,
    ) -> Result<reqwest::RequestBuilder, ClientError> {
        let (date, authorization) =
            cumulus_auth::sign_request(&self.credentials, method.as_str(), path)?;

        let url = format!("{}{}", self.base_url, path);
        tracing::debug!(%method, %url, "cumulus api request");

        let mut request = self
            .http
            .request(method, url)
            .header(reqwest::header::DATE, date)
            .header(reqwest::header::AUTHORIZATION, authorization);

        if let Some(token) = &self.credentials.session_token {
            request = request.header(SESSION_TOKEN_HEADER, token);
        }

        Ok(request)
    }

    /// Send a request, mapping non-success statuses to [`ClientError::Api`]
    pub(crate) async fn send(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // Best effort: the service normally returns {code, message}, but
        // proxies can hand back arbitrary bodies.
        let body = response.text().await.unwrap_or_default();
        let parsed: ApiErrorBody = serde_json::from_str(&body).unwrap_or(ApiErrorBody {
            code: "UnknownError".to_string(),
            message: body,
        });

        Err(ClientError::Api {
            status: status.as_u16(),
            code: parsed.code,
            message: parsed.message,
        })
    }

    /// Send a request and decode a JSON response body
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    /// Send a request, discarding any response body
    pub(crate) async fn send_empty(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<(), ClientError> {
        self.send(request).await?;
        Ok(())
    }
}

/// Percent-encode an object key for use as a single URL path segment
pub(crate) fn encode_key(key: &str) -> String {
    urlencoding::encode(key).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_base_url_trailing_slash_stripped() {
        let creds = Credentials::new("AKIDEXAMPLE", "sekrit", "us-east-1");
        let client = Client::new("https://api.example.com/", creds);
        assert_eq!(client.base_url(), "https://api.example.com");
    }

    #[test]
    fn test_encode_key_escapes_slashes() {
        assert_eq!(encode_key("txt/a.txt"), "txt%2Fa.txt");
        assert_eq!(encode_key("plain.log"), "plain.log");
    }
}
