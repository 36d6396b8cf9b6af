// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! HTTP Signature generation for Cumulus API authentication
//!
//! Implements the HTTP Signature scheme used by the Cumulus API:
//!
//! ```text
//! Authorization: Signature keyId=":access_key_id/:region",algorithm="hmac-sha256",signature=":base64:"
//! ```
//!
//! The signature is computed over the concatenation of:
//! - `date: <RFC2822 date header value>`
//! - `\n`
//! - `(request-target): <method lowercase> <path>`
//!
//! keyed with the secret access key.

use base64::Engine;
use chrono::Utc;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::Credentials;
use crate::error::AuthError;

type HmacSha256 = Hmac<Sha256>;

/// Build the canonical signing string for a request
pub fn signing_string(date: &str, method: &str, path: &str) -> String {
    format!(
        "date: {}\n(request-target): {} {}",
        date,
        method.to_lowercase(),
        path
    )
}

/// Sign a canonical string with the secret access key
///
/// Returns the base64-encoded HMAC-SHA256 signature.
pub fn sign_string(secret_access_key: &str, payload: &str) -> Result<String, AuthError> {
    let mut mac = HmacSha256::new_from_slice(secret_access_key.as_bytes())
        .map_err(|e| AuthError::SigningError(e.to_string()))?;
    mac.update(payload.as_bytes());
    let signature = mac.finalize().into_bytes();
    Ok(base64::engine::general_purpose::STANDARD.encode(signature))
}

/// Build the Authorization header value for a signed request
pub fn authorization_header(
    credentials: &Credentials,
    date: &str,
    method: &str,
    path: &str,
) -> Result<String, AuthError> {
    let payload = signing_string(date, method, path);
    let signature = sign_string(&credentials.secret_access_key, &payload)?;
    Ok(format!(
        "Signature keyId=\"{}/{}\",algorithm=\"hmac-sha256\",signature=\"{}\"",
        credentials.access_key_id, credentials.region, signature
    ))
}

/// Sign a request, producing the `Date` and `Authorization` header values
pub fn sign_request(
    credentials: &Credentials,
    method: &str,
    path: &str,
) -> Result<(String, String), AuthError> {
    let date = Utc::now().to_rfc2822();
    let authorization = authorization_header(credentials, &date, method, path)?;
    Ok((date, authorization))
}
