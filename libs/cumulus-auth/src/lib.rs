// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Cumulus API Authentication Library
//!
//! Credential model and HTTP Signature signing for Cumulus API requests.
//! Credentials are an explicit value threaded into whatever client issues
//! calls; this crate deliberately has no notion of ambient process-wide
//! state. Resolving credentials from the environment or a profile file is
//! the caller's job (see cumulus-cli's `config` module).
//!
//! # Authentication Flow
//!
//! 1. Build [`Credentials`] with the account's access key id, secret
//!    access key, optional session token, and region.
//! 2. For each HTTP request:
//!    a. Generate a Date header value
//!    b. Construct the signing string from date, method, and path
//!    c. HMAC-SHA256 the string with the secret access key
//!    d. Construct the Authorization header with keyId, algorithm, and
//!       signature
//!
//! # Example
//!
//! ```
//! use cumulus_auth::{Credentials, sign_request};
//!
//! let creds = Credentials::new("AKIDEXAMPLE", "sekrit", "us-east-1");
//! let (date, authorization) =
//!     sign_request(&creds, "GET", "/v1/compute/instances").unwrap();
//! assert!(authorization.starts_with("Signature keyId=\"AKIDEXAMPLE/us-east-1\""));
//! # let _ = date;
//! ```

pub mod error;
pub mod signature;

pub use error::AuthError;
pub use signature::{authorization_header, sign_request, sign_string, signing_string};

use serde::{Deserialize, Serialize};
use std::fmt;

/// API credentials for signed Cumulus requests
///
/// `Debug` redacts the secret access key and session token so clients
/// and configs holding credentials can be debug-logged safely.
#[derive(Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// Access key identifier (used in the Authorization keyId)
    #[serde(rename = "accessKeyId")]
    pub access_key_id: String,

    /// Secret access key (HMAC signing key)
    #[serde(rename = "secretAccessKey")]
    pub secret_access_key: String,

    /// Temporary session token (optional)
    #[serde(rename = "sessionToken", skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,

    /// Region the requests are scoped to
    pub region: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "<redacted>"),
            )
            .field("region", &self.region)
            .finish()
    }
}

impl Credentials {
    /// Create credentials without a session token
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token: None,
            region: region.into(),
        }
    }

    /// Attach a temporary session token
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }

    /// Validate that the required fields are non-empty
    pub fn validate(&self) -> Result<(), AuthError> {
        if self.access_key_id.is_empty() {
            return Err(AuthError::ConfigError("access key id is empty".into()));
        }
        if self.secret_access_key.is_empty() {
            return Err(AuthError::ConfigError("secret access key is empty".into()));
        }
        if self.region.is_empty() {
            return Err(AuthError::ConfigError("region is empty".into()));
        }
        Ok(())
    }
}
