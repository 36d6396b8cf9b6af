// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Error types for cumulus-auth

use thiserror::Error;

/// Errors that can occur while resolving credentials or signing requests
#[derive(Error, Debug)]
pub enum AuthError {
    /// A required credential field is missing or empty
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error during HMAC signing
    #[error("Signing error: {0}")]
    SigningError(String),
}
