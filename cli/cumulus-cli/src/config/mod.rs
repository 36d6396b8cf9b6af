// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration management
//!
//! Credentials are resolved into an explicit [`Credentials`] value that is
//! passed to the client. Nothing here mutates process-wide state.

pub mod paths;
pub mod profile;

pub use profile::{Config, Profile};

use anyhow::Result;
use cumulus_auth::Credentials;

/// Fully resolved connection settings
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    /// API base URL
    pub url: String,

    /// Signing credentials
    pub credentials: Credentials,
}

/// Build credentials from `CUMULUS_*` environment variables
///
/// Requires CUMULUS_URL, CUMULUS_ACCESS_KEY_ID, CUMULUS_SECRET_ACCESS_KEY
/// and CUMULUS_REGION; CUMULUS_SESSION_TOKEN is optional.
pub fn env_config() -> Result<ResolvedConfig> {
    let url = std::env::var("CUMULUS_URL")
        .map_err(|_| anyhow::anyhow!("CUMULUS_URL must be set"))?;
    let access_key_id = std::env::var("CUMULUS_ACCESS_KEY_ID")
        .map_err(|_| anyhow::anyhow!("CUMULUS_ACCESS_KEY_ID must be set"))?;
    let secret_access_key = std::env::var("CUMULUS_SECRET_ACCESS_KEY")
        .map_err(|_| anyhow::anyhow!("CUMULUS_SECRET_ACCESS_KEY must be set"))?;
    let region = std::env::var("CUMULUS_REGION")
        .map_err(|_| anyhow::anyhow!("CUMULUS_REGION must be set"))?;

    let mut credentials = Credentials::new(access_key_id, secret_access_key, region);
    if let Ok(token) = std::env::var("CUMULUS_SESSION_TOKEN") {
        credentials = credentials.with_session_token(token);
    }

    Ok(ResolvedConfig { url, credentials })
}

/// Resolve connection settings
///
/// Priority:
/// 1. --profile argument (or CUMULUS_PROFILE via clap's env support)
/// 2. CUMULUS_URL + credential environment variables
/// 3. Current profile from config.json
///
/// CLI `--url` / `--region` overrides are applied on top of whichever
/// source won.
pub fn resolve(
    cli_profile: Option<&str>,
    url_override: Option<&str>,
    region_override: Option<&str>,
) -> Result<ResolvedConfig> {
    let mut resolved = if let Some(name) = cli_profile {
        let profile = Profile::load(name)?;
        ResolvedConfig {
            url: profile.url,
            credentials: profile.credentials,
        }
    } else if std::env::var("CUMULUS_URL").is_ok() {
        env_config()?
    } else {
        let config = Config::load()?;
        let name = config.current_profile().ok_or_else(|| {
            anyhow::anyhow!(
                "No profile configured. Use 'cumulus profile create' or set CUMULUS_* environment variables."
            )
        })?;
        let profile = Profile::load(name)?;
        ResolvedConfig {
            url: profile.url,
            credentials: profile.credentials,
        }
    };

    if let Some(url) = url_override {
        resolved.url = url.to_string();
    }
    if let Some(region) = region_override {
        resolved.credentials.region = region.to_string();
    }

    resolved.credentials.validate()?;
    Ok(resolved)
}
