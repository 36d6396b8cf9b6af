// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Configuration file locations

use std::path::PathBuf;

/// Base configuration directory (`~/.config/cumulus` on most platforms)
pub fn config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cumulus")
}

/// Path of the top-level config file
pub fn config_file() -> PathBuf {
    config_dir().join("config.json")
}

/// Directory holding profile files
pub fn profiles_dir() -> PathBuf {
    config_dir().join("profiles.d")
}

/// Path of a named profile file
pub fn profile_path(name: &str) -> PathBuf {
    profiles_dir().join(format!("{}.json", name))
}

/// Create the config directories if they do not exist
pub fn ensure_config_dirs() -> anyhow::Result<()> {
    std::fs::create_dir_all(profiles_dir())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_path() {
        let path = profile_path("default");
        assert!(path.ends_with("profiles.d/default.json"));
    }
}
