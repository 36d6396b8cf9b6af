// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Test helpers for cumulus-cli integration tests

// Allow unused code - these helpers are infrastructure for integration tests
// Allow deprecated - cargo_bin is standard for CLI testing
#![allow(dead_code, deprecated)]

use assert_cmd::Command;

/// Get a Command for running the cumulus CLI binary
pub fn cumulus_cmd() -> Command {
    Command::cargo_bin("cumulus").expect("Failed to find cumulus binary")
}

/// Dummy connection environment pointing at an unroutable endpoint
///
/// Lets commands get past credential resolution in tests that must fail
/// before (or without) any network call.
pub fn dummy_env() -> Vec<(&'static str, &'static str)> {
    vec![
        ("CUMULUS_URL", "http://127.0.0.1:1"),
        ("CUMULUS_ACCESS_KEY_ID", "AKIDTEST"),
        ("CUMULUS_SECRET_ACCESS_KEY", "test-secret"),
        ("CUMULUS_REGION", "test-1"),
    ]
}

/// Get a cumulus Command with the dummy environment applied
pub fn cumulus_cmd_with_dummy_env() -> Command {
    let mut cmd = cumulus_cmd();
    for (key, value) in dummy_env() {
        cmd.env(key, value);
    }
    cmd.env_remove("CUMULUS_PROFILE");
    cmd
}
