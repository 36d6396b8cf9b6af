// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Input validation tests - failures that must happen before any network call

mod common;

use common::{cumulus_cmd, cumulus_cmd_with_dummy_env};
use predicates::prelude::*;

#[test]
fn test_short_password_rejected_client_side() {
    // The dummy endpoint is unroutable, so this can only succeed in
    // failing fast if the length check runs before the request is made.
    cumulus_cmd_with_dummy_env()
        .args(["database", "set-password", "abc", "--instance-id", "db-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 4 characters"));
}

#[test]
fn test_organize_requires_bucket() {
    cumulus_cmd()
        .args(["storage", "organize"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--bucket"));
}

#[test]
fn test_set_password_requires_instance_id() {
    cumulus_cmd()
        .args(["database", "set-password", "goodpass"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--instance-id"));
}

#[test]
fn test_create_subnet_requires_vpc() {
    cumulus_cmd()
        .args(["network", "create-subnet", "10.0.1.0/24"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--vpc"));
}

#[test]
fn test_missing_profile_reported() {
    cumulus_cmd()
        .env_remove("CUMULUS_URL")
        .env("CUMULUS_PROFILE", "no-such-profile-xyz")
        .args(["storage", "organize", "--bucket", "b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no-such-profile-xyz"));
}

#[test]
fn test_upload_missing_file_reported() {
    cumulus_cmd_with_dummy_env()
        .args([
            "storage",
            "upload-file",
            "--bucket",
            "b",
            "/no/such/file.bin",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}
