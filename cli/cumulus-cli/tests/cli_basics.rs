// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Basic CLI tests - help, version, subcommand wiring

mod common;

use common::cumulus_cmd;
use predicates::prelude::*;

#[test]
fn test_cumulus_version() {
    cumulus_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("cumulus"));
}

#[test]
fn test_cumulus_help() {
    cumulus_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("storage"))
        .stdout(predicate::str::contains("compute"))
        .stdout(predicate::str::contains("database"))
        .stdout(predicate::str::contains("network"));
}

#[test]
fn test_storage_help() {
    cumulus_cmd()
        .args(["storage", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("organize"))
        .stdout(predicate::str::contains("upload-file"));
}

#[test]
fn test_storage_organize_help() {
    cumulus_cmd()
        .args(["storage", "organize", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--bucket"));
}

#[test]
fn test_compute_help() {
    cumulus_cmd()
        .args(["compute", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("launch-instance"))
        .stdout(predicate::str::contains("ssh-my-ip"));
}

#[test]
fn test_database_help() {
    cumulus_cmd()
        .args(["database", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("set-password"));
}

#[test]
fn test_network_help() {
    cumulus_cmd()
        .args(["network", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("create-subnet"));
}

#[test]
fn test_profile_help() {
    cumulus_cmd()
        .args(["profile", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("list"));
}
