// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Basic CLI tests for cumulus-dbadm

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

fn dbadm_cmd() -> Command {
    Command::cargo_bin("cumulus-dbadm").expect("Failed to find cumulus-dbadm binary")
}

#[test]
fn test_dbadm_help() {
    dbadm_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--status"))
        .stdout(predicate::str::contains("INSTANCE_ID"));
}

#[test]
fn test_dbadm_rejects_unknown_status() {
    dbadm_cmd()
        .env("CUMULUS_URL", "http://127.0.0.1:1")
        .args(["db-1", "--status", "hibernate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn test_dbadm_requires_status() {
    dbadm_cmd()
        .env("CUMULUS_URL", "http://127.0.0.1:1")
        .arg("db-1")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--status"));
}

#[test]
fn test_dbadm_reports_missing_credentials() {
    dbadm_cmd()
        .env("CUMULUS_URL", "http://127.0.0.1:1")
        .env_remove("CUMULUS_ACCESS_KEY_ID")
        .args(["db-1", "--status", "stop"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("CUMULUS_ACCESS_KEY_ID"));
}
