// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Database instance control utility
//!
//! A standalone tool for one-shot lifecycle operations on Cumulus
//! database instances. Queries the current status first and no-ops when
//! the instance is already in (or moving toward) the desired state.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use cumulus_auth::Credentials;
use cumulus_client::Client;
use cumulus_client::database::DbInstance;

#[derive(Parser)]
#[command(name = "cumulus-dbadm")]
#[command(about = "Cumulus database instance control", long_about = None)]
#[command(version)]
struct Cli {
    /// Database instance identifier
    instance_id: String,

    /// Operation to perform on the instance
    #[arg(long, value_enum)]
    status: DesiredStatus,

    /// Base URL of the Cumulus API
    #[arg(long, env = "CUMULUS_URL")]
    url: String,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum DesiredStatus {
    Stop,
    Start,
    Reboot,
}

impl DesiredStatus {
    /// Instance statuses that make this operation a no-op
    fn satisfied_by(self, status: &str) -> bool {
        match self {
            Self::Stop => matches!(status, "stopped" | "stopping"),
            Self::Start => matches!(status, "available" | "starting"),
            Self::Reboot => status == "rebooting",
        }
    }
}

/// Build credentials from CUMULUS_* environment variables
fn env_credentials() -> Result<Credentials> {
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
    Ok(credentials)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let client = Client::new(&cli.url, env_credentials()?);

    let instance = client
        .get_db_instance(&cli.instance_id)
        .await
        .with_context(|| format!("Error retrieving status for instance '{}'", cli.instance_id))?;

    if cli.status.satisfied_by(&instance.status) {
        println!(
            "Instance '{}' is already '{}'; nothing to do.",
            cli.instance_id, instance.status
        );
        return Ok(());
    }

    let updated: DbInstance = match cli.status {
        DesiredStatus::Stop => {
            let updated = client
                .stop_db_instance(&cli.instance_id)
                .await
                .with_context(|| format!("Error stopping instance '{}'", cli.instance_id))?;
            println!("Instance '{}' is stopping...", cli.instance_id);
            updated
        }
        DesiredStatus::Start => {
            let updated = client
                .start_db_instance(&cli.instance_id)
                .await
                .with_context(|| format!("Error starting instance '{}'", cli.instance_id))?;
            println!("Instance '{}' is starting...", cli.instance_id);
            updated
        }
        DesiredStatus::Reboot => {
            let updated = client
                .reboot_db_instance(&cli.instance_id)
                .await
                .with_context(|| format!("Error rebooting instance '{}'", cli.instance_id))?;
            println!("Instance '{}' is rebooting...", cli.instance_id);
            updated
        }
    };

    println!("Status: {}", updated.status);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_noop_statuses() {
        assert!(DesiredStatus::Stop.satisfied_by("stopped"));
        assert!(DesiredStatus::Stop.satisfied_by("stopping"));
        assert!(!DesiredStatus::Stop.satisfied_by("available"));
    }

    #[test]
    fn test_start_noop_statuses() {
        assert!(DesiredStatus::Start.satisfied_by("available"));
        assert!(DesiredStatus::Start.satisfied_by("starting"));
        assert!(!DesiredStatus::Start.satisfied_by("stopped"));
    }

    #[test]
    fn test_reboot_proceeds_unless_already_rebooting() {
        assert!(DesiredStatus::Reboot.satisfied_by("rebooting"));
        assert!(!DesiredStatus::Reboot.satisfied_by("available"));
    }
}
