// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Database commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use cumulus_client::Client;

/// Shortest master password the service accepts; enforced here so bad
/// input never reaches the network.
const MIN_PASSWORD_LEN: usize = 4;

#[derive(Subcommand, Clone)]
pub enum DatabaseCommand {
    /// Rotate the master password of a database instance
    SetPassword(SetPasswordArgs),
}

#[derive(Args, Clone)]
pub struct SetPasswordArgs {
    /// New master password
    pub new_password: String,

    /// Database instance identifier
    #[arg(long)]
    pub instance_id: String,
}

impl DatabaseCommand {
    pub async fn run(self, client: &Client) -> Result<()> {
        match self {
            Self::SetPassword(args) => set_password(args, client).await,
        }
    }
}

fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        anyhow::bail!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        );
    }
    Ok(())
}

async fn set_password(args: SetPasswordArgs, client: &Client) -> Result<()> {
    validate_password(&args.new_password)?;

    client
        .modify_db_password(&args.instance_id, &args.new_password)
        .await
        .with_context(|| format!("Failed to rotate password for '{}'", args.instance_id))?;

    println!("Password updated for instance '{}'", args.instance_id);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_password_rejected() {
        assert!(validate_password("abc").is_err());
    }

    #[test]
    fn test_minimum_length_password_accepted() {
        assert!(validate_password("abcd").is_ok());
    }
}
