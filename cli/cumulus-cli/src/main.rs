// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Cumulus CLI - one-shot administrative actions against the Cumulus cloud API

use anyhow::Result;
use clap::{Parser, Subcommand};
use cumulus_client::Client;

mod commands;
mod config;
mod output;

use commands::{ComputeCommand, DatabaseCommand, NetworkCommand, ProfileCommand, StorageCommand};

#[derive(Parser)]
#[command(
    name = "cumulus",
    version,
    about = "Cumulus cloud management CLI",
    long_about = "One-shot administrative actions against the Cumulus cloud API"
)]
struct Cli {
    /// Profile to use
    #[arg(short, long, global = true, env = "CUMULUS_PROFILE")]
    profile: Option<String>,

    /// API URL override
    #[arg(short = 'U', long, global = true, env = "CUMULUS_URL")]
    url: Option<String>,

    /// Region override
    #[arg(short, long, global = true, env = "CUMULUS_REGION")]
    region: Option<String>,

    /// Output as JSON
    #[arg(short, long, global = true)]
    json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage connection profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Compute instances and security groups
    Compute {
        #[command(subcommand)]
        command: ComputeCommand,
    },

    /// Object storage buckets
    Storage {
        #[command(subcommand)]
        command: StorageCommand,
    },

    /// Managed database instances
    Database {
        #[command(subcommand)]
        command: DatabaseCommand,
    },

    /// Virtual networks
    Network {
        #[command(subcommand)]
        command: NetworkCommand,
    },
}

impl Cli {
    /// Build an authenticated client from CLI options, environment, or profile
    fn build_client(&self) -> Result<Client> {
        let resolved = config::resolve(
            self.profile.as_deref(),
            self.url.as_deref(),
            self.region.as_deref(),
        )?;
        Ok(Client::new(resolved.url, resolved.credentials))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("cumulus=debug,cumulus_cli=debug,cumulus_client=debug")
            .init();
    }

    // Commands are cloned out of the match since build_client borrows cli
    match &cli.command {
        Commands::Profile { command } => command.clone().run().await,
        Commands::Compute { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
        Commands::Storage { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
        Commands::Database { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client).await
        }
        Commands::Network { command } => {
            let client = cli.build_client()?;
            command.clone().run(&client, cli.json).await
        }
    }
}
