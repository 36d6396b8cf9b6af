// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Network commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use cumulus_client::Client;

use crate::output::json;

#[derive(Subcommand, Clone)]
pub enum NetworkCommand {
    /// Create a private subnet in a VPC
    CreateSubnet(CreateSubnetArgs),
}

#[derive(Args, Clone)]
pub struct CreateSubnetArgs {
    /// VPC to create the subnet in
    #[arg(long)]
    pub vpc: String,

    /// Address range in CIDR notation (e.g. 10.0.1.0/24)
    pub cidr: String,
}

impl NetworkCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::CreateSubnet(args) => create_subnet(args, client, use_json).await,
        }
    }
}

async fn create_subnet(args: CreateSubnetArgs, client: &Client, use_json: bool) -> Result<()> {
    let subnet = client
        .create_subnet(&args.vpc, &args.cidr)
        .await
        .with_context(|| format!("Failed to create subnet in '{}'", args.vpc))?;

    if use_json {
        json::print_json(&subnet)?;
    } else {
        println!("ID:    {}", subnet.id);
        println!("VPC:   {}", subnet.vpc_id);
        println!("CIDR:  {}", subnet.cidr_block);
        if let Some(state) = &subnet.state {
            println!("State: {}", state);
        }
        if let Some(zone) = &subnet.availability_zone {
            println!("Zone:  {}", zone);
        }
    }
    Ok(())
}
