// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Compute commands

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use cumulus_client::Client;
use cumulus_client::compute::{BlockDeviceMapping, IngressRuleRequest, LaunchInstanceRequest};

use crate::output::json;

/// HTTP echo service used to discover the caller's public IP
const IP_ECHO_URL: &str = "https://ident.me";

/// Fixed image for launch-instance
const LAUNCH_IMAGE_ID: &str = "img-053b0d53c279acc90";

/// Fixed size class for launch-instance
const LAUNCH_INSTANCE_TYPE: &str = "standard-1.micro";

/// Startup script baked into launched instances
const LAUNCH_USER_DATA: &str = "#!/bin/sh\necho launched by cumulus > /var/tmp/launch-info.txt\n";

#[derive(Subcommand, Clone)]
pub enum ComputeCommand {
    /// Launch an instance with the standard image, size, and disk
    LaunchInstance,

    /// Allow SSH from the caller's current public IP on a security group
    SshMyIp(SshMyIpArgs),
}

#[derive(Args, Clone)]
pub struct SshMyIpArgs {
    /// Security group to add the rule to
    #[arg(long)]
    pub security_group_id: String,
}

impl ComputeCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::LaunchInstance => launch_instance(client, use_json).await,
            Self::SshMyIp(args) => ssh_my_ip(args, client).await,
        }
    }
}

async fn launch_instance(client: &Client, use_json: bool) -> Result<()> {
    let request = LaunchInstanceRequest {
        image_id: LAUNCH_IMAGE_ID.to_string(),
        instance_type: LAUNCH_INSTANCE_TYPE.to_string(),
        min_count: 1,
        max_count: 1,
        monitoring: true,
        user_data: Some(LAUNCH_USER_DATA.to_string()),
        shutdown_behavior: "stop".to_string(),
        block_device_mappings: vec![BlockDeviceMapping {
            device_name: "/dev/sda1".to_string(),
            volume_size_gb: 10,
            volume_type: "gp2".to_string(),
            delete_on_termination: true,
            encrypted: false,
        }],
    };

    let instance = client
        .launch_instance(&request)
        .await
        .context("Failed to launch instance")?;

    if use_json {
        json::print_json(&instance)?;
    } else {
        println!("Launched instance {} ({})", instance.id, instance.state);
    }
    Ok(())
}

async fn ssh_my_ip(args: SshMyIpArgs, client: &Client) -> Result<()> {
    let ip = my_public_ip().await?;
    tracing::debug!(ip = ip.as_str(), "resolved public ip");

    let rule = IngressRuleRequest::ssh_from_host(&ip);
    let response = client
        .authorize_ingress(&args.security_group_id, &rule)
        .await
        .with_context(|| {
            format!(
                "Failed to authorize SSH ingress on '{}'",
                args.security_group_id
            )
        })?;

    if response.rule_added {
        println!("Rule added: SSH from {} on '{}'", rule.cidr, args.security_group_id);
    } else {
        println!("Rule already present: SSH from {}", rule.cidr);
    }
    Ok(())
}

/// Ask the IP echo service for the caller's public address
async fn my_public_ip() -> Result<String> {
    let ip = reqwest::get(IP_ECHO_URL)
        .await
        .and_then(|r| r.error_for_status())
        .context("Failed to reach the IP echo service")?
        .text()
        .await
        .context("Failed to read the IP echo response")?;
    Ok(ip.trim().to_string())
}
