// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Compute instance and security group operations

use serde::{Deserialize, Serialize};

use crate::{Client, ClientError};

/// Root disk specification for a new instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockDeviceMapping {
    /// Device path the volume attaches at (e.g. `/dev/sda1`)
    pub device_name: String,

    /// Volume size in gigabytes
    pub volume_size_gb: u32,

    /// Volume type (e.g. `gp2`)
    pub volume_type: String,

    /// Delete the volume when the instance terminates
    pub delete_on_termination: bool,

    /// Encrypt the volume at rest
    pub encrypted: bool,
}

/// Request body for launching instances
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchInstanceRequest {
    /// Machine image to boot from
    pub image_id: String,

    /// Instance size class
    pub instance_type: String,

    /// Minimum number of instances to launch
    pub min_count: u32,

    /// Maximum number of instances to launch
    pub max_count: u32,

    /// Enable detailed monitoring
    pub monitoring: bool,

    /// Startup script run on first boot
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_data: Option<String>,

    /// What an in-instance shutdown does (`stop` or `terminate`)
    pub shutdown_behavior: String,

    /// Disk specifications
    pub block_device_mappings: Vec<BlockDeviceMapping>,
}

/// A launched compute instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instance {
    /// Instance identifier
    pub id: String,

    /// Lifecycle state (e.g. `pending`, `running`)
    pub state: String,

    /// Image the instance was launched from
    pub image_id: String,

    /// Instance size class
    pub instance_type: String,

    /// Public IP address, once assigned
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_ip: Option<String>,
}

/// Request body for a security group ingress rule
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngressRuleRequest {
    /// IP protocol (`tcp`, `udp`, `icmp`)
    pub protocol: String,

    /// First port in the allowed range
    pub from_port: u16,

    /// Last port in the allowed range
    pub to_port: u16,

    /// Source CIDR the rule admits
    pub cidr: String,
}

/// Response from an ingress authorization
#[derive(Debug, Clone, Deserialize)]
pub struct IngressRuleResponse {
    /// Whether the rule was added (false when it already existed)
    #[serde(default)]
    pub rule_added: bool,
}

impl IngressRuleRequest {
    /// SSH (TCP/22) from a single host address
    pub fn ssh_from_host(ip: &str) -> Self {
        Self {
            protocol: "tcp".to_string(),
            from_port: 22,
            to_port: 22,
            cidr: format!("{}/32", ip),
        }
    }
}

impl Client {
    /// Launch instance(s) per `request`
    pub async fn launch_instance(
        &self,
        request: &LaunchInstanceRequest,
    ) -> Result<Instance, ClientError> {
        let req = self
            .signed(reqwest::Method::POST, "/v1/compute/instances")?
            .json(request);
        self.send_json(req).await
    }

    /// Authorize an ingress rule on a security group
    pub async fn authorize_ingress(
        &self,
        security_group_id: &str,
        rule: &IngressRuleRequest,
    ) -> Result<IngressRuleResponse, ClientError> {
        let path = format!("/v1/compute/security-groups/{}/ingress", security_group_id);
        let req = self.signed(reqwest::Method::POST, &path)?.json(rule);
        self.send_json(req).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_ssh_from_host_builds_host_cidr() {
        let rule = IngressRuleRequest::ssh_from_host("203.0.113.7");
        assert_eq!(rule.cidr, "203.0.113.7/32");
        assert_eq!(rule.protocol, "tcp");
        assert_eq!((rule.from_port, rule.to_port), (22, 22));
    }
}
