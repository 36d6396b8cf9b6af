// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Virtual network operations

use serde::{Deserialize, Serialize};

use crate::{Client, ClientError};

/// A subnet within a VPC
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subnet {
    /// Subnet identifier
    pub id: String,

    /// VPC the subnet belongs to
    pub vpc_id: String,

    /// Address range in CIDR notation
    pub cidr_block: String,

    /// Lifecycle state (e.g. `pending`, `available`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,

    /// Availability zone the subnet was placed in
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
}

#[derive(Debug, Serialize)]
struct CreateSubnetRequest<'a> {
    cidr_block: &'a str,
}

impl Client {
    /// Create a subnet in `vpc_id` covering `cidr_block`
    pub async fn create_subnet(
        &self,
        vpc_id: &str,
        cidr_block: &str,
    ) -> Result<Subnet, ClientError> {
        let path = format!("/v1/network/vpcs/{}/subnets", vpc_id);
        let req = self
            .signed(reqwest::Method::POST, &path)?
            .json(&CreateSubnetRequest { cidr_block });
        self.send_json(req).await
    }
}
