// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Managed database instance operations

use serde::{Deserialize, Serialize};

use crate::{Client, ClientError};

/// A managed database instance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DbInstance {
    /// Instance identifier
    pub id: String,

    /// Lifecycle status (e.g. `available`, `stopped`, `rebooting`)
    pub status: String,

    /// Database engine (e.g. `postgres`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub engine: Option<String>,

    /// Connection endpoint, once available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

#[derive(Debug, Serialize)]
struct ModifyDbInstanceRequest<'a> {
    master_password: &'a str,
}

impl Client {
    /// Fetch a database instance and its current status
    pub async fn get_db_instance(&self, id: &str) -> Result<DbInstance, ClientError> {
        let path = format!("/v1/database/instances/{}", id);
        let req = self.signed(reqwest::Method::GET, &path)?;
        self.send_json(req).await
    }

    /// Rotate the master password of a database instance
    pub async fn modify_db_password(
        &self,
        id: &str,
        new_password: &str,
    ) -> Result<(), ClientError> {
        let path = format!("/v1/database/instances/{}/modify", id);
        let req = self
            .signed(reqwest::Method::POST, &path)?
            .json(&ModifyDbInstanceRequest {
                master_password: new_password,
            });
        self.send_empty(req).await
    }

    /// Start a stopped database instance
    pub async fn start_db_instance(&self, id: &str) -> Result<DbInstance, ClientError> {
        self.db_lifecycle(id, "start").await
    }

    /// Stop a running database instance
    pub async fn stop_db_instance(&self, id: &str) -> Result<DbInstance, ClientError> {
        self.db_lifecycle(id, "stop").await
    }

    /// Reboot a database instance
    pub async fn reboot_db_instance(&self, id: &str) -> Result<DbInstance, ClientError> {
        self.db_lifecycle(id, "reboot").await
    }

    async fn db_lifecycle(&self, id: &str, action: &str) -> Result<DbInstance, ClientError> {
        let path = format!("/v1/database/instances/{}/{}", id, action);
        let req = self.signed(reqwest::Method::POST, &path)?;
        self.send_json(req).await
    }
}
