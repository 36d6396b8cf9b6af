// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Object storage operations
//!
//! Buckets hold objects addressed by key. Listings are paginated with an
//! opaque `marker`: pass the `next_marker` from one page to fetch the
//! next, until the service returns no marker.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Client, ClientError, encode_key};

/// One object record from a bucket listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObjectRecord {
    /// Object key (path/name within the bucket)
    pub key: String,

    /// Object size in bytes
    #[serde(default)]
    pub size: u64,

    /// Entity tag, if the service reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,

    /// Last modification time
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,
}

/// One page of a bucket listing
#[derive(Debug, Clone, Deserialize)]
pub struct ObjectListing {
    /// Objects on this page, in service order
    #[serde(default)]
    pub objects: Vec<ObjectRecord>,

    /// Marker for the next page; `None` when this is the last page
    #[serde(default)]
    pub next_marker: Option<String>,
}

impl Client {
    /// Fetch one page of a bucket's object listing
    pub async fn list_objects_page(
        &self,
        bucket: &str,
        marker: Option<&str>,
    ) -> Result<ObjectListing, ClientError> {
        let path = format!("/v1/storage/buckets/{}/objects", bucket);
        let mut request = self.signed(reqwest::Method::GET, &path)?;
        if let Some(marker) = marker {
            request = request.query(&[("marker", marker)]);
        }
        let page: ObjectListing = self.send_json(request).await?;
        tracing::debug!(
            bucket,
            page_len = page.objects.len(),
            truncated = page.next_marker.is_some(),
            "listed objects page"
        );
        Ok(page)
    }

    /// Write an object at `key` with the given body
    ///
    /// An empty body creates a zero-byte object, used for folder markers.
    pub async fn put_object(
        &self,
        bucket: &str,
        key: &str,
        body: Vec<u8>,
    ) -> Result<(), ClientError> {
        let path = format!("/v1/storage/buckets/{}/objects/{}", bucket, encode_key(key));
        let request = self.signed(reqwest::Method::PUT, &path)?.body(body);
        self.send_empty(request).await
    }

    /// Server-side copy of `source_key` to `destination_key` within `bucket`
    pub async fn copy_object(
        &self,
        bucket: &str,
        source_key: &str,
        destination_key: &str,
    ) -> Result<(), ClientError> {
        let path = format!(
            "/v1/storage/buckets/{}/objects/{}",
            bucket,
            encode_key(destination_key)
        );
        let request = self.signed(reqwest::Method::PUT, &path)?.header(
            "X-Cumulus-Copy-Source",
            format!("/{}/{}", bucket, encode_key(source_key)),
        );
        self.send_empty(request).await
    }

    /// Delete the object at `key`
    pub async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), ClientError> {
        let path = format!("/v1/storage/buckets/{}/objects/{}", bucket, encode_key(key));
        let request = self.signed(reqwest::Method::DELETE, &path)?;
        self.send_empty(request).await
    }
}
