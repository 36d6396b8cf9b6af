// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Bucket reorganization: group objects into extension-named prefixes
//!
//! Every object whose key has an extension is moved to
//! `<extension>/<original key>`; a zero-byte folder marker is created at
//! `<extension>/` the first time an extension is seen in a run. Moves are
//! copy-then-delete and strictly sequential. The move is not atomic: when
//! a delete fails after its copy succeeded, the error names the key that
//! now exists at both locations so the operator can clean up or re-run.

use std::collections::BTreeMap;

use async_trait::async_trait;
use clap::Args;
use cumulus_client::storage::{ObjectListing, ObjectRecord};
use cumulus_client::{Client, ClientError};
use serde::Serialize;
use thiserror::Error;

use crate::output::{json, table};

#[derive(Args, Clone)]
pub struct OrganizeArgs {
    /// Bucket to reorganize
    #[arg(long)]
    pub bucket: String,
}

/// Bucket operations the reorganizer needs
///
/// Implemented by [`Client`]; tests substitute an in-memory bucket.
#[async_trait]
pub trait BucketOps {
    /// One page of the object listing, starting after `marker`
    async fn list_objects_page(
        &self,
        bucket: &str,
        marker: Option<&str>,
    ) -> Result<ObjectListing, ClientError>;

    /// Create a zero-byte folder marker at `key`
    async fn put_marker(&self, bucket: &str, key: &str) -> Result<(), ClientError>;

    /// Server-side copy within the bucket
    async fn copy_object(
        &self,
        bucket: &str,
        source_key: &str,
        destination_key: &str,
    ) -> Result<(), ClientError>;

    /// Delete the object at `key`
    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), ClientError>;
}

#[async_trait]
impl BucketOps for Client {
    async fn list_objects_page(
        &self,
        bucket: &str,
        marker: Option<&str>,
    ) -> Result<ObjectListing, ClientError> {
        Client::list_objects_page(self, bucket, marker).await
    }

    async fn put_marker(&self, bucket: &str, key: &str) -> Result<(), ClientError> {
        self.put_object(bucket, key, Vec::new()).await
    }

    async fn copy_object(
        &self,
        bucket: &str,
        source_key: &str,
        destination_key: &str,
    ) -> Result<(), ClientError> {
        Client::copy_object(self, bucket, source_key, destination_key).await
    }

    async fn delete_object(&self, bucket: &str, key: &str) -> Result<(), ClientError> {
        Client::delete_object(self, bucket, key).await
    }
}

/// Result of a completed reorganization run
#[derive(Debug, Default, Serialize)]
pub struct OrganizeSummary {
    /// Objects moved per extension
    pub counts: BTreeMap<String, u64>,

    /// Total objects moved
    pub moved: u64,

    /// Objects left in place (no extension, or already grouped)
    pub skipped: u64,
}

/// Failures during reorganization, naming the operation that broke
#[derive(Error, Debug)]
pub enum OrganizeError {
    #[error("Failed to list bucket '{bucket}': {source}")]
    List {
        bucket: String,
        source: ClientError,
    },

    #[error("Failed to create folder marker '{marker}': {source}")]
    Marker {
        marker: String,
        source: ClientError,
    },

    #[error("Failed to copy '{key}' to '{destination}': {source}")]
    Copy {
        key: String,
        destination: String,
        source: ClientError,
    },

    /// The copy succeeded but the delete did not, so the object exists at
    /// both keys. Re-running after cleanup is safe: the destination copy
    /// is already grouped and will be skipped.
    #[error(
        "Copied '{key}' to '{destination}' but failed to delete the original; \
         the object now exists at both keys: {source}"
    )]
    Delete {
        key: String,
        destination: String,
        source: ClientError,
    },
}

/// Extension class of a key: the substring after the final `.`
///
/// Returns `None` for keys with no dot, a trailing dot, or where the
/// would-be extension spans a `/` (the dot was in a directory segment).
fn extension_class(key: &str) -> Option<&str> {
    let (_, ext) = key.rsplit_once('.')?;
    if ext.is_empty() || ext.contains('/') {
        return None;
    }
    Some(ext)
}

/// Whether `key` already lives under a top-level prefix named after its
/// own extension (`txt/a.txt`), i.e. a previous run already grouped it
fn already_grouped(key: &str, extension: &str) -> bool {
    key.split_once('/')
        .is_some_and(|(prefix, _)| prefix == extension)
}

/// Complete object listing, following markers until the service reports
/// no further pages
///
/// The whole listing is collected before any object moves, so markers
/// and destination copies created by this run never show up in it.
async fn list_all_objects<B: BucketOps>(
    ops: &B,
    bucket: &str,
) -> Result<Vec<ObjectRecord>, OrganizeError> {
    let mut objects = Vec::new();
    let mut marker: Option<String> = None;

    loop {
        let page = ops
            .list_objects_page(bucket, marker.as_deref())
            .await
            .map_err(|source| OrganizeError::List {
                bucket: bucket.to_string(),
                source,
            })?;
        objects.extend(page.objects);
        match page.next_marker {
            Some(next) => marker = Some(next),
            None => break,
        }
    }

    Ok(objects)
}

/// Reorganize every object in `bucket` into extension-named groups
pub async fn organize_bucket<B: BucketOps>(
    ops: &B,
    bucket: &str,
) -> Result<OrganizeSummary, OrganizeError> {
    let objects = list_all_objects(ops, bucket).await?;

    let mut summary = OrganizeSummary::default();

    for record in &objects {
        let key = record.key.as_str();

        let Some(extension) = extension_class(key) else {
            summary.skipped += 1;
            continue;
        };
        if already_grouped(key, extension) {
            summary.skipped += 1;
            continue;
        }

        let destination = format!("{}/{}", extension, key);

        if !summary.counts.contains_key(extension) {
            let marker = format!("{}/", extension);
            ops.put_marker(bucket, &marker)
                .await
                .map_err(|source| OrganizeError::Marker { marker, source })?;
        }

        ops.copy_object(bucket, key, &destination)
            .await
            .map_err(|source| OrganizeError::Copy {
                key: key.to_string(),
                destination: destination.clone(),
                source,
            })?;

        ops.delete_object(bucket, key)
            .await
            .map_err(|source| {
                tracing::warn!(
                    key,
                    destination = destination.as_str(),
                    "copy succeeded but delete failed; object exists at both keys"
                );
                OrganizeError::Delete {
                    key: key.to_string(),
                    destination: destination.clone(),
                    source,
                }
            })?;

        tracing::debug!(key, destination = destination.as_str(), "moved object");

        *summary.counts.entry(extension.to_string()).or_insert(0) += 1;
        summary.moved += 1;
    }

    Ok(summary)
}

pub async fn run(args: OrganizeArgs, client: &Client, use_json: bool) -> anyhow::Result<()> {
    let summary = organize_bucket(client, &args.bucket).await?;

    if use_json {
        json::print_json(&summary)?;
        return Ok(());
    }

    if summary.counts.is_empty() {
        println!("No objects needed moving in bucket '{}'", args.bucket);
    } else {
        let mut tbl = table::create_table(&["EXTENSION", "COUNT"]);
        for (extension, count) in &summary.counts {
            tbl.add_row(vec![extension.clone(), count.to_string()]);
        }
        table::print_table(tbl);
    }
    println!("{} moved, {} skipped", summary.moved, summary.skipped);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;
    use std::sync::Mutex;

    /// In-memory bucket tracking keys and per-operation call counts
    ///
    /// Listings come back in pages of `page_size` keys, so the marker
    /// loop is exercised whenever a bucket holds more than one page.
    struct FakeBucket {
        keys: Mutex<BTreeSet<String>>,
        page_size: usize,
        list_calls: Mutex<u64>,
        write_calls: Mutex<u64>,
        fail_delete_of: Option<String>,
    }

    impl FakeBucket {
        fn with_keys(keys: &[&str]) -> Self {
            Self {
                keys: Mutex::new(keys.iter().map(|k| k.to_string()).collect()),
                page_size: 2,
                list_calls: Mutex::new(0),
                write_calls: Mutex::new(0),
                fail_delete_of: None,
            }
        }

        fn keys(&self) -> Vec<String> {
            self.keys.lock().unwrap().iter().cloned().collect()
        }

        fn has(&self, key: &str) -> bool {
            self.keys.lock().unwrap().contains(key)
        }

        fn synthetic_error() -> ClientError {
            ClientError::Api {
                status: 500,
                code: "InternalError".to_string(),
                message: "injected".to_string(),
            }
        }
    }

    #[async_trait]
    impl BucketOps for FakeBucket {
        async fn list_objects_page(
            &self,
            _bucket: &str,
            marker: Option<&str>,
        ) -> Result<ObjectListing, ClientError> {
            *self.list_calls.lock().unwrap() += 1;

            let remaining: Vec<String> = self
                .keys()
                .into_iter()
                .filter(|key| marker.is_none_or(|m| key.as_str() > m))
                .collect();

            let page: Vec<String> = remaining.iter().take(self.page_size).cloned().collect();
            let next_marker = if remaining.len() > self.page_size {
                page.last().cloned()
            } else {
                None
            };

            Ok(ObjectListing {
                objects: page
                    .into_iter()
                    .map(|key| ObjectRecord {
                        key,
                        size: 0,
                        etag: None,
                        last_modified: None,
                    })
                    .collect(),
                next_marker,
            })
        }

        async fn put_marker(&self, _bucket: &str, key: &str) -> Result<(), ClientError> {
            *self.write_calls.lock().unwrap() += 1;
            self.keys.lock().unwrap().insert(key.to_string());
            Ok(())
        }

        async fn copy_object(
            &self,
            _bucket: &str,
            source_key: &str,
            destination_key: &str,
        ) -> Result<(), ClientError> {
            *self.write_calls.lock().unwrap() += 1;
            let mut keys = self.keys.lock().unwrap();
            if !keys.contains(source_key) {
                return Err(FakeBucket::synthetic_error());
            }
            keys.insert(destination_key.to_string());
            Ok(())
        }

        async fn delete_object(&self, _bucket: &str, key: &str) -> Result<(), ClientError> {
            *self.write_calls.lock().unwrap() += 1;
            if self.fail_delete_of.as_deref() == Some(key) {
                return Err(FakeBucket::synthetic_error());
            }
            self.keys.lock().unwrap().remove(key);
            Ok(())
        }
    }

    #[test]
    fn test_extension_class() {
        assert_eq!(extension_class("a.txt"), Some("txt"));
        assert_eq!(extension_class("archive.tar.gz"), Some("gz"));
        assert_eq!(extension_class("readme"), None);
        assert_eq!(extension_class("trailing."), None);
        assert_eq!(extension_class("dir.name/file"), None);
        assert_eq!(extension_class("txt/"), None);
    }

    #[test]
    fn test_already_grouped() {
        assert!(already_grouped("txt/a.txt", "txt"));
        assert!(!already_grouped("a.txt", "txt"));
        assert!(!already_grouped("txt/weird.jpg", "jpg"));
    }

    #[tokio::test]
    async fn test_end_to_end_example() {
        let bucket = FakeBucket::with_keys(&["a.txt", "b.txt", "c.jpg", "readme"]);
        let summary = organize_bucket(&bucket, "b").await.unwrap();

        assert!(bucket.has("txt/a.txt"));
        assert!(bucket.has("txt/b.txt"));
        assert!(bucket.has("jpg/c.jpg"));
        assert!(bucket.has("txt/"));
        assert!(bucket.has("jpg/"));
        assert!(bucket.has("readme"));
        assert!(!bucket.has("a.txt"));
        assert!(!bucket.has("b.txt"));
        assert!(!bucket.has("c.jpg"));

        assert_eq!(summary.counts.get("txt"), Some(&2));
        assert_eq!(summary.counts.get("jpg"), Some(&1));
        assert_eq!(summary.moved, 3);
        assert_eq!(summary.skipped, 1);
    }

    #[tokio::test]
    async fn test_empty_bucket_makes_no_further_calls() {
        let bucket = FakeBucket::with_keys(&[]);
        let summary = organize_bucket(&bucket, "b").await.unwrap();

        assert!(summary.counts.is_empty());
        assert_eq!(*bucket.list_calls.lock().unwrap(), 1);
        assert_eq!(*bucket.write_calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_second_run_is_a_no_op() {
        let bucket = FakeBucket::with_keys(&["a.txt", "c.jpg"]);
        organize_bucket(&bucket, "b").await.unwrap();
        let keys_after_first = bucket.keys();

        let summary = organize_bucket(&bucket, "b").await.unwrap();

        assert_eq!(bucket.keys(), keys_after_first);
        assert_eq!(summary.moved, 0);
        assert!(summary.counts.is_empty());
        // No re-nesting: txt/a.txt stays put
        assert!(bucket.has("txt/a.txt"));
        assert!(!bucket.has("txt/txt/a.txt"));
    }

    #[tokio::test]
    async fn test_marker_created_once_per_extension() {
        let bucket = FakeBucket::with_keys(&["a.txt", "b.txt", "c.txt"]);
        organize_bucket(&bucket, "b").await.unwrap();

        // 1 marker + 3 copies + 3 deletes
        assert_eq!(*bucket.write_calls.lock().unwrap(), 7);
    }

    #[tokio::test]
    async fn test_objects_on_later_pages_processed() {
        // Five keys with two-key pages: three listing pages
        let bucket = FakeBucket::with_keys(&["a.txt", "b.txt", "c.txt", "d.jpg", "e.jpg"]);
        let summary = organize_bucket(&bucket, "b").await.unwrap();

        assert_eq!(*bucket.list_calls.lock().unwrap(), 3);
        assert_eq!(summary.moved, 5);
        assert_eq!(summary.counts.get("txt"), Some(&3));
        assert_eq!(summary.counts.get("jpg"), Some(&2));
        // The last page's object really moved
        assert!(bucket.has("jpg/e.jpg"));
        assert!(!bucket.has("e.jpg"));
    }

    #[tokio::test]
    async fn test_delete_failure_reports_both_keys() {
        let mut bucket = FakeBucket::with_keys(&["a.txt", "b.txt"]);
        bucket.fail_delete_of = Some("b.txt".to_string());

        let err = organize_bucket(&bucket, "b").await.unwrap_err();

        match err {
            OrganizeError::Delete {
                key, destination, ..
            } => {
                assert_eq!(key, "b.txt");
                assert_eq!(destination, "txt/b.txt");
            }
            other => panic!("expected Delete error, got: {}", other),
        }

        // Partial-move state: the object exists at both locations
        assert!(bucket.has("b.txt"));
        assert!(bucket.has("txt/b.txt"));
    }

    #[tokio::test]
    async fn test_keys_without_extension_untouched() {
        let bucket = FakeBucket::with_keys(&["readme", "LICENSE", "notes."]);
        let summary = organize_bucket(&bucket, "b").await.unwrap();

        assert_eq!(summary.moved, 0);
        assert_eq!(summary.skipped, 3);
        assert_eq!(bucket.keys(), vec!["LICENSE", "notes.", "readme"]);
    }
}
