// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Object storage commands

pub mod organize;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use cumulus_client::Client;
use std::path::PathBuf;

#[derive(Subcommand, Clone)]
pub enum StorageCommand {
    /// Group bucket objects into extension-named prefixes
    Organize(organize::OrganizeArgs),

    /// Upload a single file to a bucket
    UploadFile(UploadFileArgs),
}

#[derive(Args, Clone)]
pub struct UploadFileArgs {
    /// Bucket to upload into
    #[arg(long)]
    pub bucket: String,

    /// Local file to upload
    pub path: PathBuf,
}

impl StorageCommand {
    pub async fn run(self, client: &Client, use_json: bool) -> Result<()> {
        match self {
            Self::Organize(args) => organize::run(args, client, use_json).await,
            Self::UploadFile(args) => upload_file(args, client).await,
        }
    }
}

async fn upload_file(args: UploadFileArgs, client: &Client) -> Result<()> {
    let key = args
        .path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .ok_or_else(|| anyhow::anyhow!("'{}' has no file name", args.path.display()))?;

    let body = tokio::fs::read(&args.path)
        .await
        .with_context(|| format!("Failed to read '{}'", args.path.display()))?;

    let size = body.len();
    client
        .put_object(&args.bucket, &key, body)
        .await
        .with_context(|| format!("Failed to upload '{}'", key))?;

    println!("Uploaded '{}' ({} bytes) to bucket '{}'", key, size, args.bucket);
    Ok(())
}
