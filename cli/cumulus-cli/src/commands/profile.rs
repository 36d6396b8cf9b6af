// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Profile management commands

use anyhow::Result;
use clap::{Args, Subcommand};
use cumulus_auth::Credentials;

use crate::config::{Config, Profile};
use crate::output::table;

#[derive(Subcommand, Clone)]
pub enum ProfileCommand {
    /// Create (or overwrite) a profile
    Create(ProfileCreateArgs),

    /// List profiles
    #[command(alias = "ls")]
    List,

    /// Show a profile (defaults to current)
    Show(ProfileShowArgs),

    /// Set the current profile
    Use(ProfileUseArgs),

    /// Delete a profile
    #[command(alias = "rm")]
    Delete(ProfileDeleteArgs),
}

#[derive(Args, Clone)]
pub struct ProfileCreateArgs {
    /// Profile name
    pub name: String,

    /// API base URL
    #[arg(long)]
    pub url: String,

    /// Access key id
    #[arg(long)]
    pub access_key_id: String,

    /// Secret access key
    #[arg(long)]
    pub secret_access_key: String,

    /// Session token for temporary credentials
    #[arg(long)]
    pub session_token: Option<String>,

    /// Region
    #[arg(long)]
    pub region: String,

    /// Also make this the current profile
    #[arg(long)]
    pub use_now: bool,
}

#[derive(Args, Clone)]
pub struct ProfileShowArgs {
    /// Profile name (defaults to current)
    pub name: Option<String>,
}

#[derive(Args, Clone)]
pub struct ProfileUseArgs {
    /// Profile name
    pub name: String,
}

#[derive(Args, Clone)]
pub struct ProfileDeleteArgs {
    /// Profile name
    pub name: String,
}

impl ProfileCommand {
    pub async fn run(self) -> Result<()> {
        match self {
            Self::Create(args) => create(args),
            Self::List => list(),
            Self::Show(args) => show(args),
            Self::Use(args) => use_profile(args),
            Self::Delete(args) => delete(args),
        }
    }
}

fn create(args: ProfileCreateArgs) -> Result<()> {
    let mut credentials = Credentials::new(
        args.access_key_id,
        args.secret_access_key,
        args.region,
    );
    if let Some(token) = args.session_token {
        credentials = credentials.with_session_token(token);
    }
    credentials.validate()?;

    let profile = Profile::new(args.name.clone(), args.url, credentials);
    profile.save()?;
    println!("Saved profile '{}'", args.name);

    if args.use_now {
        set_current(&args.name)?;
        println!("Current profile: '{}'", args.name);
    }
    Ok(())
}

fn list() -> Result<()> {
    let profiles = Profile::list_all()?;
    if profiles.is_empty() {
        println!("No profiles. Use 'cumulus profile create'.");
        return Ok(());
    }

    let current = Config::load()?.profile;
    let mut tbl = table::create_table(&["NAME", "CURRENT"]);
    for name in &profiles {
        let marker = if current.as_deref() == Some(name) {
            "*"
        } else {
            ""
        };
        tbl.add_row(vec![name.as_str(), marker]);
    }
    table::print_table(tbl);
    Ok(())
}

fn show(args: ProfileShowArgs) -> Result<()> {
    let name = match args.name {
        Some(name) => name,
        None => Config::load()?
            .profile
            .ok_or_else(|| anyhow::anyhow!("No current profile set"))?,
    };

    let profile = Profile::load(&name)?;
    println!("Name:          {}", profile.name);
    println!("URL:           {}", profile.url);
    println!("Access key id: {}", profile.credentials.access_key_id);
    println!("Region:        {}", profile.credentials.region);
    // The secret stays out of terminal output
    println!(
        "Session token: {}",
        if profile.credentials.session_token.is_some() {
            "set"
        } else {
            "none"
        }
    );
    Ok(())
}

fn use_profile(args: ProfileUseArgs) -> Result<()> {
    // Verify it exists before pointing the config at it
    Profile::load(&args.name)?;
    set_current(&args.name)?;
    println!("Current profile: '{}'", args.name);
    Ok(())
}

fn delete(args: ProfileDeleteArgs) -> Result<()> {
    Profile::delete(&args.name)?;

    let mut config = Config::load()?;
    if config.profile.as_deref() == Some(args.name.as_str()) {
        config.profile = None;
        config.save()?;
    }
    println!("Deleted profile '{}'", args.name);
    Ok(())
}

fn set_current(name: &str) -> Result<()> {
    let mut config = Config::load()?;
    config.profile = Some(name.to_string());
    config.save()
}
