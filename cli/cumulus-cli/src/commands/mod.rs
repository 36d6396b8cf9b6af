// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.
//
// Copyright 2026 Edgecast Cloud LLC.

//! Command implementations

pub mod compute;
pub mod database;
pub mod network;
pub mod profile;
pub mod storage;

pub use compute::ComputeCommand;
pub use database::DatabaseCommand;
pub use network::NetworkCommand;
pub use profile::ProfileCommand;
pub use storage::StorageCommand;
