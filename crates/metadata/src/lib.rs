// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod builder;
pub mod column;
mod config;
pub mod pattern;
mod result;
pub mod row;
mod service;

pub use column::{CatalogKind, ColumnDef, ValueKind};
pub use config::MetadataConfig;
pub use pattern::{Case, Pattern, QualifiedName};
pub use result::MetadataResult;
pub use row::{FunctionColumnRow, FunctionRow, MetadataRow, TypeRow, UdtRow};
pub use service::MetadataService;
