// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod materialized;
pub mod snapshot;
mod source;
pub mod test_utils;

pub use materialized::MaterializedSchema;
pub use snapshot::{ClusterSnapshot, FunctionDef, FunctionSignature, KeyspaceDef, UdtDef, UdtField};
pub use source::SchemaSource;
