// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

pub mod catalog;
pub mod config;
pub mod internal;
pub mod registry;
pub mod result;
pub mod schema;
pub mod r#type;
