// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod registry;
pub mod value;

pub use error::{Diagnostic, Error, FailureKind, IntoDiagnostic};
pub use registry::{StandardTypeRegistry, TypeDescriptor, TypeRegistry};
pub use value::{ColumnType, DataType, SqlType};

pub type Result<T> = std::result::Result<T, Error>;
