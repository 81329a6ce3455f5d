// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

mod column_type;
mod data_type;
mod sql_type;

pub use column_type::{ColumnType, ColumnTypeParseError};
pub use data_type::DataType;
pub use sql_type::SqlType;
