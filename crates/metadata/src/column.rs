// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	sync::{Arc, OnceLock},
};

use serde::{Deserialize, Serialize};

/// The four catalog views.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogKind {
	Types,
	Udts,
	Functions,
	FunctionColumns,
}

impl CatalogKind {
	pub fn name(&self) -> &'static str {
		match self {
			CatalogKind::Types => "types",
			CatalogKind::Udts => "udts",
			CatalogKind::Functions => "functions",
			CatalogKind::FunctionColumns => "function_columns",
		}
	}

	/// Column definitions in contract order.
	pub fn columns(&self) -> Arc<[ColumnDef]> {
		match self {
			CatalogKind::Types => types(),
			CatalogKind::Udts => udts(),
			CatalogKind::Functions => functions(),
			CatalogKind::FunctionColumns => function_columns(),
		}
	}
}

impl Display for CatalogKind {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// JDBC value kind a consumer reads a column as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueKind {
	Text,
	Short,
	Int,
	Boolean,
}

impl ValueKind {
	pub fn name(&self) -> &'static str {
		match self {
			ValueKind::Text => "text",
			ValueKind::Short => "short",
			ValueKind::Int => "int",
			ValueKind::Boolean => "boolean",
		}
	}

	/// Whether `value` reads back as this kind.
	pub fn accepts(&self, value: &str) -> bool {
		match self {
			ValueKind::Text => true,
			ValueKind::Short => value.parse::<i16>().is_ok(),
			ValueKind::Int => value.parse::<i32>().is_ok(),
			ValueKind::Boolean => matches!(value, "true" | "false"),
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColumnDef {
	pub name: &'static str,
	pub kind: ValueKind,
	pub index: usize,
	pub nullable: bool,
}

pub const TYPE_CAT: &str = "TYPE_CAT";
pub const TYPE_SCHEM: &str = "TYPE_SCHEM";
pub const TYPE_NAME: &str = "TYPE_NAME";
pub const DATA_TYPE: &str = "DATA_TYPE";
pub const PRECISION: &str = "PRECISION";
pub const REMARKS: &str = "REMARKS";
pub const NULLABLE: &str = "NULLABLE";
pub const FUNCTION_CAT: &str = "FUNCTION_CAT";
pub const FUNCTION_SCHEM: &str = "FUNCTION_SCHEM";
pub const FUNCTION_NAME: &str = "FUNCTION_NAME";
pub const SPECIFIC_NAME: &str = "SPECIFIC_NAME";
pub const COLUMN_NAME: &str = "COLUMN_NAME";
pub const ORDINAL_POSITION: &str = "ORDINAL_POSITION";

fn build(columns: &[(&'static str, ValueKind, bool)]) -> Arc<[ColumnDef]> {
	columns.iter()
		.enumerate()
		.map(|(index, &(name, kind, nullable))| ColumnDef {
			name,
			kind,
			index,
			nullable,
		})
		.collect()
}

/// Columns of the `types` catalog
pub fn types() -> Arc<[ColumnDef]> {
	static INSTANCE: OnceLock<Arc<[ColumnDef]>> = OnceLock::new();

	INSTANCE.get_or_init(|| {
		use ValueKind::*;
		build(&[
			(TYPE_NAME, Text, false),
			(DATA_TYPE, Int, false),
			(PRECISION, Int, false),
			("LITERAL_PREFIX", Text, true),
			("LITERAL_SUFFIX", Text, true),
			("CREATE_PARAMS", Text, true),
			(NULLABLE, Short, false),
			("CASE_SENSITIVE", Boolean, false),
			("SEARCHABLE", Short, false),
			("UNSIGNED_ATTRIBUTE", Boolean, false),
			("FIXED_PREC_SCALE", Boolean, false),
			("AUTO_INCREMENT", Boolean, false),
			("LOCAL_TYPE_NAME", Text, true),
			("MINIMUM_SCALE", Short, false),
			("MAXIMUM_SCALE", Short, false),
			("SQL_DATA_TYPE", Int, true),
			("SQL_DATETIME_SUB", Int, true),
			("NUM_PREC_RADIX", Int, true),
		])
	})
	.clone()
}

/// Columns of the `udts` catalog
pub fn udts() -> Arc<[ColumnDef]> {
	static INSTANCE: OnceLock<Arc<[ColumnDef]>> = OnceLock::new();

	INSTANCE.get_or_init(|| {
		use ValueKind::*;
		build(&[
			(TYPE_CAT, Text, true),
			(TYPE_SCHEM, Text, false),
			(TYPE_NAME, Text, false),
			("CLASS_NAME", Text, false),
			(DATA_TYPE, Int, false),
			(REMARKS, Text, false),
			("BASE_TYPE", Short, true),
		])
	})
	.clone()
}

/// Columns of the `functions` catalog
pub fn functions() -> Arc<[ColumnDef]> {
	static INSTANCE: OnceLock<Arc<[ColumnDef]>> = OnceLock::new();

	INSTANCE.get_or_init(|| {
		use ValueKind::*;
		build(&[
			(FUNCTION_CAT, Text, true),
			(FUNCTION_SCHEM, Text, false),
			(FUNCTION_NAME, Text, false),
			(REMARKS, Text, false),
			("FUNCTION_TYPE", Short, false),
			(SPECIFIC_NAME, Text, false),
		])
	})
	.clone()
}

/// Columns of the `function_columns` catalog
pub fn function_columns() -> Arc<[ColumnDef]> {
	static INSTANCE: OnceLock<Arc<[ColumnDef]>> = OnceLock::new();

	INSTANCE.get_or_init(|| {
		use ValueKind::*;
		build(&[
			(FUNCTION_CAT, Text, true),
			(FUNCTION_SCHEM, Text, false),
			(FUNCTION_NAME, Text, false),
			(COLUMN_NAME, Text, false),
			("COLUMN_TYPE", Short, false),
			(DATA_TYPE, Int, false),
			(TYPE_NAME, Text, false),
			(PRECISION, Int, false),
			("LENGTH", Int, false),
			("SCALE", Short, false),
			("RADIX", Short, true),
			(NULLABLE, Short, false),
			(REMARKS, Text, false),
			("CHAR_OCTET_LENGTH", Int, true),
			(ORDINAL_POSITION, Int, false),
			("IS_NULLABLE", Text, false),
			(SPECIFIC_NAME, Text, false),
		])
	})
	.clone()
}
