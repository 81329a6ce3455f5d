// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metacat_type::ColumnType;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UdtField {
	pub name: String,
	pub ty: ColumnType,
}

impl UdtField {
	pub fn new(name: impl Into<String>, ty: impl Into<ColumnType>) -> Self {
		Self {
			name: name.into(),
			ty: ty.into(),
		}
	}
}

/// A user-defined composite type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UdtDef {
	pub keyspace: String,
	pub name: String,
	pub fields: Vec<UdtField>,
}

impl UdtDef {
	pub fn new(keyspace: impl Into<String>, name: impl Into<String>, fields: Vec<UdtField>) -> Self {
		Self {
			keyspace: keyspace.into(),
			name: name.into(),
			fields,
		}
	}

	/// The column type that refers to this UDT from elsewhere in the schema.
	pub fn as_column_type(&self) -> ColumnType {
		ColumnType::udt(self.keyspace.clone(), self.name.clone())
	}
}
