// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use metacat_type::ColumnType;
use serde::{Deserialize, Serialize};

/// Identifies one function overload: its name plus the ordered list of
/// parameter types.
#[derive(Debug, Clone, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionSignature {
	pub keyspace: String,
	pub name: String,
	pub parameter_types: Vec<ColumnType>,
}

impl FunctionSignature {
	pub fn new(keyspace: impl Into<String>, name: impl Into<String>, parameter_types: Vec<ColumnType>) -> Self {
		Self {
			keyspace: keyspace.into(),
			name: name.into(),
			parameter_types,
		}
	}

	/// `name(type, ...)`, without the keyspace.
	pub fn overload_name(&self) -> String {
		let types: Vec<String> = self.parameter_types.iter().map(ToString::to_string).collect();
		format!("{}({})", self.name, types.join(", "))
	}
}

impl Display for FunctionSignature {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}.{}", self.keyspace, self.overload_name())
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDef {
	pub signature: FunctionSignature,
	/// Zipped with `signature.parameter_types` by position. The two lists are
	/// expected to have the same length, but a snapshot may carry a mismatch;
	/// it surfaces when rows are built.
	pub parameter_names: Vec<String>,
	pub return_type: ColumnType,
}

impl FunctionDef {
	pub fn new(
		keyspace: impl Into<String>,
		name: impl Into<String>,
		parameters: Vec<(&str, ColumnType)>,
		return_type: ColumnType,
	) -> Self {
		let (names, types): (Vec<_>, Vec<_>) =
			parameters.into_iter().map(|(name, ty)| (name.to_string(), ty)).unzip();
		Self::from_parts(FunctionSignature::new(keyspace, name, types), names, return_type)
	}

	pub fn from_parts(signature: FunctionSignature, parameter_names: Vec<String>, return_type: ColumnType) -> Self {
		Self {
			signature,
			parameter_names,
			return_type,
		}
	}

	pub fn keyspace(&self) -> &str {
		&self.signature.keyspace
	}

	pub fn name(&self) -> &str {
		&self.signature.name
	}
}
