// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use super::{FunctionDef, FunctionSignature, UdtDef};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyspaceDef {
	pub name: String,
	pub types: IndexMap<String, UdtDef>,
	#[serde(with = "functions_as_list")]
	pub functions: IndexMap<FunctionSignature, FunctionDef>,
}

impl KeyspaceDef {
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			types: IndexMap::new(),
			functions: IndexMap::new(),
		}
	}

	/// Adds a user-defined type, re-homing it into this keyspace.
	pub fn with_type(mut self, mut udt: UdtDef) -> Self {
		udt.keyspace = self.name.clone();
		self.types.insert(udt.name.clone(), udt);
		self
	}

	/// Adds a function, re-homing its signature into this keyspace.
	pub fn with_function(mut self, mut function: FunctionDef) -> Self {
		function.signature.keyspace = self.name.clone();
		self.functions.insert(function.signature.clone(), function);
		self
	}

	pub fn find_type(&self, name: &str) -> Option<&UdtDef> {
		self.types.get(name)
	}

	pub fn find_function(&self, signature: &FunctionSignature) -> Option<&FunctionDef> {
		self.functions.get(signature)
	}

	pub fn udts(&self) -> impl Iterator<Item = &UdtDef> {
		self.types.values()
	}

	pub fn functions(&self) -> impl Iterator<Item = &FunctionDef> {
		self.functions.values()
	}
}

// Signatures are not strings, so functions serialize as a plain list and are
// re-keyed on the way back in.
mod functions_as_list {
	use indexmap::IndexMap;
	use serde::{Deserialize, Deserializer, Serializer};

	use crate::{FunctionDef, FunctionSignature};

	pub fn serialize<S: Serializer>(
		functions: &IndexMap<FunctionSignature, FunctionDef>,
		serializer: S,
	) -> Result<S::Ok, S::Error> {
		serializer.collect_seq(functions.values())
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(
		deserializer: D,
	) -> Result<IndexMap<FunctionSignature, FunctionDef>, D::Error> {
		let functions = Vec::<FunctionDef>::deserialize(deserializer)?;
		Ok(functions.into_iter().map(|f| (f.signature.clone(), f)).collect())
	}
}

#[cfg(test)]
mod tests {
	use metacat_type::DataType;

	use super::*;
	use crate::{ClusterSnapshot, UdtField};

	#[test]
	fn test_with_type_rehomes_keyspace() {
		let keyspace = KeyspaceDef::new("shop").with_type(UdtDef::new("elsewhere", "address", vec![]));
		assert_eq!(keyspace.find_type("address").unwrap().keyspace, "shop");
	}

	#[test]
	fn test_overloads_are_distinct_entries() {
		let keyspace = KeyspaceDef::new("shop")
			.with_function(FunctionDef::new("shop", "total", vec![("a", DataType::Int.into())], DataType::Int.into()))
			.with_function(FunctionDef::new(
				"shop",
				"total",
				vec![("a", DataType::Bigint.into())],
				DataType::Bigint.into(),
			));
		assert_eq!(keyspace.functions().count(), 2);
	}

	#[test]
	fn test_serde_round_trip_keeps_functions() {
		let snapshot = ClusterSnapshot::new(Some("c1".to_string())).with_keyspace(
			KeyspaceDef::new("shop")
				.with_type(UdtDef::new("shop", "address", vec![UdtField::new("street", DataType::Text)]))
				.with_function(FunctionDef::new(
					"shop",
					"f",
					vec![("a", DataType::Int.into())],
					DataType::Boolean.into(),
				)),
		);

		let json = serde_json::to_string(&snapshot).unwrap();
		let back: ClusterSnapshot = serde_json::from_str(&json).unwrap();
		assert_eq!(back, snapshot);
	}
}
