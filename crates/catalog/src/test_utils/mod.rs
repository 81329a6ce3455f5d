// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metacat_type::ColumnType;

use crate::{FunctionDef, KeyspaceDef, MaterializedSchema, SchemaSource, UdtDef, UdtField};

pub fn create_keyspace(schema: &MaterializedSchema, keyspace: &str) -> KeyspaceDef {
	schema.create_keyspace(keyspace).unwrap();
	schema.snapshot().find_keyspace(keyspace).cloned().unwrap()
}

pub fn ensure_keyspace(schema: &MaterializedSchema, keyspace: &str) -> KeyspaceDef {
	if let Some(result) = schema.snapshot().find_keyspace(keyspace) {
		return result.clone();
	}
	create_keyspace(schema, keyspace)
}

/// Creates a UDT, creating its keyspace first when needed.
pub fn create_udt(schema: &MaterializedSchema, keyspace: &str, name: &str, fields: &[(&str, &str)]) -> UdtDef {
	ensure_keyspace(schema, keyspace);
	let fields = fields.iter().map(|(name, ty)| UdtField::new(*name, parse_type(ty))).collect();
	let udt = UdtDef::new(keyspace, name, fields);
	schema.create_type(udt.clone()).unwrap();
	udt
}

/// Creates a function from CQL type text, creating its keyspace first when
/// needed.
pub fn create_function(
	schema: &MaterializedSchema,
	keyspace: &str,
	name: &str,
	parameters: &[(&str, &str)],
	return_type: &str,
) -> FunctionDef {
	ensure_keyspace(schema, keyspace);
	let parameters = parameters.iter().map(|(name, ty)| (*name, parse_type(ty))).collect();
	let function = FunctionDef::new(keyspace, name, parameters, parse_type(return_type));
	schema.create_function(function.clone()).unwrap();
	function
}

pub fn parse_type(text: &str) -> ColumnType {
	text.parse().unwrap()
}
