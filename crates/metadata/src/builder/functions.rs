// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metacat_catalog::{FunctionDef, KeyspaceDef};
use metacat_type::TypeRegistry;
use tracing::trace;

use super::BuildContext;
use crate::{
	pattern::{Case, Pattern, WILDCARD},
	row::{FUNCTION_NO_TABLE, FunctionRow},
};

/// Keyspaces selected by a function schema pattern. The wildcard stands for
/// each keyspace's own name.
pub(super) fn matching_keyspaces<'s, R: TypeRegistry + ?Sized>(
	ctx: &BuildContext<'s, R>,
	schema_pattern: Option<&'s str>,
) -> impl Iterator<Item = &'s KeyspaceDef> {
	ctx.snapshot.keyspaces().filter(move |keyspace| {
		let resolved = match schema_pattern {
			Some(WILDCARD) => Some(keyspace.name.as_str()),
			other => other,
		};
		Pattern::parse(resolved).matches(&keyspace.name, Case::Sensitive)
	})
}

pub(super) fn matching_functions<'k>(
	keyspace: &'k KeyspaceDef,
	function_name_pattern: Option<&'k str>,
) -> impl Iterator<Item = &'k FunctionDef> {
	let name = Pattern::parse(function_name_pattern);
	keyspace.functions().filter(move |function| name.matches(function.name(), Case::Insensitive))
}

pub(crate) fn build_functions<R: TypeRegistry + ?Sized>(
	ctx: &BuildContext<'_, R>,
	schema_pattern: Option<&str>,
	function_name_pattern: Option<&str>,
) -> Vec<FunctionRow> {
	let catalog = ctx.catalog();
	let mut rows = vec![];
	for keyspace in matching_keyspaces(ctx, schema_pattern) {
		let before = rows.len();
		for function in matching_functions(keyspace, function_name_pattern) {
			rows.push(FunctionRow {
				function_cat: catalog.clone(),
				function_schem: keyspace.name.clone(),
				function_name: function.name().to_string(),
				remarks: String::new(),
				function_type: FUNCTION_NO_TABLE,
				specific_name: ctx.specific_name(&function.signature),
			});
		}
		trace!(keyspace = %keyspace.name, functions = rows.len() - before, "matched functions");
	}
	rows
}

#[cfg(test)]
mod tests {
	use metacat_catalog::{ClusterSnapshot, FunctionDef, KeyspaceDef};
	use metacat_type::{DataType, StandardTypeRegistry};

	use super::*;
	use crate::MetadataConfig;

	fn total(keyspace: &str, arg: DataType) -> FunctionDef {
		FunctionDef::new(keyspace, "Total", vec![("amount", arg.into())], arg.into())
	}

	fn snapshot() -> ClusterSnapshot {
		ClusterSnapshot::new(None)
			.with_keyspace(
				KeyspaceDef::new("shop")
					.with_function(total("shop", DataType::Int))
					.with_function(total("shop", DataType::Bigint)),
			)
			.with_keyspace(KeyspaceDef::new("billing").with_function(total("billing", DataType::Decimal)))
	}

	fn build(config: MetadataConfig, schema: Option<&str>, name: Option<&str>) -> Vec<FunctionRow> {
		let snapshot = snapshot();
		let ctx = BuildContext {
			snapshot: &snapshot,
			registry: &StandardTypeRegistry,
			config: &config,
		};
		build_functions(&ctx, schema, name)
	}

	#[test]
	fn test_wildcard_schema_selects_every_keyspace() {
		assert_eq!(build(MetadataConfig::default(), Some("%"), None).len(), 3);
		assert_eq!(build(MetadataConfig::default(), None, Some("%")).len(), 3);
	}

	#[test]
	fn test_schema_is_case_sensitive_name_is_not() {
		assert_eq!(build(MetadataConfig::default(), Some("shop"), Some("total")).len(), 2);
		assert_eq!(build(MetadataConfig::default(), Some("SHOP"), Some("total")).len(), 0);
		assert_eq!(build(MetadataConfig::default(), Some(""), None).len(), 0);
	}

	#[test]
	fn test_overloads_collapse_by_default() {
		let rows = build(MetadataConfig::default(), Some("shop"), None);
		assert!(rows.iter().all(|r| r.specific_name == "Total"));
		assert!(rows.iter().all(|r| r.function_type == FUNCTION_NO_TABLE));
	}

	#[test]
	fn test_distinct_overloads() {
		let rows = build(MetadataConfig::new().distinct_overloads(true), Some("shop"), None);
		let names: Vec<_> = rows.iter().map(|r| r.specific_name.as_str()).collect();
		assert_eq!(names, ["Total(int)", "Total(bigint)"]);
	}

	#[test]
	fn test_catalog_override() {
		let rows = build(MetadataConfig::new().catalog("prod"), Some("billing"), None);
		assert_eq!(rows[0].function_cat.as_deref(), Some("prod"));
	}
}
