// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metacat_type::{SqlType, TypeRegistry};
use tracing::trace;

use super::BuildContext;
use crate::{
	pattern::{Case, Pattern, QualifiedName},
	row::UdtRow,
};

/// Every user-defined type is reported in this category.
pub(crate) const UDT_CATEGORY: SqlType = SqlType::JavaObject;

pub(crate) fn build_udts<R: TypeRegistry + ?Sized>(
	ctx: &BuildContext<'_, R>,
	schema_pattern: Option<&str>,
	type_name_pattern: Option<&str>,
	categories: Option<&[SqlType]>,
) -> Vec<UdtRow> {
	if let Some(categories) = categories {
		if !categories.contains(&UDT_CATEGORY) {
			trace!(?categories, "category filter excludes user-defined types");
			return vec![];
		}
	}

	// A qualified type name carries its own schema, which wins.
	let (schema, name) = match type_name_pattern.and_then(QualifiedName::split) {
		Some(qualified) => (Pattern::parse(Some(qualified.schema)), Pattern::literal(Some(qualified.name))),
		None => (Pattern::parse(schema_pattern), Pattern::literal(type_name_pattern)),
	};

	let catalog = ctx.catalog();
	let mut rows = vec![];
	for keyspace in ctx.snapshot.keyspaces().filter(|k| schema.matches(&k.name, Case::Sensitive)) {
		let before = rows.len();
		for udt in keyspace.udts().filter(|u| name.matches(&u.name, Case::Insensitive)) {
			rows.push(UdtRow {
				type_cat: catalog.clone(),
				type_schem: keyspace.name.clone(),
				type_name: udt.name.clone(),
				class_name: ctx.config.udt_class_name.clone(),
				data_type: UDT_CATEGORY.code(),
				remarks: String::new(),
			});
		}
		trace!(keyspace = %keyspace.name, udts = rows.len() - before, "matched user-defined types");
	}
	rows
}

#[cfg(test)]
mod tests {
	use metacat_catalog::{ClusterSnapshot, KeyspaceDef, UdtDef};
	use metacat_type::StandardTypeRegistry;

	use super::*;
	use crate::MetadataConfig;

	fn snapshot() -> ClusterSnapshot {
		ClusterSnapshot::new(Some("cluster".to_string()))
			.with_keyspace(
				KeyspaceDef::new("shop")
					.with_type(UdtDef::new("shop", "address", vec![]))
					.with_type(UdtDef::new("shop", "%", vec![])),
			)
			.with_keyspace(KeyspaceDef::new("billing").with_type(UdtDef::new("billing", "address", vec![])))
	}

	fn build(schema: Option<&str>, name: Option<&str>, categories: Option<&[SqlType]>) -> Vec<UdtRow> {
		let snapshot = snapshot();
		let config = MetadataConfig::default();
		let ctx = BuildContext {
			snapshot: &snapshot,
			registry: &StandardTypeRegistry,
			config: &config,
		};
		build_udts(&ctx, schema, name, categories)
	}

	fn schemas(rows: &[UdtRow]) -> Vec<&str> {
		rows.iter().map(|r| r.type_schem.as_str()).collect()
	}

	#[test]
	fn test_absent_name_matches_all() {
		let rows = build(None, None, None);
		assert_eq!(rows.len(), 3);
		assert!(rows.iter().all(|r| r.data_type == 2000 && r.type_cat.as_deref() == Some("cluster")));
	}

	#[test]
	fn test_percent_name_is_literal() {
		let rows = build(None, Some("%"), None);
		assert_eq!(rows.len(), 1);
		assert_eq!(rows[0].type_name, "%");
	}

	#[test]
	fn test_schema_filter() {
		assert_eq!(schemas(&build(Some("billing"), Some("ADDRESS"), None)), ["billing"]);
		assert_eq!(build(Some("Billing"), Some("address"), None).len(), 0);
		assert_eq!(build(Some("%"), Some("address"), None).len(), 2);
		assert_eq!(build(Some(""), None, None).len(), 0);
	}

	#[test]
	fn test_qualified_name_overrides_schema() {
		assert_eq!(schemas(&build(Some("billing"), Some("shop.address"), None)), ["shop"]);
	}

	#[test]
	fn test_category_filter() {
		assert_eq!(build(None, Some("address"), Some(&[SqlType::Struct, SqlType::JavaObject])).len(), 2);
		assert!(build(None, Some("address"), Some(&[SqlType::Struct, SqlType::Distinct])).is_empty());
		assert!(build(None, Some("address"), Some(&[])).is_empty());
	}
}
