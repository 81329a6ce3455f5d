// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metacat_catalog::FunctionDef;
use metacat_type::{
	ColumnType, Result, TypeRegistry, error::diagnostic::schema::parameter_arity_mismatch, return_error,
	return_internal_error,
};
use tracing::{trace, warn};

use super::{
	BuildContext,
	functions::{matching_functions, matching_keyspaces},
	short_scale,
};
use crate::{
	pattern::{Case, Pattern},
	row::{FUNCTION_COLUMN_IN, FUNCTION_NULLABLE, FUNCTION_RETURN, FunctionColumnRow, YES},
};

pub(crate) fn build_function_columns<R: TypeRegistry + ?Sized>(
	ctx: &BuildContext<'_, R>,
	schema_pattern: Option<&str>,
	function_name_pattern: Option<&str>,
	column_name_pattern: Option<&str>,
) -> Result<Vec<FunctionColumnRow>> {
	let column = Pattern::parse(column_name_pattern);
	let mut rows = vec![];

	for keyspace in matching_keyspaces(ctx, schema_pattern) {
		for function in matching_functions(keyspace, function_name_pattern) {
			rows.extend(function_rows(ctx, function, column)?);
		}
	}
	Ok(rows)
}

/// The return row of one function followed by its parameters that match
/// `column`.
fn function_rows<R: TypeRegistry + ?Sized>(
	ctx: &BuildContext<'_, R>,
	function: &FunctionDef,
	column: Pattern<'_>,
) -> Result<Vec<FunctionColumnRow>> {
	let names = &function.parameter_names;
	let types = &function.signature.parameter_types;
	if names.len() != types.len() {
		warn!(
			keyspace = %function.keyspace(),
			function = %function.name(),
			names = names.len(),
			types = types.len(),
			"parameter names and types differ in length"
		);
		return_error!(parameter_arity_mismatch(function.keyspace(), function.name(), names.len(), types.len()));
	}

	let catalog = ctx.catalog();
	let row = |column_name: &str, column_type: i16, ty: &ColumnType, ordinal: usize| {
		column_row(ctx, catalog.clone(), function, column_name, column_type, ty, ordinal)
	};

	let mut rows = vec![row("", FUNCTION_RETURN, &function.return_type, 0)?];
	for (position, (name, ty)) in names.iter().zip(types).enumerate() {
		if column.matches(name, Case::Sensitive) {
			rows.push(row(name, FUNCTION_COLUMN_IN, ty, position + 1)?);
		}
	}
	trace!(function = %function.signature, rows = rows.len(), "described function columns");
	Ok(rows)
}

fn column_row<R: TypeRegistry + ?Sized>(
	ctx: &BuildContext<'_, R>,
	catalog: Option<String>,
	function: &FunctionDef,
	column_name: &str,
	column_type: i16,
	ty: &ColumnType,
	ordinal: usize,
) -> Result<FunctionColumnRow> {
	let descriptor = ctx.resolve(ty)?;
	let Ok(ordinal_position) = i32::try_from(ordinal) else {
		return_internal_error!("ordinal {} of `{}` does not fit a column position", ordinal, function.signature);
	};
	Ok(FunctionColumnRow {
		function_cat: catalog,
		function_schem: function.keyspace().to_string(),
		function_name: function.name().to_string(),
		column_name: column_name.to_string(),
		column_type,
		data_type: descriptor.sql_code(),
		type_name: ty.qualified(function.keyspace()).to_string(),
		precision: descriptor.precision_for(None),
		length: i32::MAX,
		scale: short_scale(descriptor),
		radix: descriptor.radix,
		nullable: FUNCTION_NULLABLE,
		remarks: String::new(),
		ordinal_position,
		is_nullable: YES.to_string(),
		specific_name: ctx.specific_name(&function.signature),
	})
}

#[cfg(test)]
mod tests {
	use metacat_catalog::{ClusterSnapshot, FunctionSignature, KeyspaceDef};
	use metacat_type::{DataType, FailureKind, StandardTypeRegistry};

	use super::*;
	use crate::MetadataConfig;

	fn f() -> FunctionDef {
		FunctionDef::new(
			"shop",
			"f",
			vec![("a", DataType::Int.into()), ("b", DataType::Text.into())],
			DataType::Boolean.into(),
		)
	}

	fn build(
		snapshot: ClusterSnapshot,
		column: Option<&str>,
	) -> metacat_type::Result<Vec<FunctionColumnRow>> {
		let config = MetadataConfig::default();
		let ctx = BuildContext {
			snapshot: &snapshot,
			registry: &StandardTypeRegistry,
			config: &config,
		};
		build_function_columns(&ctx, None, Some("f"), column)
	}

	#[test]
	fn test_return_row_then_parameters() {
		let rows = build(ClusterSnapshot::new(None).with_keyspace(KeyspaceDef::new("shop").with_function(f())), None)
			.unwrap();

		let summary: Vec<_> = rows
			.iter()
			.map(|r| (r.ordinal_position, r.column_name.as_str(), r.type_name.as_str(), r.column_type))
			.collect();
		assert_eq!(
			summary,
			[(0, "", "boolean", FUNCTION_RETURN), (1, "a", "int", FUNCTION_COLUMN_IN), (2, "b", "text", FUNCTION_COLUMN_IN)]
		);
		assert!(rows.iter().all(|r| r.is_nullable == "YES" && r.length == i32::MAX && r.specific_name == "f"));
		assert_eq!(rows[0].data_type, 16);
	}

	#[test]
	fn test_column_pattern_keeps_return_row() {
		let snapshot = ClusterSnapshot::new(None).with_keyspace(KeyspaceDef::new("shop").with_function(f()));
		let rows = build(snapshot.clone(), Some("b")).unwrap();
		let names: Vec<_> = rows.iter().map(|r| (r.ordinal_position, r.column_name.as_str())).collect();
		assert_eq!(names, [(0, ""), (2, "b")]);

		// parameter names are matched case-sensitively
		assert_eq!(build(snapshot, Some("B")).unwrap().len(), 1);
	}

	#[test]
	fn test_arity_mismatch_is_consistency_failure() {
		let broken = FunctionDef::from_parts(
			FunctionSignature::new("shop", "f", vec![DataType::Int.into()]),
			vec!["a".to_string(), "b".to_string()],
			DataType::Boolean.into(),
		);
		let err = build(ClusterSnapshot::new(None).with_keyspace(KeyspaceDef::new("shop").with_function(broken)), None)
			.unwrap_err();
		assert_eq!(err.code, "SCHEMA_001");
		assert_eq!(err.kind(), FailureKind::Consistency);
	}

	#[test]
	fn test_unknown_parameter_type_is_consistency_failure() {
		let custom = FunctionDef::new(
			"shop",
			"f",
			vec![("p", ColumnType::Custom("org.example.Point".to_string()))],
			DataType::Boolean.into(),
		);
		let err = build(ClusterSnapshot::new(None).with_keyspace(KeyspaceDef::new("shop").with_function(custom)), None)
			.unwrap_err();
		assert_eq!(err.code, "REGISTRY_001");
		assert_eq!(err.kind(), FailureKind::Consistency);
	}

	#[test]
	fn test_udt_parameter_is_fully_qualified() {
		let with_udt = FunctionDef::new(
			"shop",
			"f",
			vec![("addr", ColumnType::frozen(ColumnType::udt("shop", "address")))],
			DataType::Boolean.into(),
		);
		let rows = build(ClusterSnapshot::new(None).with_keyspace(KeyspaceDef::new("shop").with_function(with_udt)), None)
			.unwrap();
		assert_eq!(rows[1].type_name, "frozen<shop.address>");
		assert_eq!(rows[1].data_type, 2000);
	}

	#[test]
	fn test_unqualified_udt_takes_function_keyspace() {
		let with_udt = FunctionDef::new(
			"shop",
			"f",
			vec![("lines", ColumnType::list(ColumnType::frozen("line".parse::<ColumnType>().unwrap())))],
			DataType::Boolean.into(),
		);
		let rows = build(ClusterSnapshot::new(None).with_keyspace(KeyspaceDef::new("shop").with_function(with_udt)), None)
			.unwrap();
		assert_eq!(rows[1].type_name, "list<frozen<shop.line>>");
		assert_eq!(rows[1].data_type, 2003);
	}

	#[test]
	fn test_function_rows_cover_one_function() {
		let other = FunctionDef::new("shop", "g", vec![("x", DataType::Int.into())], DataType::Int.into());
		let snapshot = ClusterSnapshot::new(None)
			.with_keyspace(KeyspaceDef::new("shop").with_function(f()).with_function(other.clone()));
		let config = MetadataConfig::default();
		let ctx = BuildContext {
			snapshot: &snapshot,
			registry: &StandardTypeRegistry,
			config: &config,
		};

		let rows = function_rows(&ctx, &other, Pattern::Any).unwrap();
		let names: Vec<_> = rows.iter().map(|r| (r.function_name.as_str(), r.ordinal_position)).collect();
		assert_eq!(names, [("g", 0), ("g", 1)]);
		assert_eq!(build_function_columns(&ctx, None, None, None).unwrap().len(), 5);
	}

	#[test]
	fn test_decimal_scale_fits_short_column() {
		let decimal = FunctionDef::new("shop", "f", vec![("d", DataType::Decimal.into())], DataType::Decimal.into());
		let rows = build(ClusterSnapshot::new(None).with_keyspace(KeyspaceDef::new("shop").with_function(decimal)), None)
			.unwrap();
		assert!(rows.iter().all(|r| r.scale == i16::MAX && r.radix == Some(10)));
	}
}
