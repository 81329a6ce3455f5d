// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use metacat_type::{
	Result,
	error::diagnostic::result::{null_in_required_column, row_kind_mismatch, value_kind_mismatch},
	return_error, return_internal_error,
};
use tracing::debug;

use crate::{
	column::{CatalogKind, ColumnDef},
	row::{CatalogRow, MetadataRow},
};

mod display;
mod serialize;

/// An immutable, ordered set of rows of one catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataResult {
	kind: CatalogKind,
	columns: Arc<[ColumnDef]>,
	rows: Arc<[MetadataRow]>,
}

impl MetadataResult {
	/// Wraps rows as they are. Fails with `RESULT_001` if a row belongs to
	/// another catalog, `RESULT_002` if a non-nullable column is null and
	/// `RESULT_003` if a value does not read back as its column's kind.
	pub fn new(kind: CatalogKind, rows: Vec<MetadataRow>) -> Result<Self> {
		let columns = kind.columns();
		for (position, row) in rows.iter().enumerate() {
			if row.kind() != kind {
				return_error!(row_kind_mismatch(kind.name(), row.kind().name(), position));
			}
			check_row(kind, &columns, position, &row.values())?;
		}
		Ok(Self {
			kind,
			columns,
			rows: rows.into(),
		})
	}

	pub fn empty(kind: CatalogKind) -> Self {
		Self {
			kind,
			columns: kind.columns(),
			rows: Arc::new([]),
		}
	}

	pub fn kind(&self) -> CatalogKind {
		self.kind
	}

	pub fn columns(&self) -> &[ColumnDef] {
		&self.columns
	}

	pub fn column_index(&self, name: &str) -> Option<usize> {
		self.columns.iter().position(|c| c.name == name)
	}

	pub fn rows(&self) -> &[MetadataRow] {
		&self.rows
	}

	pub fn len(&self) -> usize {
		self.rows.len()
	}

	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &MetadataRow> {
		self.rows.iter()
	}

	/// The value of `column` in row `row`. `None` when the row or column does
	/// not exist or the value is null.
	pub fn get(&self, row: usize, column: &str) -> Option<String> {
		let index = self.column_index(column)?;
		self.rows.get(row)?.values().into_iter().nth(index).flatten()
	}
}

impl<'a> IntoIterator for &'a MetadataResult {
	type Item = &'a MetadataRow;
	type IntoIter = std::slice::Iter<'a, MetadataRow>;

	fn into_iter(self) -> Self::IntoIter {
		self.rows.iter()
	}
}

fn check_row(kind: CatalogKind, columns: &[ColumnDef], position: usize, values: &[Option<String>]) -> Result<()> {
	if values.len() != columns.len() {
		return_internal_error!(
			"`{}` row {} has {} values for {} columns",
			kind,
			position,
			values.len(),
			columns.len()
		);
	}
	for (column, value) in columns.iter().zip(values) {
		match value {
			None if !column.nullable => {
				return_error!(null_in_required_column(kind.name(), column.name, position))
			}
			Some(value) if !column.kind.accepts(value) => {
				return_error!(value_kind_mismatch(kind.name(), column.name, column.kind.name(), value, position))
			}
			_ => {}
		}
	}
	Ok(())
}

/// Sorts typed rows in their catalog's order and packages them.
pub(crate) fn assemble<R: CatalogRow>(mut rows: Vec<R>) -> Result<MetadataResult> {
	let kind = R::KIND;
	rows.sort_by(R::catalog_order);
	let result = MetadataResult::new(kind, rows.into_iter().map(CatalogRow::into_row).collect())?;
	debug!(catalog = %kind, rows = result.len(), "assembled metadata result");
	Ok(result)
}

#[cfg(test)]
mod tests {
	use metacat_type::FailureKind;

	use super::*;
	use crate::row::{FUNCTION_NO_TABLE, FunctionRow, UdtRow};

	fn function(schema: &str, name: &str) -> FunctionRow {
		FunctionRow {
			function_cat: None,
			function_schem: schema.to_string(),
			function_name: name.to_string(),
			remarks: String::new(),
			function_type: FUNCTION_NO_TABLE,
			specific_name: name.to_string(),
		}
	}

	#[test]
	fn test_assemble_sorts_by_schema_then_name() {
		let result = assemble(vec![function("shop", "b"), function("billing", "z"), function("shop", "a")]).unwrap();

		let keys: Vec<_> = result
			.iter()
			.map(|row| {
				let row = row.as_function().unwrap();
				(row.function_schem.as_str(), row.function_name.as_str())
			})
			.collect();
		assert_eq!(keys, [("billing", "z"), ("shop", "a"), ("shop", "b")]);
	}

	#[test]
	fn test_assemble_is_stable() {
		let mut first = function("shop", "f");
		first.remarks = "first".to_string();
		let mut second = function("shop", "f");
		second.remarks = "second".to_string();

		let result = assemble(vec![first, second]).unwrap();
		assert_eq!(result.get(0, "REMARKS").as_deref(), Some("first"));
		assert_eq!(result.get(1, "REMARKS").as_deref(), Some("second"));
	}

	#[test]
	fn test_new_rejects_foreign_rows() {
		let udt = MetadataRow::Udt(UdtRow {
			type_cat: None,
			type_schem: "shop".to_string(),
			type_name: "address".to_string(),
			class_name: "x".to_string(),
			data_type: 2000,
			remarks: String::new(),
		});
		let err = MetadataResult::new(CatalogKind::Functions, vec![MetadataRow::Function(function("s", "f")), udt])
			.unwrap_err();
		assert_eq!(err.code, "RESULT_001");
		assert_eq!(err.kind(), FailureKind::Construction);
	}

	fn function_values() -> Vec<Option<String>> {
		MetadataRow::Function(function("shop", "total")).values()
	}

	#[test]
	fn test_check_row_accepts_built_rows() {
		let columns = CatalogKind::Functions.columns();
		assert!(check_row(CatalogKind::Functions, &columns, 0, &function_values()).is_ok());
	}

	#[test]
	fn test_check_row_rejects_null_in_required_column() {
		let columns = CatalogKind::Functions.columns();
		let mut values = function_values();
		values[1] = None;

		let err = check_row(CatalogKind::Functions, &columns, 4, &values).unwrap_err();
		assert_eq!(err.code, "RESULT_002");
		assert_eq!(err.kind(), FailureKind::Construction);
		assert!(err.message.contains("FUNCTION_SCHEM"));
	}

	#[test]
	fn test_check_row_rejects_value_outside_kind() {
		let columns = CatalogKind::Functions.columns();
		let mut values = function_values();
		values[4] = Some(i32::MAX.to_string());

		let err = check_row(CatalogKind::Functions, &columns, 0, &values).unwrap_err();
		assert_eq!(err.code, "RESULT_003");
		assert_eq!(err.kind(), FailureKind::Construction);
		assert!(err.message.contains("FUNCTION_TYPE"));
	}

	#[test]
	fn test_check_row_rejects_short_rows() {
		let columns = CatalogKind::Functions.columns();
		let mut values = function_values();
		values.pop();

		let err = check_row(CatalogKind::Functions, &columns, 0, &values).unwrap_err();
		assert_eq!(err.code, "INTERNAL_ERROR");
		assert_eq!(err.kind(), FailureKind::Internal);
	}

	#[test]
	fn test_get() {
		let result = assemble(vec![function("shop", "total")]).unwrap();
		assert_eq!(result.get(0, "FUNCTION_NAME").as_deref(), Some("total"));
		assert_eq!(result.get(0, "FUNCTION_CAT"), None);
		assert_eq!(result.get(0, "NO_SUCH_COLUMN"), None);
		assert_eq!(result.get(1, "FUNCTION_NAME"), None);
	}

	#[test]
	fn test_empty() {
		let result = MetadataResult::empty(CatalogKind::Udts);
		assert!(result.is_empty());
		assert_eq!(result.columns().len(), 7);
	}
}
