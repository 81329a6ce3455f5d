// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Fixed-schema rows, one struct per catalog.
//!
//! Fields are typed; the nullable-string view a catalog consumer reads is
//! produced only by [`MetadataRow::values`] and [`MetadataRow::entries`].

use std::cmp::Ordering;

use crate::column::CatalogKind;

mod function;
mod function_column;
mod types;
mod udt;

pub use function::FunctionRow;
pub use function_column::FunctionColumnRow;
pub use types::TypeRow;
pub use udt::UdtRow;

/// `DatabaseMetaData.typeNullable`
pub const TYPE_NULLABLE: i16 = 1;
/// `DatabaseMetaData.typePredBasic`
pub const TYPE_PRED_BASIC: i16 = 2;
/// `DatabaseMetaData.functionNoTable`
pub const FUNCTION_NO_TABLE: i16 = 1;
/// `DatabaseMetaData.functionColumnIn`
pub const FUNCTION_COLUMN_IN: i16 = 1;
/// `DatabaseMetaData.functionReturn`
pub const FUNCTION_RETURN: i16 = 4;
/// `DatabaseMetaData.functionNullable`
pub const FUNCTION_NULLABLE: i16 = 1;

pub const YES: &str = "YES";

/// A row type belonging to exactly one catalog.
pub trait CatalogRow: Sized {
	const KIND: CatalogKind;

	/// Values in column order.
	fn values(&self) -> Vec<Option<String>>;

	/// The catalog's sort order. Ties are left to the stable sort.
	fn catalog_order(&self, other: &Self) -> Ordering;

	fn into_row(self) -> MetadataRow;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MetadataRow {
	Type(TypeRow),
	Udt(UdtRow),
	Function(FunctionRow),
	FunctionColumn(FunctionColumnRow),
}

impl MetadataRow {
	pub fn kind(&self) -> CatalogKind {
		match self {
			MetadataRow::Type(_) => TypeRow::KIND,
			MetadataRow::Udt(_) => UdtRow::KIND,
			MetadataRow::Function(_) => FunctionRow::KIND,
			MetadataRow::FunctionColumn(_) => FunctionColumnRow::KIND,
		}
	}

	pub fn values(&self) -> Vec<Option<String>> {
		match self {
			MetadataRow::Type(row) => row.values(),
			MetadataRow::Udt(row) => row.values(),
			MetadataRow::Function(row) => row.values(),
			MetadataRow::FunctionColumn(row) => row.values(),
		}
	}

	/// Column name and value pairs in contract order.
	pub fn entries(&self) -> Vec<(&'static str, Option<String>)> {
		self.kind().columns().iter().map(|c| c.name).zip(self.values()).collect()
	}

	pub fn as_type(&self) -> Option<&TypeRow> {
		match self {
			MetadataRow::Type(row) => Some(row),
			_ => None,
		}
	}

	pub fn as_udt(&self) -> Option<&UdtRow> {
		match self {
			MetadataRow::Udt(row) => Some(row),
			_ => None,
		}
	}

	pub fn as_function(&self) -> Option<&FunctionRow> {
		match self {
			MetadataRow::Function(row) => Some(row),
			_ => None,
		}
	}

	pub fn as_function_column(&self) -> Option<&FunctionColumnRow> {
		match self {
			MetadataRow::FunctionColumn(row) => Some(row),
			_ => None,
		}
	}
}

fn text(value: &str) -> Option<String> {
	Some(value.to_string())
}

fn render(value: impl ToString) -> Option<String> {
	Some(value.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_entries_pair_names_with_values() {
		let row = MetadataRow::Function(FunctionRow {
			function_cat: None,
			function_schem: "shop".to_string(),
			function_name: "total".to_string(),
			remarks: String::new(),
			function_type: FUNCTION_NO_TABLE,
			specific_name: "total".to_string(),
		});

		assert_eq!(row.kind(), CatalogKind::Functions);
		assert_eq!(
			row.entries(),
			vec![
				("FUNCTION_CAT", None),
				("FUNCTION_SCHEM", Some("shop".to_string())),
				("FUNCTION_NAME", Some("total".to_string())),
				("REMARKS", Some(String::new())),
				("FUNCTION_TYPE", Some("1".to_string())),
				("SPECIFIC_NAME", Some("total".to_string())),
			]
		);
		assert!(row.as_function().is_some());
		assert!(row.as_udt().is_none());
	}
}
