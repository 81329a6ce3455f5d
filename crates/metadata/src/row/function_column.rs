// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use super::{CatalogRow, MetadataRow, render, text};
use crate::column::CatalogKind;

/// A function's return value (ordinal 0) or one of its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionColumnRow {
	pub function_cat: Option<String>,
	pub function_schem: String,
	pub function_name: String,
	pub column_name: String,
	pub column_type: i16,
	pub data_type: i32,
	pub type_name: String,
	pub precision: i32,
	pub length: i32,
	pub scale: i16,
	pub radix: Option<i32>,
	pub nullable: i16,
	pub remarks: String,
	pub ordinal_position: i32,
	pub is_nullable: String,
	pub specific_name: String,
}

impl CatalogRow for FunctionColumnRow {
	const KIND: CatalogKind = CatalogKind::FunctionColumns;

	fn values(&self) -> Vec<Option<String>> {
		vec![
			self.function_cat.clone(),
			text(&self.function_schem),
			text(&self.function_name),
			text(&self.column_name),
			render(self.column_type),
			render(self.data_type),
			text(&self.type_name),
			render(self.precision),
			render(self.length),
			render(self.scale),
			self.radix.map(|radix| radix.to_string()),
			render(self.nullable),
			text(&self.remarks),
			None,
			render(self.ordinal_position),
			text(&self.is_nullable),
			text(&self.specific_name),
		]
	}

	fn catalog_order(&self, other: &Self) -> Ordering {
		self.function_schem
			.cmp(&other.function_schem)
			.then_with(|| self.function_name.cmp(&other.function_name))
			.then_with(|| self.specific_name.cmp(&other.specific_name))
			.then_with(|| self.ordinal_position.cmp(&other.ordinal_position))
	}

	fn into_row(self) -> MetadataRow {
		MetadataRow::FunctionColumn(self)
	}
}
