// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use super::{CatalogRow, MetadataRow, render, text};
use crate::column::CatalogKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionRow {
	pub function_cat: Option<String>,
	pub function_schem: String,
	pub function_name: String,
	pub remarks: String,
	pub function_type: i16,
	pub specific_name: String,
}

impl CatalogRow for FunctionRow {
	const KIND: CatalogKind = CatalogKind::Functions;

	fn values(&self) -> Vec<Option<String>> {
		vec![
			self.function_cat.clone(),
			text(&self.function_schem),
			text(&self.function_name),
			text(&self.remarks),
			render(self.function_type),
			text(&self.specific_name),
		]
	}

	fn catalog_order(&self, other: &Self) -> Ordering {
		self.function_schem
			.cmp(&other.function_schem)
			.then_with(|| self.function_name.cmp(&other.function_name))
			.then_with(|| self.specific_name.cmp(&other.specific_name))
	}

	fn into_row(self) -> MetadataRow {
		MetadataRow::Function(self)
	}
}
