// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use super::{CatalogRow, MetadataRow, render, text};
use crate::column::CatalogKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UdtRow {
	pub type_cat: Option<String>,
	pub type_schem: String,
	pub type_name: String,
	pub class_name: String,
	pub data_type: i32,
	pub remarks: String,
}

impl CatalogRow for UdtRow {
	const KIND: CatalogKind = CatalogKind::Udts;

	fn values(&self) -> Vec<Option<String>> {
		vec![
			self.type_cat.clone(),
			text(&self.type_schem),
			text(&self.type_name),
			text(&self.class_name),
			render(self.data_type),
			text(&self.remarks),
			None,
		]
	}

	fn catalog_order(&self, other: &Self) -> Ordering {
		self.type_schem.cmp(&other.type_schem).then_with(|| self.type_name.cmp(&other.type_name))
	}

	fn into_row(self) -> MetadataRow {
		MetadataRow::Udt(self)
	}
}
