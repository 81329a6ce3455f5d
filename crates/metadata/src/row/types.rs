// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::cmp::Ordering;

use super::{CatalogRow, MetadataRow, render, text};
use crate::column::CatalogKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeRow {
	pub type_name: String,
	pub data_type: i32,
	pub precision: i32,
	/// Quote character for literals, when the type needs one.
	pub literal_quote: Option<char>,
	pub nullable: i16,
	pub case_sensitive: bool,
	pub searchable: i16,
	pub unsigned_attribute: bool,
	pub fixed_prec_scale: bool,
	pub auto_increment: bool,
	pub minimum_scale: i16,
	pub maximum_scale: i16,
	pub num_prec_radix: Option<i32>,
}

impl CatalogRow for TypeRow {
	const KIND: CatalogKind = CatalogKind::Types;

	fn values(&self) -> Vec<Option<String>> {
		let quote = self.literal_quote.map(String::from);
		vec![
			text(&self.type_name),
			render(self.data_type),
			render(self.precision),
			quote.clone(),
			quote,
			None,
			render(self.nullable),
			render(self.case_sensitive),
			render(self.searchable),
			render(self.unsigned_attribute),
			render(self.fixed_prec_scale),
			render(self.auto_increment),
			None,
			render(self.minimum_scale),
			render(self.maximum_scale),
			None,
			None,
			self.num_prec_radix.map(|radix| radix.to_string()),
		]
	}

	fn catalog_order(&self, other: &Self) -> Ordering {
		self.data_type.cmp(&other.data_type)
	}

	fn into_row(self) -> MetadataRow {
		MetadataRow::Type(self)
	}
}
