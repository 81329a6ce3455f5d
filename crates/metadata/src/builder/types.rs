// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metacat_type::{ColumnType, DataType, Result, TypeRegistry};
use tracing::trace;

use super::{resolve, short_scale};
use crate::row::{TYPE_NULLABLE, TYPE_PRED_BASIC, TypeRow};

const LITERAL_QUOTE: char = '\'';

/// One row per type of the fixed type universe. Takes no filter.
pub(crate) fn build_types<R: TypeRegistry + ?Sized>(registry: &R) -> Result<Vec<TypeRow>> {
	let rows = DataType::ALL
		.into_iter()
		.map(|ty| {
			let descriptor = resolve(registry, &ColumnType::Native(ty))?;
			Ok(TypeRow {
				type_name: ty.name().to_string(),
				data_type: descriptor.sql_code(),
				precision: descriptor.precision_for(None),
				literal_quote: descriptor.needs_quotes.then_some(LITERAL_QUOTE),
				nullable: TYPE_NULLABLE,
				case_sensitive: descriptor.case_sensitive,
				searchable: TYPE_PRED_BASIC,
				unsigned_attribute: !descriptor.signed,
				fixed_prec_scale: !descriptor.currency,
				auto_increment: false,
				minimum_scale: 0,
				maximum_scale: short_scale(descriptor),
				num_prec_radix: descriptor.radix,
			})
		})
		.collect::<Result<Vec<_>>>()?;

	trace!(types = rows.len(), "described type universe");
	Ok(rows)
}

#[cfg(test)]
mod tests {
	use metacat_type::{SqlType, StandardTypeRegistry, TypeDescriptor};

	use super::*;

	#[test]
	fn test_text_row() {
		let rows = build_types(&StandardTypeRegistry::new()).unwrap();
		let text = rows.iter().find(|r| r.type_name == "text").unwrap();

		assert_eq!(text.data_type, SqlType::Varchar.code());
		assert_eq!(text.literal_quote, Some('\''));
		assert!(text.case_sensitive);
		assert!(text.unsigned_attribute);
		assert!(text.fixed_prec_scale);
		assert_eq!(text.num_prec_radix, None);
	}

	#[test]
	fn test_numeric_row() {
		let rows = build_types(&StandardTypeRegistry::new()).unwrap();
		let int = rows.iter().find(|r| r.type_name == "int").unwrap();

		assert_eq!(int.data_type, 4);
		assert_eq!(int.precision, 10);
		assert_eq!(int.literal_quote, None);
		assert!(!int.unsigned_attribute);
		assert_eq!(int.num_prec_radix, Some(10));
	}

	#[test]
	fn test_unbounded_scale_saturates() {
		let rows = build_types(&StandardTypeRegistry::new()).unwrap();
		let decimal = rows.iter().find(|r| r.type_name == "decimal").unwrap();
		assert_eq!(decimal.maximum_scale, i16::MAX);

		let time = rows.iter().find(|r| r.type_name == "time").unwrap();
		assert_eq!(time.maximum_scale, 9);
	}

	static STANDARD: StandardTypeRegistry = StandardTypeRegistry;

	struct Partial;

	impl TypeRegistry for Partial {
		fn lookup(&self, name: &str) -> Option<&TypeDescriptor> {
			if name == "blob" {
				None
			} else {
				STANDARD.lookup(name)
			}
		}
	}

	#[test]
	fn test_registry_gap_is_fatal() {
		let err = build_types(&Partial).unwrap_err();
		assert_eq!(err.code, "REGISTRY_001");
		assert!(err.message.contains("blob"));
	}
}
