// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use serde::{Deserialize, Serialize};

use crate::{ColumnType, SqlType, error, error::diagnostic::registry::unknown_type};

mod standard;

pub use standard::StandardTypeRegistry;

/// Maps canonical type names to their SQL-level description.
pub trait TypeRegistry: Send + Sync {
	/// Looks up a descriptor by exact canonical name.
	fn lookup(&self, name: &str) -> Option<&TypeDescriptor>;

	/// Resolves the descriptor for a declared column type, failing with
	/// `REGISTRY_001` when none is registered.
	fn resolve(&self, ty: &ColumnType) -> crate::Result<&TypeDescriptor> {
		let key = ty.registry_key();
		self.lookup(key).ok_or_else(|| error!(unknown_type(key)))
	}
}

impl<T: TypeRegistry + ?Sized> TypeRegistry for &T {
	fn lookup(&self, name: &str) -> Option<&TypeDescriptor> {
		(**self).lookup(name)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
	pub name: String,
	pub sql_type: SqlType,
	pub precision: i32,
	pub scale: i32,
	pub signed: bool,
	pub case_sensitive: bool,
	pub needs_quotes: bool,
	pub currency: bool,
	pub radix: Option<i32>,
}

impl TypeDescriptor {
	pub fn sql_code(&self) -> i32 {
		self.sql_type.code()
	}

	/// Precision of a concrete literal of this type, or the type's maximum
	/// precision when no literal is given.
	pub fn precision_for(&self, literal: Option<&str>) -> i32 {
		let Some(literal) = literal else {
			return self.precision;
		};
		if self.case_sensitive {
			return clamp(literal.chars().count());
		}
		if self.radix.is_some() {
			return clamp(literal.chars().filter(char::is_ascii_digit).count()).min(self.precision);
		}
		self.precision
	}

	/// Scale of a concrete literal of this type, or the type's maximum scale
	/// when no literal is given.
	pub fn scale_for(&self, literal: Option<&str>) -> i32 {
		let Some(literal) = literal else {
			return self.scale;
		};
		if self.radix.is_none() || self.scale == 0 {
			return self.scale;
		}
		let fraction = match literal.split_once('.') {
			Some((_, fraction)) => fraction.split(['e', 'E']).next().unwrap_or_default(),
			None => "",
		};
		clamp(fraction.chars().filter(char::is_ascii_digit).count()).min(self.scale)
	}
}

fn clamp(n: usize) -> i32 {
	i32::try_from(n).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::DataType;

	#[test]
	fn test_resolve_strips_parameters() {
		let registry = StandardTypeRegistry::new();
		let ty: ColumnType = "frozen<map<text, int>>".parse().unwrap();
		assert_eq!(registry.resolve(&ty).unwrap().sql_type, SqlType::JavaObject);
	}

	#[test]
	fn test_resolve_unknown_custom_type() {
		let registry = StandardTypeRegistry::new();
		let err = registry.resolve(&ColumnType::Custom("org.example.Point".to_string())).unwrap_err();
		assert_eq!(err.code, "REGISTRY_001");
		assert!(err.message.contains("org.example.Point"));
	}

	#[test]
	fn test_precision_for_literal() {
		let registry = StandardTypeRegistry::new();
		let text = registry.lookup(DataType::Text.name()).unwrap();
		assert_eq!(text.precision_for(None), i32::MAX);
		assert_eq!(text.precision_for(Some("héllo")), 5);

		let decimal = registry.lookup(DataType::Decimal.name()).unwrap();
		assert_eq!(decimal.precision_for(Some("-12.345")), 5);
		assert_eq!(decimal.scale_for(Some("-12.345")), 3);
		assert_eq!(decimal.scale_for(Some("12")), 0);

		let tinyint = registry.lookup(DataType::Tinyint.name()).unwrap();
		assert_eq!(tinyint.precision_for(Some("12345")), 3);
		assert_eq!(tinyint.scale_for(Some("12")), 0);
	}

	#[test]
	fn test_descriptor_serde_round_trip() {
		let registry = StandardTypeRegistry::new();
		let decimal = registry.lookup(DataType::Decimal.name()).unwrap();

		let json = serde_json::to_value(decimal).unwrap();
		assert_eq!(json["name"], "decimal");
		assert_eq!(json["sql_type"], "Decimal");
		assert_eq!(json["radix"], 10);
		assert_eq!(&serde_json::from_value::<TypeDescriptor>(json).unwrap(), decimal);
	}
}
