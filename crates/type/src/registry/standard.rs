// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use indexmap::IndexMap;
use once_cell::sync::Lazy;

use crate::{DataType, SqlType, TypeDescriptor, TypeRegistry};

const UNBOUNDED: i32 = i32::MAX;

static DESCRIPTORS: Lazy<IndexMap<&'static str, TypeDescriptor>> = Lazy::new(|| {
	DataType::ALL.into_iter().map(|ty| (ty.name(), describe(ty))).collect()
});

fn describe(ty: DataType) -> TypeDescriptor {
	let (sql_type, precision, scale) = match ty {
		DataType::Ascii | DataType::Text | DataType::Varchar => (SqlType::Varchar, UNBOUNDED, 0),
		DataType::Bigint | DataType::Counter => (SqlType::BigInt, 19, 0),
		DataType::Blob => (SqlType::Binary, UNBOUNDED, 0),
		DataType::Boolean => (SqlType::Boolean, 1, 0),
		DataType::Date => (SqlType::Date, 10, 0),
		DataType::Decimal => (SqlType::Decimal, UNBOUNDED, UNBOUNDED),
		DataType::Double => (SqlType::Double, 15, 15),
		DataType::Float => (SqlType::Float, 7, 7),
		DataType::Int => (SqlType::Integer, 10, 0),
		DataType::Smallint => (SqlType::SmallInt, 5, 0),
		DataType::Time => (SqlType::Time, 18, 9),
		DataType::Timestamp => (SqlType::Timestamp, 31, 3),
		DataType::Tinyint => (SqlType::TinyInt, 3, 0),
		DataType::Varint => (SqlType::Numeric, UNBOUNDED, 0),
		DataType::Uuid | DataType::Timeuuid => (SqlType::Other, 36, 0),
		DataType::Inet => (SqlType::Other, 39, 0),
		DataType::Duration | DataType::Tuple => (SqlType::Other, UNBOUNDED, 0),
		DataType::List | DataType::Set | DataType::Vector => (SqlType::Array, UNBOUNDED, 0),
		DataType::Map | DataType::Udt => (SqlType::JavaObject, UNBOUNDED, 0),
	};

	TypeDescriptor {
		name: ty.name().to_string(),
		sql_type,
		precision,
		scale,
		signed: ty.is_number(),
		case_sensitive: ty.is_text(),
		needs_quotes: ty.is_text() || matches!(ty, DataType::Date | DataType::Time | DataType::Timestamp | DataType::Inet),
		currency: false,
		radix: ty.is_number().then_some(10),
	}
}

/// The built-in registry covering every [`DataType`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardTypeRegistry;

impl StandardTypeRegistry {
	pub fn new() -> Self {
		Self
	}

	pub fn descriptors(&self) -> impl Iterator<Item = &'static TypeDescriptor> {
		DESCRIPTORS.values()
	}
}

impl TypeRegistry for StandardTypeRegistry {
	fn lookup(&self, name: &str) -> Option<&TypeDescriptor> {
		DESCRIPTORS.get(name)
	}
}
