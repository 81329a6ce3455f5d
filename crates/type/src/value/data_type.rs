// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// The fixed universe of CQL data types known to the type registry.
///
/// Parameterized kinds (`list`, `map`, `set`, `tuple`, `udt`, `vector`) are
/// listed by their base name only; their element types live in
/// [`ColumnType`](crate::ColumnType).
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
	/// US-ASCII character string
	Ascii,
	/// 64-bit signed integer
	Bigint,
	/// Arbitrary bytes
	Blob,
	/// true or false
	Boolean,
	/// 64-bit distributed counter
	Counter,
	/// A date without time of day
	Date,
	/// Variable-precision decimal
	Decimal,
	/// 64-bit IEEE-754 floating point
	Double,
	/// A duration with nanosecond precision
	Duration,
	/// 32-bit IEEE-754 floating point
	Float,
	/// An IPv4 or IPv6 address
	Inet,
	/// 32-bit signed integer
	Int,
	/// Ordered collection
	List,
	/// Key-value collection
	Map,
	/// Unordered collection of unique values
	Set,
	/// 16-bit signed integer
	Smallint,
	/// UTF-8 encoded string
	Text,
	/// A time of day with nanosecond precision
	Time,
	/// An instant with millisecond precision
	Timestamp,
	/// Version 1 UUID
	Timeuuid,
	/// 8-bit signed integer
	Tinyint,
	/// Fixed-length sequence of typed values
	Tuple,
	/// User-defined type
	Udt,
	/// Any UUID
	Uuid,
	/// Alias of text
	Varchar,
	/// Arbitrary-precision integer
	Varint,
	/// Fixed-length vector of a numeric element type
	Vector,
}

impl DataType {
	pub const ALL: [DataType; 27] = [
		DataType::Ascii,
		DataType::Bigint,
		DataType::Blob,
		DataType::Boolean,
		DataType::Counter,
		DataType::Date,
		DataType::Decimal,
		DataType::Double,
		DataType::Duration,
		DataType::Float,
		DataType::Inet,
		DataType::Int,
		DataType::List,
		DataType::Map,
		DataType::Set,
		DataType::Smallint,
		DataType::Text,
		DataType::Time,
		DataType::Timestamp,
		DataType::Timeuuid,
		DataType::Tinyint,
		DataType::Tuple,
		DataType::Udt,
		DataType::Uuid,
		DataType::Varchar,
		DataType::Varint,
		DataType::Vector,
	];

	/// Canonical (lowercase CQL) name, the key used for registry lookups.
	pub fn name(&self) -> &'static str {
		match self {
			DataType::Ascii => "ascii",
			DataType::Bigint => "bigint",
			DataType::Blob => "blob",
			DataType::Boolean => "boolean",
			DataType::Counter => "counter",
			DataType::Date => "date",
			DataType::Decimal => "decimal",
			DataType::Double => "double",
			DataType::Duration => "duration",
			DataType::Float => "float",
			DataType::Inet => "inet",
			DataType::Int => "int",
			DataType::List => "list",
			DataType::Map => "map",
			DataType::Set => "set",
			DataType::Smallint => "smallint",
			DataType::Text => "text",
			DataType::Time => "time",
			DataType::Timestamp => "timestamp",
			DataType::Timeuuid => "timeuuid",
			DataType::Tinyint => "tinyint",
			DataType::Tuple => "tuple",
			DataType::Udt => "udt",
			DataType::Uuid => "uuid",
			DataType::Varchar => "varchar",
			DataType::Varint => "varint",
			DataType::Vector => "vector",
		}
	}

	/// Whether the type can be written without type parameters.
	pub fn is_native(&self) -> bool {
		!matches!(
			self,
			DataType::List | DataType::Map | DataType::Set | DataType::Tuple | DataType::Udt | DataType::Vector
		)
	}

	pub fn is_text(&self) -> bool {
		matches!(self, DataType::Ascii | DataType::Text | DataType::Varchar)
	}

	pub fn is_integer(&self) -> bool {
		matches!(
			self,
			DataType::Tinyint | DataType::Smallint | DataType::Int | DataType::Bigint | DataType::Counter | DataType::Varint
		)
	}

	pub fn is_number(&self) -> bool {
		self.is_integer() || matches!(self, DataType::Decimal | DataType::Double | DataType::Float)
	}
}

impl Display for DataType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}
