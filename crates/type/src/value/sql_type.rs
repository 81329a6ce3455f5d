// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Generic SQL type codes as defined by the JDBC `java.sql.Types` contract.
///
/// Catalog consumers identify column types by these numeric codes, so the
/// values are part of the wire surface and must never change.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SqlType {
	Bit,
	TinyInt,
	SmallInt,
	Integer,
	BigInt,
	Float,
	Real,
	Double,
	Numeric,
	Decimal,
	Char,
	Varchar,
	LongVarchar,
	Date,
	Time,
	Timestamp,
	Binary,
	VarBinary,
	LongVarBinary,
	Null,
	Other,
	/// Opaque object category. Every user-defined type is classified here.
	JavaObject,
	Distinct,
	Struct,
	Array,
	Blob,
	Clob,
	Ref,
	Datalink,
	Boolean,
	RowId,
	NChar,
	NVarchar,
	LongNVarchar,
	NClob,
	SqlXml,
	RefCursor,
	TimeWithTimezone,
	TimestampWithTimezone,
}

impl SqlType {
	pub const ALL: [SqlType; 39] = [
		SqlType::Bit,
		SqlType::TinyInt,
		SqlType::SmallInt,
		SqlType::Integer,
		SqlType::BigInt,
		SqlType::Float,
		SqlType::Real,
		SqlType::Double,
		SqlType::Numeric,
		SqlType::Decimal,
		SqlType::Char,
		SqlType::Varchar,
		SqlType::LongVarchar,
		SqlType::Date,
		SqlType::Time,
		SqlType::Timestamp,
		SqlType::Binary,
		SqlType::VarBinary,
		SqlType::LongVarBinary,
		SqlType::Null,
		SqlType::Other,
		SqlType::JavaObject,
		SqlType::Distinct,
		SqlType::Struct,
		SqlType::Array,
		SqlType::Blob,
		SqlType::Clob,
		SqlType::Ref,
		SqlType::Datalink,
		SqlType::Boolean,
		SqlType::RowId,
		SqlType::NChar,
		SqlType::NVarchar,
		SqlType::LongNVarchar,
		SqlType::NClob,
		SqlType::SqlXml,
		SqlType::RefCursor,
		SqlType::TimeWithTimezone,
		SqlType::TimestampWithTimezone,
	];

	pub fn code(&self) -> i32 {
		match self {
			SqlType::Bit => -7,
			SqlType::TinyInt => -6,
			SqlType::SmallInt => 5,
			SqlType::Integer => 4,
			SqlType::BigInt => -5,
			SqlType::Float => 6,
			SqlType::Real => 7,
			SqlType::Double => 8,
			SqlType::Numeric => 2,
			SqlType::Decimal => 3,
			SqlType::Char => 1,
			SqlType::Varchar => 12,
			SqlType::LongVarchar => -1,
			SqlType::Date => 91,
			SqlType::Time => 92,
			SqlType::Timestamp => 93,
			SqlType::Binary => -2,
			SqlType::VarBinary => -3,
			SqlType::LongVarBinary => -4,
			SqlType::Null => 0,
			SqlType::Other => 1111,
			SqlType::JavaObject => 2000,
			SqlType::Distinct => 2001,
			SqlType::Struct => 2002,
			SqlType::Array => 2003,
			SqlType::Blob => 2004,
			SqlType::Clob => 2005,
			SqlType::Ref => 2006,
			SqlType::Datalink => 70,
			SqlType::Boolean => 16,
			SqlType::RowId => -8,
			SqlType::NChar => -15,
			SqlType::NVarchar => -9,
			SqlType::LongNVarchar => -16,
			SqlType::NClob => 2011,
			SqlType::SqlXml => 2009,
			SqlType::RefCursor => 2012,
			SqlType::TimeWithTimezone => 2013,
			SqlType::TimestampWithTimezone => 2014,
		}
	}

	pub fn from_code(code: i32) -> Option<Self> {
		SqlType::ALL.into_iter().find(|t| t.code() == code)
	}

	pub fn name(&self) -> &'static str {
		match self {
			SqlType::Bit => "BIT",
			SqlType::TinyInt => "TINYINT",
			SqlType::SmallInt => "SMALLINT",
			SqlType::Integer => "INTEGER",
			SqlType::BigInt => "BIGINT",
			SqlType::Float => "FLOAT",
			SqlType::Real => "REAL",
			SqlType::Double => "DOUBLE",
			SqlType::Numeric => "NUMERIC",
			SqlType::Decimal => "DECIMAL",
			SqlType::Char => "CHAR",
			SqlType::Varchar => "VARCHAR",
			SqlType::LongVarchar => "LONGVARCHAR",
			SqlType::Date => "DATE",
			SqlType::Time => "TIME",
			SqlType::Timestamp => "TIMESTAMP",
			SqlType::Binary => "BINARY",
			SqlType::VarBinary => "VARBINARY",
			SqlType::LongVarBinary => "LONGVARBINARY",
			SqlType::Null => "NULL",
			SqlType::Other => "OTHER",
			SqlType::JavaObject => "JAVA_OBJECT",
			SqlType::Distinct => "DISTINCT",
			SqlType::Struct => "STRUCT",
			SqlType::Array => "ARRAY",
			SqlType::Blob => "BLOB",
			SqlType::Clob => "CLOB",
			SqlType::Ref => "REF",
			SqlType::Datalink => "DATALINK",
			SqlType::Boolean => "BOOLEAN",
			SqlType::RowId => "ROWID",
			SqlType::NChar => "NCHAR",
			SqlType::NVarchar => "NVARCHAR",
			SqlType::LongNVarchar => "LONGNVARCHAR",
			SqlType::NClob => "NCLOB",
			SqlType::SqlXml => "SQLXML",
			SqlType::RefCursor => "REF_CURSOR",
			SqlType::TimeWithTimezone => "TIME_WITH_TIMEZONE",
			SqlType::TimestampWithTimezone => "TIMESTAMP_WITH_TIMEZONE",
		}
	}
}

impl Display for SqlType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

#[cfg(test)]
mod tests {
	use std::collections::HashSet;

	use super::*;

	#[test]
	fn test_codes_are_unique() {
		let codes: HashSet<i32> = SqlType::ALL.iter().map(SqlType::code).collect();
		assert_eq!(codes.len(), SqlType::ALL.len());
	}

	#[test]
	fn test_from_code() {
		assert_eq!(SqlType::from_code(2000), Some(SqlType::JavaObject));
		assert_eq!(SqlType::from_code(2002), Some(SqlType::Struct));
		assert_eq!(SqlType::from_code(-5), Some(SqlType::BigInt));
		assert_eq!(SqlType::from_code(424242), None);
	}
}
