// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::DataType;

mod parse;

pub use parse::ColumnTypeParseError;

/// A CQL type expression as declared by a schema object: a native type, a
/// collection, a tuple, a vector, a user-defined type or a custom class.
#[derive(Clone, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnType {
	Native(DataType),
	List(Box<ColumnType>),
	Set(Box<ColumnType>),
	Map(Box<ColumnType>, Box<ColumnType>),
	Tuple(Vec<ColumnType>),
	Vector(Box<ColumnType>, u32),
	Udt {
		keyspace: Option<String>,
		name: String,
	},
	Frozen(Box<ColumnType>),
	/// A custom type named by its implementing class
	Custom(String),
}

impl ColumnType {
	pub fn list(element: impl Into<ColumnType>) -> Self {
		ColumnType::List(Box::new(element.into()))
	}

	pub fn set(element: impl Into<ColumnType>) -> Self {
		ColumnType::Set(Box::new(element.into()))
	}

	pub fn map(key: impl Into<ColumnType>, value: impl Into<ColumnType>) -> Self {
		ColumnType::Map(Box::new(key.into()), Box::new(value.into()))
	}

	pub fn frozen(inner: impl Into<ColumnType>) -> Self {
		ColumnType::Frozen(Box::new(inner.into()))
	}

	pub fn udt(keyspace: impl Into<String>, name: impl Into<String>) -> Self {
		ColumnType::Udt {
			keyspace: Some(keyspace.into()),
			name: name.into(),
		}
	}

	/// Canonical registry key: the base type name with all parameters and
	/// `frozen` wrappers stripped (`frozen<list<int>>` is looked up as `list`).
	pub fn registry_key(&self) -> &str {
		match self {
			ColumnType::Native(ty) => ty.name(),
			ColumnType::List(_) => DataType::List.name(),
			ColumnType::Set(_) => DataType::Set.name(),
			ColumnType::Map(_, _) => DataType::Map.name(),
			ColumnType::Tuple(_) => DataType::Tuple.name(),
			ColumnType::Vector(_, _) => DataType::Vector.name(),
			ColumnType::Udt {
				..
			} => DataType::Udt.name(),
			ColumnType::Frozen(inner) => inner.registry_key(),
			ColumnType::Custom(class) => class.as_str(),
		}
	}

	/// Fills in `keyspace` for every user-defined type that does not name
	/// one, at any nesting depth.
	pub fn qualified(&self, keyspace: &str) -> ColumnType {
		let qualify = |ty: &ColumnType| Box::new(ty.qualified(keyspace));
		match self {
			ColumnType::Udt {
				keyspace: None,
				name,
			} => ColumnType::udt(keyspace, name.clone()),
			ColumnType::List(element) => ColumnType::List(qualify(element)),
			ColumnType::Set(element) => ColumnType::Set(qualify(element)),
			ColumnType::Map(key, value) => ColumnType::Map(qualify(key), qualify(value)),
			ColumnType::Tuple(items) => ColumnType::Tuple(items.iter().map(|ty| ty.qualified(keyspace)).collect()),
			ColumnType::Vector(element, dimension) => ColumnType::Vector(qualify(element), *dimension),
			ColumnType::Frozen(inner) => ColumnType::Frozen(qualify(inner)),
			other => other.clone(),
		}
	}
}

impl From<DataType> for ColumnType {
	fn from(ty: DataType) -> Self {
		ColumnType::Native(ty)
	}
}

impl FromStr for ColumnType {
	type Err = crate::Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		parse::parse(s)
	}
}

fn write_list(f: &mut Formatter<'_>, items: &[ColumnType]) -> std::fmt::Result {
	for (idx, item) in items.iter().enumerate() {
		if idx > 0 {
			f.write_str(", ")?;
		}
		write!(f, "{}", item)?;
	}
	Ok(())
}

/// Renders the lowercase CQL form; user-defined types are fully qualified
/// whenever their keyspace is known.
impl Display for ColumnType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ColumnType::Native(ty) => write!(f, "{}", ty),
			ColumnType::List(element) => write!(f, "list<{}>", element),
			ColumnType::Set(element) => write!(f, "set<{}>", element),
			ColumnType::Map(key, value) => write!(f, "map<{}, {}>", key, value),
			ColumnType::Tuple(items) => {
				f.write_str("tuple<")?;
				write_list(f, items)?;
				f.write_str(">")
			}
			ColumnType::Vector(element, dimension) => write!(f, "vector<{}, {}>", element, dimension),
			ColumnType::Udt {
				keyspace: Some(keyspace),
				name,
			} => write!(f, "{}.{}", keyspace, name),
			ColumnType::Udt {
				keyspace: None,
				name,
			} => f.write_str(name),
			ColumnType::Frozen(inner) => write!(f, "frozen<{}>", inner),
			ColumnType::Custom(class) => write!(f, "'{}'", class),
		}
	}
}
