// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Name filters accepted by the catalog operations.
//!
//! There is no `LIKE` matching: a filter is either unrestricted or a single
//! literal compared against whole names.

/// The only wildcard; it stands for "unrestricted" and never matches partially.
pub const WILDCARD: &str = "%";

pub const SEPARATOR: char = '.';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
	Sensitive,
	/// Unicode lowercase folding on both sides.
	Insensitive,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern<'a> {
	Any,
	Exact(&'a str),
}

impl<'a> Pattern<'a> {
	/// An absent filter or the wildcard is unrestricted; anything else is a
	/// literal.
	pub fn parse(pattern: Option<&'a str>) -> Self {
		match pattern {
			None | Some(WILDCARD) => Pattern::Any,
			Some(literal) => Pattern::Exact(literal),
		}
	}

	/// Like [`Pattern::parse`] but without wildcard semantics: `%` is taken
	/// literally.
	pub fn literal(pattern: Option<&'a str>) -> Self {
		match pattern {
			None => Pattern::Any,
			Some(literal) => Pattern::Exact(literal),
		}
	}

	pub fn is_any(&self) -> bool {
		matches!(self, Pattern::Any)
	}

	pub fn matches(&self, candidate: &str, case: Case) -> bool {
		match (self, case) {
			(Pattern::Any, _) => true,
			(Pattern::Exact(literal), Case::Sensitive) => *literal == candidate,
			(Pattern::Exact(literal), Case::Insensitive) => eq_ignore_case(literal, candidate),
		}
	}
}

fn eq_ignore_case(left: &str, right: &str) -> bool {
	left.chars().flat_map(char::to_lowercase).eq(right.chars().flat_map(char::to_lowercase))
}

/// A `schema.name` pattern split at the separator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualifiedName<'a> {
	pub schema: &'a str,
	pub name: &'a str,
}

impl<'a> QualifiedName<'a> {
	/// Splits a qualified pattern; `None` when there is no separator.
	///
	/// Only the first two pieces are kept, so `a.b.c` yields `(a, b)` and the
	/// rest is dropped. A trailing separator yields an empty name.
	pub fn split(pattern: &'a str) -> Option<Self> {
		if !pattern.contains(SEPARATOR) {
			return None;
		}
		let mut parts = pattern.split(SEPARATOR);
		let schema = parts.next().unwrap_or_default();
		let name = parts.next().unwrap_or_default();
		Some(QualifiedName {
			schema,
			name,
		})
	}
}
