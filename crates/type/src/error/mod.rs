// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::{
	fmt::{Display, Formatter},
	ops::Deref,
};

use serde::{Deserialize, Serialize};

pub mod diagnostic;
mod r#macro;
mod render;

pub use render::DefaultRenderer;

/// A structured, renderable description of a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

impl Display for Diagnostic {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.code)
	}
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

/// Classifies an [`Error`] by the family of its diagnostic code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
	/// Rows could not be packaged into a deliverable result.
	Construction,
	/// The schema snapshot or the type registry is inconsistent.
	Consistency,
	/// A schema source mutation was rejected.
	Catalog,
	/// A type expression could not be parsed.
	Parse,
	/// A configuration document was rejected.
	Configuration,
	/// An internal invariant was violated.
	Internal,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}

	pub fn kind(&self) -> FailureKind {
		let code = self.0.code.as_str();
		if code.starts_with("RESULT_") {
			FailureKind::Construction
		} else if code.starts_with("REGISTRY_") || code.starts_with("SCHEMA_") {
			FailureKind::Consistency
		} else if code.starts_with("CATALOG_") {
			FailureKind::Catalog
		} else if code.starts_with("TYPE_") {
			FailureKind::Parse
		} else if code.starts_with("CONFIG_") {
			FailureKind::Configuration
		} else {
			FailureKind::Internal
		}
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(diagnostic)
	}
}
