// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::Diagnostic;

/// A function's parameter names and parameter types differ in length
pub fn parameter_arity_mismatch(keyspace: &str, function: &str, names: usize, types: usize) -> Diagnostic {
	Diagnostic {
		code: "SCHEMA_001".to_string(),
		message: format!(
			"function `{}.{}` declares {} parameter names but {} parameter types",
			keyspace, function, names, types
		),
		label: Some("parameter list mismatch".to_string()),
		help: Some("refresh the schema snapshot; names and types are bound by position".to_string()),
		notes: vec!["the schema snapshot is inconsistent".to_string()],
		cause: None,
	}
}
