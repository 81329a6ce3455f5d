// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::Diagnostic;

/// A CQL type expression could not be parsed
pub fn invalid_type_expression(text: &str, reason: impl Into<String>) -> Diagnostic {
	let reason = reason.into();
	Diagnostic {
		code: "TYPE_001".to_string(),
		message: format!("invalid type expression `{}`: {}", text, reason),
		label: Some(reason),
		help: Some("use CQL syntax, e.g. `int`, `list<text>`, `map<text, frozen<ks.address>>`".to_string()),
		notes: vec![],
		cause: None,
	}
}
