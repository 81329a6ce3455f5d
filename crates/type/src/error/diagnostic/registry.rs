// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::Diagnostic;

/// A declared type name has no descriptor in the type registry
pub fn unknown_type(name: impl Into<String>) -> Diagnostic {
	let name = name.into();
	Diagnostic {
		code: "REGISTRY_001".to_string(),
		message: format!("no type descriptor registered for `{}`", name),
		label: Some("unknown type".to_string()),
		help: Some("register a descriptor for this type or fix the schema that declares it".to_string()),
		notes: vec![
			"the schema snapshot declares a type the registry does not know".to_string(),
			"this indicates a registry gap, not a user error".to_string(),
		],
		cause: None,
	}
}
