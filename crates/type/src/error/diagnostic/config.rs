// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::Diagnostic;

/// A configuration document could not be read
pub fn invalid_config(source: &str, reason: impl Into<String>) -> Diagnostic {
	Diagnostic {
		code: "CONFIG_001".to_string(),
		message: format!("invalid {} configuration: {}", source, reason.into()),
		label: Some("invalid configuration".to_string()),
		help: Some("unknown fields are rejected; missing fields fall back to their defaults".to_string()),
		notes: vec![],
		cause: None,
	}
}
