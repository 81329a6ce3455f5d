// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::Diagnostic;

/// A row of a different catalog kind was handed to a result
pub fn row_kind_mismatch(expected: &str, actual: &str, position: usize) -> Diagnostic {
	Diagnostic {
		code: "RESULT_001".to_string(),
		message: format!("cannot build a `{}` result: row {} is a `{}` row", expected, position, actual),
		label: Some("heterogeneous column set".to_string()),
		help: None,
		notes: vec!["every row of a metadata result shares the same column set".to_string()],
		cause: None,
	}
}

/// A row left a non-nullable column empty
pub fn null_in_required_column(catalog: &str, column: &str, position: usize) -> Diagnostic {
	Diagnostic {
		code: "RESULT_002".to_string(),
		message: format!("cannot build a `{}` result: row {} has no value for `{}`", catalog, position, column),
		label: Some("column is not nullable".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

/// A row value cannot be read as its column's declared kind
pub fn value_kind_mismatch(catalog: &str, column: &str, kind: &str, value: &str, position: usize) -> Diagnostic {
	Diagnostic {
		code: "RESULT_003".to_string(),
		message: format!(
			"cannot build a `{}` result: row {} value `{}` for `{}` is not a valid {}",
			catalog, position, value, column, kind
		),
		label: Some("value does not fit the column kind".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}
