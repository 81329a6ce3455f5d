// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use crate::error::Diagnostic;

pub fn keyspace_already_exists(keyspace: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_001".to_string(),
		message: format!("keyspace `{}` already exists", keyspace),
		label: Some("duplicate keyspace".to_string()),
		help: Some("choose a different name or drop the existing keyspace first".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn keyspace_not_found(keyspace: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_002".to_string(),
		message: format!("keyspace `{}` not found", keyspace),
		label: Some("unknown keyspace".to_string()),
		help: Some("create the keyspace before adding objects to it".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn type_already_exists(keyspace: &str, name: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_003".to_string(),
		message: format!("type `{}.{}` already exists", keyspace, name),
		label: Some("duplicate type".to_string()),
		help: None,
		notes: vec![],
		cause: None,
	}
}

pub fn function_already_exists(keyspace: &str, signature: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_004".to_string(),
		message: format!("function `{}.{}` already exists", keyspace, signature),
		label: Some("duplicate function signature".to_string()),
		help: Some("overloads must differ in their parameter types".to_string()),
		notes: vec![],
		cause: None,
	}
}

pub fn object_not_found(keyspace: &str, name: &str) -> Diagnostic {
	Diagnostic {
		code: "CATALOG_005".to_string(),
		message: format!("`{}.{}` not found", keyspace, name),
		label: None,
		help: None,
		notes: vec![],
		cause: None,
	}
}
