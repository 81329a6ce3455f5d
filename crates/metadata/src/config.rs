// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metacat_type::{Result, error, error::diagnostic::config::invalid_config};
use serde::{Deserialize, Serialize};

pub const DEFAULT_UDT_CLASS_NAME: &str = "com.datastax.oss.driver.api.core.data.UdtValue";

/// Configuration for a [`MetadataService`](crate::MetadataService)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MetadataConfig {
	/// Reported as the catalog column instead of the snapshot's cluster name
	pub catalog: Option<String>,
	/// Implementation class reported for every user-defined type
	pub udt_class_name: String,
	/// Report overloads as `name(type, ...)` in `SPECIFIC_NAME` instead of
	/// the bare function name
	pub distinct_overloads: bool,
}

impl Default for MetadataConfig {
	fn default() -> Self {
		Self {
			catalog: None,
			udt_class_name: DEFAULT_UDT_CLASS_NAME.to_string(),
			distinct_overloads: false,
		}
	}
}

impl MetadataConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn catalog(mut self, catalog: impl Into<String>) -> Self {
		self.catalog = Some(catalog.into());
		self
	}

	pub fn udt_class_name(mut self, class_name: impl Into<String>) -> Self {
		self.udt_class_name = class_name.into();
		self
	}

	pub fn distinct_overloads(mut self, distinct: bool) -> Self {
		self.distinct_overloads = distinct;
		self
	}

	pub fn from_json(json: &str) -> Result<Self> {
		serde_json::from_str(json).map_err(|err| error!(invalid_config("metadata", err.to_string())))
	}
}

#[cfg(test)]
mod tests {
	use metacat_type::FailureKind;

	use super::*;

	#[test]
	fn test_defaults() {
		let config = MetadataConfig::default();
		assert_eq!(config.catalog, None);
		assert_eq!(config.udt_class_name, DEFAULT_UDT_CLASS_NAME);
		assert!(!config.distinct_overloads);
	}

	#[test]
	fn test_builder() {
		let config = MetadataConfig::new().catalog("prod").udt_class_name("my.Udt").distinct_overloads(true);
		assert_eq!(config.catalog.as_deref(), Some("prod"));
		assert_eq!(config.udt_class_name, "my.Udt");
		assert!(config.distinct_overloads);
	}

	#[test]
	fn test_from_json_fills_missing_fields() {
		let config = MetadataConfig::from_json(r#"{ "distinct_overloads": true }"#).unwrap();
		assert!(config.distinct_overloads);
		assert_eq!(config.udt_class_name, DEFAULT_UDT_CLASS_NAME);

		assert_eq!(MetadataConfig::from_json("{}").unwrap(), MetadataConfig::default());
	}

	#[test]
	fn test_from_json_rejects_garbage() {
		let err = MetadataConfig::from_json(r#"{ "overloads": 1 }"#).unwrap_err();
		assert_eq!(err.code, "CONFIG_001");
		assert_eq!(err.kind(), FailureKind::Configuration);
		assert!(MetadataConfig::from_json("not json").is_err());
	}
}
