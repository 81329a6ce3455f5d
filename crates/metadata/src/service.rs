// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metacat_catalog::SchemaSource;
use metacat_type::{Result, SqlType, TypeRegistry};
use tracing::instrument;

use crate::{
	MetadataConfig,
	builder::{BuildContext, build_function_columns, build_functions, build_types, build_udts},
	result::{MetadataResult, assemble},
};

/// Builds catalog views over a schema source.
///
/// The service holds no state of its own: every call takes a fresh snapshot
/// from the source, so consecutive calls against an unchanged source return
/// identical results.
pub struct MetadataService<S, R> {
	source: S,
	registry: R,
	config: MetadataConfig,
}

impl<S: SchemaSource, R: TypeRegistry> MetadataService<S, R> {
	pub fn new(source: S, registry: R) -> Self {
		Self::with_config(source, registry, MetadataConfig::default())
	}

	pub fn with_config(source: S, registry: R, config: MetadataConfig) -> Self {
		Self {
			source,
			registry,
			config,
		}
	}

	pub fn config(&self) -> &MetadataConfig {
		&self.config
	}

	pub fn source(&self) -> &S {
		&self.source
	}

	/// Every supported type, ordered by SQL type code.
	#[instrument(name = "metadata::list_types", level = "debug", skip(self))]
	pub fn list_types(&self) -> Result<MetadataResult> {
		assemble(build_types(&self.registry)?)
	}

	/// User-defined types, ordered by schema then name.
	///
	/// `type_name_pattern` may be qualified as `schema.name`, in which case its
	/// schema replaces `schema_pattern`. With a `category_filter` that does not
	/// include [`SqlType::JavaObject`] the result is empty.
	#[instrument(name = "metadata::list_user_defined_types", level = "debug", skip(self))]
	pub fn list_user_defined_types(
		&self,
		schema_pattern: Option<&str>,
		type_name_pattern: Option<&str>,
		category_filter: Option<&[SqlType]>,
	) -> Result<MetadataResult> {
		let snapshot = self.source.snapshot();
		let ctx = self.context(&snapshot);
		assemble(build_udts(&ctx, schema_pattern, type_name_pattern, category_filter))
	}

	/// Functions, ordered by schema then name.
	#[instrument(name = "metadata::list_functions", level = "debug", skip(self))]
	pub fn list_functions(
		&self,
		schema_pattern: Option<&str>,
		function_name_pattern: Option<&str>,
	) -> Result<MetadataResult> {
		let snapshot = self.source.snapshot();
		let ctx = self.context(&snapshot);
		assemble(build_functions(&ctx, schema_pattern, function_name_pattern))
	}

	/// Return values and parameters of functions, ordered by schema, function
	/// name, specific name and ordinal position.
	#[instrument(name = "metadata::list_function_columns", level = "debug", skip(self))]
	pub fn list_function_columns(
		&self,
		schema_pattern: Option<&str>,
		function_name_pattern: Option<&str>,
		column_name_pattern: Option<&str>,
	) -> Result<MetadataResult> {
		let snapshot = self.source.snapshot();
		let ctx = self.context(&snapshot);
		assemble(build_function_columns(&ctx, schema_pattern, function_name_pattern, column_name_pattern)?)
	}

	fn context<'a>(&'a self, snapshot: &'a metacat_catalog::ClusterSnapshot) -> BuildContext<'a, R> {
		BuildContext {
			snapshot,
			registry: &self.registry,
			config: &self.config,
		}
	}
}
