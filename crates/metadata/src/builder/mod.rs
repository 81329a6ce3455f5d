// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metacat_catalog::{ClusterSnapshot, FunctionSignature};
use metacat_type::{ColumnType, Result, TypeDescriptor, TypeRegistry};
use tracing::warn;

use crate::MetadataConfig;

mod function_columns;
mod functions;
mod types;
mod udts;

pub(crate) use function_columns::build_function_columns;
pub(crate) use functions::build_functions;
pub(crate) use types::build_types;
pub(crate) use udts::build_udts;

/// Everything a builder reads: one snapshot, the registry and the config.
pub(crate) struct BuildContext<'a, R: ?Sized> {
	pub snapshot: &'a ClusterSnapshot,
	pub registry: &'a R,
	pub config: &'a MetadataConfig,
}

impl<'a, R: TypeRegistry + ?Sized> BuildContext<'a, R> {
	pub fn catalog(&self) -> Option<String> {
		self.config.catalog.clone().or_else(|| self.snapshot.catalog.clone())
	}

	pub fn resolve(&self, ty: &ColumnType) -> Result<&'a TypeDescriptor> {
		resolve(self.registry, ty)
	}

	pub fn specific_name(&self, signature: &FunctionSignature) -> String {
		if self.config.distinct_overloads {
			signature.overload_name()
		} else {
			signature.name.clone()
		}
	}
}

/// The type's maximum scale, saturated to fit a short column.
pub(crate) fn short_scale(descriptor: &TypeDescriptor) -> i16 {
	i16::try_from(descriptor.scale_for(None)).unwrap_or(i16::MAX)
}

pub(crate) fn resolve<'r, R: TypeRegistry + ?Sized>(registry: &'r R, ty: &ColumnType) -> Result<&'r TypeDescriptor> {
	registry.resolve(ty).inspect_err(|err| {
		warn!(type_name = %ty, code = %err.code, "declared type has no registry descriptor");
	})
}
