// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use metacat_type::Result;
use parking_lot::RwLock;

use crate::{ClusterSnapshot, SchemaSource};

mod function;
mod keyspace;
mod udt;

/// The live schema of a cluster.
///
/// Readers take an `Arc` of the current snapshot and never observe a
/// half-applied change. Every mutation builds the next snapshot from a copy
/// of the current one and swaps it in under the write lock.
#[derive(Debug, Clone, Default)]
pub struct MaterializedSchema(Arc<RwLock<Arc<ClusterSnapshot>>>);

impl MaterializedSchema {
	pub fn new(catalog: Option<String>) -> Self {
		Self::from_snapshot(ClusterSnapshot::new(catalog))
	}

	pub fn from_snapshot(snapshot: ClusterSnapshot) -> Self {
		Self(Arc::new(RwLock::new(Arc::new(snapshot))))
	}

	pub fn set_catalog(&self, catalog: Option<String>) {
		let mut current = self.0.write();
		let mut next = ClusterSnapshot::clone(&current);
		next.catalog = catalog;
		*current = Arc::new(next);
	}

	/// Applies `change` to a copy of the current snapshot and publishes the
	/// copy only if `change` succeeds.
	pub(crate) fn update<T>(&self, change: impl FnOnce(&mut ClusterSnapshot) -> Result<T>) -> Result<T> {
		let mut current = self.0.write();
		let mut next = ClusterSnapshot::clone(&current);
		let result = change(&mut next)?;
		*current = Arc::new(next);
		Ok(result)
	}
}

impl SchemaSource for MaterializedSchema {
	fn snapshot(&self) -> Arc<ClusterSnapshot> {
		self.0.read().clone()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_snapshot_is_point_in_time() {
		let schema = MaterializedSchema::new(None);
		let before = schema.snapshot();

		schema.create_keyspace("shop").unwrap();

		assert!(before.keyspaces.is_empty());
		assert!(schema.snapshot().find_keyspace("shop").is_some());
	}

	#[test]
	fn test_set_catalog() {
		let schema = MaterializedSchema::new(None);
		schema.set_catalog(Some("cluster1".to_string()));
		assert_eq!(schema.snapshot().catalog.as_deref(), Some("cluster1"));
	}

	#[test]
	fn test_clones_share_state() {
		let schema = MaterializedSchema::default();
		let other = schema.clone();
		other.create_keyspace("billing").unwrap();
		assert!(schema.snapshot().find_keyspace("billing").is_some());
	}
}
