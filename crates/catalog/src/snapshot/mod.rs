// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Point-in-time view of a cluster's schema.
//!
//! A [`ClusterSnapshot`] is never mutated once it has been handed out; the
//! live [`MaterializedSchema`](crate::MaterializedSchema) builds a fresh
//! snapshot for every change. Keyspaces, types and functions keep their
//! insertion order, which is the order the metadata builders visit them in.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

mod function;
mod keyspace;
mod udt;

pub use function::{FunctionDef, FunctionSignature};
pub use keyspace::KeyspaceDef;
pub use udt::{UdtDef, UdtField};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClusterSnapshot {
	/// Cluster-level name reported as the catalog column; absent when the
	/// cluster is unnamed.
	pub catalog: Option<String>,
	pub keyspaces: IndexMap<String, KeyspaceDef>,
}

impl ClusterSnapshot {
	pub fn new(catalog: Option<String>) -> Self {
		Self {
			catalog,
			keyspaces: IndexMap::new(),
		}
	}

	pub fn with_keyspace(mut self, keyspace: KeyspaceDef) -> Self {
		self.keyspaces.insert(keyspace.name.clone(), keyspace);
		self
	}

	pub fn find_keyspace(&self, name: &str) -> Option<&KeyspaceDef> {
		self.keyspaces.get(name)
	}

	pub fn keyspaces(&self) -> impl Iterator<Item = &KeyspaceDef> {
		self.keyspaces.values()
	}
}
