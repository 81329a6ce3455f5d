// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metacat_type::{
	Result,
	error::diagnostic::catalog::{keyspace_already_exists, keyspace_not_found},
	return_error,
};
use tracing::{debug, instrument};

use crate::{KeyspaceDef, MaterializedSchema};

impl MaterializedSchema {
	#[instrument(name = "catalog::keyspace::create", level = "debug", skip(self))]
	pub fn create_keyspace(&self, name: &str) -> Result<()> {
		self.update(|snapshot| {
			if snapshot.keyspaces.contains_key(name) {
				return_error!(keyspace_already_exists(name));
			}
			snapshot.keyspaces.insert(name.to_string(), KeyspaceDef::new(name));
			debug!(keyspaces = snapshot.keyspaces.len(), "keyspace created");
			Ok(())
		})
	}

	/// Removes a keyspace together with its types and functions.
	#[instrument(name = "catalog::keyspace::drop", level = "debug", skip(self))]
	pub fn drop_keyspace(&self, name: &str) -> Result<KeyspaceDef> {
		self.update(|snapshot| match snapshot.keyspaces.shift_remove(name) {
			Some(keyspace) => Ok(keyspace),
			None => return_error!(keyspace_not_found(name)),
		})
	}
}
