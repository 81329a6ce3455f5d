// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metacat_type::{
	Result,
	error::diagnostic::catalog::{keyspace_not_found, object_not_found, type_already_exists},
	return_error,
};
use tracing::instrument;

use crate::{MaterializedSchema, UdtDef};

impl MaterializedSchema {
	#[instrument(name = "catalog::udt::create", level = "debug", skip(self, udt), fields(keyspace = %udt.keyspace, name = %udt.name))]
	pub fn create_type(&self, udt: UdtDef) -> Result<()> {
		self.update(|snapshot| {
			let Some(keyspace) = snapshot.keyspaces.get_mut(&udt.keyspace) else {
				return_error!(keyspace_not_found(&udt.keyspace));
			};
			if keyspace.types.contains_key(&udt.name) {
				return_error!(type_already_exists(&udt.keyspace, &udt.name));
			}
			keyspace.types.insert(udt.name.clone(), udt);
			Ok(())
		})
	}

	#[instrument(name = "catalog::udt::drop", level = "debug", skip(self))]
	pub fn drop_type(&self, keyspace: &str, name: &str) -> Result<UdtDef> {
		self.update(|snapshot| {
			let Some(def) = snapshot.keyspaces.get_mut(keyspace) else {
				return_error!(keyspace_not_found(keyspace));
			};
			match def.types.shift_remove(name) {
				Some(udt) => Ok(udt),
				None => return_error!(object_not_found(keyspace, name)),
			}
		})
	}
}
