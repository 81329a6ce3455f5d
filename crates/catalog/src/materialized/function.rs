// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use metacat_type::{
	Result,
	error::diagnostic::catalog::{function_already_exists, keyspace_not_found, object_not_found},
	return_error,
};
use tracing::instrument;

use crate::{FunctionDef, FunctionSignature, MaterializedSchema};

impl MaterializedSchema {
	/// Registers one overload. Overloads differ by parameter types only.
	#[instrument(name = "catalog::function::create", level = "debug", skip(self, function), fields(signature = %function.signature))]
	pub fn create_function(&self, function: FunctionDef) -> Result<()> {
		self.update(|snapshot| {
			let keyspace_name = function.signature.keyspace.as_str();
			let Some(keyspace) = snapshot.keyspaces.get_mut(keyspace_name) else {
				return_error!(keyspace_not_found(keyspace_name));
			};
			if keyspace.functions.contains_key(&function.signature) {
				return_error!(function_already_exists(
					keyspace_name,
					&function.signature.overload_name()
				));
			}
			keyspace.functions.insert(function.signature.clone(), function);
			Ok(())
		})
	}

	#[instrument(name = "catalog::function::drop", level = "debug", skip(self), fields(signature = %signature))]
	pub fn drop_function(&self, signature: &FunctionSignature) -> Result<FunctionDef> {
		self.update(|snapshot| {
			let Some(keyspace) = snapshot.keyspaces.get_mut(&signature.keyspace) else {
				return_error!(keyspace_not_found(&signature.keyspace));
			};
			match keyspace.functions.shift_remove(signature) {
				Some(function) => Ok(function),
				None => return_error!(object_not_found(&signature.keyspace, &signature.overload_name())),
			}
		})
	}
}

#[cfg(test)]
mod tests {
	use metacat_type::DataType;

	use crate::{FunctionDef, MaterializedSchema, SchemaSource};

	fn total(arg: DataType) -> FunctionDef {
		FunctionDef::new("shop", "total", vec![("amount", arg.into())], arg.into())
	}

	#[test]
	fn test_create_overloads() {
		let schema = MaterializedSchema::new(None);
		schema.create_keyspace("shop").unwrap();
		schema.create_function(total(DataType::Int)).unwrap();
		schema.create_function(total(DataType::Bigint)).unwrap();

		assert_eq!(schema.snapshot().find_keyspace("shop").unwrap().functions().count(), 2);
		assert_eq!(schema.create_function(total(DataType::Int)).unwrap_err().code, "CATALOG_004");
	}

	#[test]
	fn test_drop_function() {
		let schema = MaterializedSchema::new(None);
		schema.create_keyspace("shop").unwrap();
		let function = total(DataType::Int);
		schema.create_function(function.clone()).unwrap();

		assert_eq!(schema.drop_function(&function.signature).unwrap(), function);
		assert_eq!(schema.drop_function(&function.signature).unwrap_err().code, "CATALOG_005");
	}
}
