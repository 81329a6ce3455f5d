// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Schemas shared by the metadata tests.
//!
//! `shop` and `billing` are created in that order, so discovery order and
//! sorted order differ.

use metacat_catalog::{MaterializedSchema, test_utils};

pub const CLUSTER: &str = "test_cluster";

/// `shop` with UDT `address`, `billing` with UDT `invoice_line`, and one
/// function in each keyspace.
pub fn shop_and_billing() -> MaterializedSchema {
	let schema = MaterializedSchema::new(Some(CLUSTER.to_string()));

	test_utils::create_udt(&schema, "shop", "address", &[("street", "text"), ("zip", "int")]);
	test_utils::create_function(&schema, "shop", "f", &[("a", "int"), ("b", "text")], "boolean");

	test_utils::create_udt(&schema, "billing", "invoice_line", &[("amount", "decimal"), ("sku", "text")]);
	test_utils::create_function(&schema, "billing", "total", &[("lines", "list<frozen<invoice_line>>")], "decimal");

	schema
}

/// `shop.total` declared twice, for `int` and for `bigint`.
pub fn overloaded() -> MaterializedSchema {
	let schema = MaterializedSchema::new(Some(CLUSTER.to_string()));
	test_utils::create_function(&schema, "shop", "total", &[("amount", "int")], "int");
	test_utils::create_function(&schema, "shop", "total", &[("amount", "bigint")], "bigint");
	schema
}
