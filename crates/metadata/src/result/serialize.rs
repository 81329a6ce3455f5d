// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use serde::{
	Serialize, Serializer,
	ser::{SerializeMap, SerializeSeq},
};

use super::MetadataResult;
use crate::row::MetadataRow;

/// A row serializes as a map from column name to nullable string, in column
/// order.
impl Serialize for MetadataRow {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let entries = self.entries();
		let mut map = serializer.serialize_map(Some(entries.len()))?;
		for (name, value) in &entries {
			map.serialize_entry(name, value)?;
		}
		map.end()
	}
}

impl Serialize for MetadataResult {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut seq = serializer.serialize_seq(Some(self.len()))?;
		for row in self.rows() {
			seq.serialize_element(row)?;
		}
		seq.end()
	}
}
