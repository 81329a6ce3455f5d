// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::sync::Arc;

use crate::ClusterSnapshot;

/// Anything that can hand out a consistent, point-in-time schema snapshot.
pub trait SchemaSource: Send + Sync {
	fn snapshot(&self) -> Arc<ClusterSnapshot>;
}

impl SchemaSource for Arc<ClusterSnapshot> {
	fn snapshot(&self) -> Arc<ClusterSnapshot> {
		Arc::clone(self)
	}
}

impl SchemaSource for ClusterSnapshot {
	fn snapshot(&self) -> Arc<ClusterSnapshot> {
		Arc::new(self.clone())
	}
}

impl<T: SchemaSource + ?Sized> SchemaSource for &T {
	fn snapshot(&self) -> Arc<ClusterSnapshot> {
		(**self).snapshot()
	}
}
