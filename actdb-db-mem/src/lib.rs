//! In-memory implementation of the activity catalog.
//!
//! The catalog is shared mutable state for the lifetime of the process
//! and is never persisted; a restart resets it to the seed set.

use std::sync::Arc;

use actdb_core::entities::Activity;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

mod repo_impl;
pub mod seed;

/// The authoritative name -> activity mapping.
///
/// Backed by a `Vec` to keep the catalog insertion order stable.
/// Lookups are linear, which is fine for the handful of activities a
/// school offers.
#[derive(Debug, Default)]
pub struct Catalog {
    activities: Vec<Activity>,
}

type SharedCatalog = Arc<RwLock<Catalog>>;

/// Cloneable handle to the shared catalog.
///
/// Multiple readers can access the catalog concurrently. Only a single
/// writer is handed out at a time, so two concurrent signups for the
/// same roster serialize and the second one runs into the duplicate
/// check.
#[derive(Debug, Clone, Default)]
pub struct Connections {
    catalog: SharedCatalog,
}

impl Connections {
    pub fn init(catalog: Catalog) -> Self {
        Self {
            catalog: Arc::new(RwLock::new(catalog)),
        }
    }

    pub fn shared(&self) -> RwLockReadGuard<'_, Catalog> {
        self.catalog.read()
    }

    pub fn exclusive(&self) -> RwLockWriteGuard<'_, Catalog> {
        self.catalog.write()
    }
}
