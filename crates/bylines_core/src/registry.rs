//! Process-wide catalog registry.
//!
//! # Responsibility
//! - Own the single catalog shared by every caller in the process.
//! - Provide an explicit teardown hook for tests and repeated runs.
//!
//! # Invariants
//! - The catalog is created on first use and lives for the process lifetime.
//! - Access is serialized by a mutex; a poisoned lock is recovered, never
//!   propagated as a panic.

use crate::repo::catalog_repo::InMemoryCatalogRepository;
use crate::service::catalog_service::CatalogService;
use once_cell::sync::Lazy;
use std::sync::{Mutex, PoisonError};

/// Catalog service type held by the process-wide registry.
pub type GlobalCatalog = CatalogService<InMemoryCatalogRepository>;

static CATALOG: Lazy<Mutex<GlobalCatalog>> =
    Lazy::new(|| Mutex::new(CatalogService::new(InMemoryCatalogRepository::new())));

/// Runs `f` with exclusive access to the process-wide catalog.
pub fn with_catalog<T>(f: impl FnOnce(&mut GlobalCatalog) -> T) -> T {
    let mut guard = CATALOG.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut *guard)
}

/// Clears every registry in the process-wide catalog.
pub fn reset_catalog() {
    with_catalog(GlobalCatalog::reset);
}
