//! Repository layer abstractions and the in-memory catalog store.
//!
//! # Responsibility
//! - Define the storage contract for the author/magazine/article registries.
//! - Own link wiring so model types never mutate each other directly.
//!
//! # Invariants
//! - Registries are append-only; `clear` is the only removal path.
//! - Lookups by unknown id return `None`; writes return semantic errors.

pub mod catalog_repo;
