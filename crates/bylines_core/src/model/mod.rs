//! Domain model for the author/magazine/article relationship.
//!
//! # Responsibility
//! - Define the three entity shapes and their field-level validation.
//! - Keep link lists append-only; only the repository layer may extend them.
//!
//! # Invariants
//! - Every entity is identified by a stable, typed id.
//! - `Article` links exactly one author and one magazine, fixed at creation.
//! - Field validation runs before any assignment; rejected input leaves state
//!   untouched.

pub mod article;
pub mod author;
pub mod ids;
pub mod magazine;
pub mod validation;
