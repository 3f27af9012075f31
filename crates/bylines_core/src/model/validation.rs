//! Field validation rules shared by the entity constructors and setters.
//!
//! # Invariants
//! - Lengths are counted in characters, not bytes.
//! - "Non-empty" only rejects the empty string; whitespace is accepted.

use crate::model::ids::{AuthorId, EntityKind, MagazineId};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::ops::RangeInclusive;

/// Accepted article title length, inclusive.
pub const TITLE_LENGTH: RangeInclusive<usize> = 5..=50;
/// Accepted magazine name length, inclusive.
pub const MAGAZINE_NAME_LENGTH: RangeInclusive<usize> = 2..=16;

/// Validation failure raised at construction or mutation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Author id is not registered in the catalog.
    InvalidAuthor(AuthorId),
    /// Magazine id is not registered in the catalog.
    InvalidMagazine(MagazineId),
    /// Title length outside `TITLE_LENGTH`.
    InvalidTitle { length: usize },
    /// Author name empty, or magazine name outside `MAGAZINE_NAME_LENGTH`.
    InvalidName { entity: EntityKind, length: usize },
    /// Magazine category empty.
    InvalidCategory,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAuthor(id) => write!(f, "author must be a registered author: {id}"),
            Self::InvalidMagazine(id) => {
                write!(f, "magazine must be a registered magazine: {id}")
            }
            Self::InvalidTitle { length } => write!(
                f,
                "title must be between {} and {} characters, got {length}",
                TITLE_LENGTH.start(),
                TITLE_LENGTH.end()
            ),
            Self::InvalidName {
                entity: EntityKind::Magazine,
                length,
            } => write!(
                f,
                "magazine name must be between {} and {} characters, got {length}",
                MAGAZINE_NAME_LENGTH.start(),
                MAGAZINE_NAME_LENGTH.end()
            ),
            Self::InvalidName { entity, .. } => write!(f, "{entity} name must be non-empty"),
            Self::InvalidCategory => write!(f, "category must be non-empty"),
        }
    }
}

impl Error for ValidationError {}

impl ValidationError {
    /// Stable machine-readable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidAuthor(_) => "invalid_author",
            Self::InvalidMagazine(_) => "invalid_magazine",
            Self::InvalidTitle { .. } => "invalid_title",
            Self::InvalidName { .. } => "invalid_name",
            Self::InvalidCategory => "invalid_category",
        }
    }
}

pub(crate) fn validate_author_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::InvalidName {
            entity: EntityKind::Author,
            length: 0,
        });
    }
    Ok(())
}

pub(crate) fn validate_magazine_name(name: &str) -> Result<(), ValidationError> {
    let length = name.chars().count();
    if !MAGAZINE_NAME_LENGTH.contains(&length) {
        return Err(ValidationError::InvalidName {
            entity: EntityKind::Magazine,
            length,
        });
    }
    Ok(())
}

pub(crate) fn validate_category(category: &str) -> Result<(), ValidationError> {
    if category.is_empty() {
        return Err(ValidationError::InvalidCategory);
    }
    Ok(())
}

pub(crate) fn validate_title(title: &str) -> Result<(), ValidationError> {
    let length = title.chars().count();
    if !TITLE_LENGTH.contains(&length) {
        return Err(ValidationError::InvalidTitle { length });
    }
    Ok(())
}
