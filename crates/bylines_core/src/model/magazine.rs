//! Magazine entity.
//!
//! # Invariants
//! - `name` length stays within `MAGAZINE_NAME_LENGTH`.
//! - `category` stays non-empty.
//! - Setters validate first; a rejected value leaves the previous one intact.

use crate::model::ids::{ArticleId, MagazineId};
use crate::model::validation::{validate_category, validate_magazine_name, ValidationError};
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// A publication that collects articles from many authors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
    /// Published articles in creation order.
    articles: Vec<ArticleId>,
}

impl Magazine {
    /// Creates a magazine with a generated id.
    ///
    /// # Errors
    /// - `ValidationError::InvalidName` when `name` is outside 2..=16 chars.
    /// - `ValidationError::InvalidCategory` when `category` is empty.
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Self::with_id(MagazineId::new(), name, category)
    }

    /// Creates a magazine with a caller-provided id.
    pub fn with_id(
        id: MagazineId,
        name: impl Into<String>,
        category: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        let category = category.into();
        validate_magazine_name(&name)?;
        validate_category(&category)?;
        Ok(Self {
            id,
            name,
            category,
            articles: Vec::new(),
        })
    }

    pub fn id(&self) -> MagazineId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replaces the name after validation.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_magazine_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces the category after validation.
    pub fn set_category(&mut self, category: impl Into<String>) -> Result<(), ValidationError> {
        let category = category.into();
        validate_category(&category)?;
        self.category = category;
        Ok(())
    }

    /// Ids of published articles, oldest first.
    pub fn article_ids(&self) -> &[ArticleId] {
        &self.articles
    }

    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    pub(crate) fn push_article(&mut self, article_id: ArticleId) {
        self.articles.push(article_id);
    }
}

impl Display for Magazine {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Magazine(name={}, category={})", self.name, self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::Magazine;
    use crate::model::ids::EntityKind;
    use crate::model::validation::ValidationError;

    #[test]
    fn rejected_setter_keeps_previous_values() {
        let mut magazine = Magazine::new("CodeToday", "Tech").unwrap();

        let err = magazine.set_name("").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidName {
                entity: EntityKind::Magazine,
                length: 0,
            }
        );
        assert_eq!(magazine.name(), "CodeToday");

        let err = magazine.set_category("").unwrap_err();
        assert_eq!(err, ValidationError::InvalidCategory);
        assert_eq!(magazine.category(), "Tech");
    }

    #[test]
    fn accepted_setter_replaces_value() {
        let mut magazine = Magazine::new("CodeToday", "Tech").unwrap();
        magazine.set_name("CodeTomorrow").unwrap();
        magazine.set_category("Futures").unwrap();
        assert_eq!(
            magazine.to_string(),
            "Magazine(name=CodeTomorrow, category=Futures)"
        );
    }
}
