//! Typed entity identifiers.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use uuid::Uuid;

macro_rules! define_id {
    ($name:ident) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }
    };
}

define_id!(AuthorId);
define_id!(MagazineId);
define_id!(ArticleId);

/// Entity kind tag used in error and log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Author,
    Magazine,
    Article,
}

impl EntityKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Author => "author",
            Self::Magazine => "magazine",
            Self::Article => "article",
        }
    }
}

impl Display for EntityKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Typed reference to one entity of any kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityRef {
    Author(AuthorId),
    Magazine(MagazineId),
    Article(ArticleId),
}

impl EntityRef {
    pub fn kind(self) -> EntityKind {
        match self {
            Self::Author(_) => EntityKind::Author,
            Self::Magazine(_) => EntityKind::Magazine,
            Self::Article(_) => EntityKind::Article,
        }
    }
}

impl Display for EntityRef {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Author(id) => write!(f, "author {id}"),
            Self::Magazine(id) => write!(f, "magazine {id}"),
            Self::Article(id) => write!(f, "article {id}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AuthorId, EntityKind, EntityRef, MagazineId};
    use uuid::Uuid;

    #[test]
    fn generated_ids_are_unique_and_non_nil() {
        let first = AuthorId::new();
        let second = AuthorId::new();
        assert_ne!(first, second);
        assert!(!first.as_uuid().is_nil());
    }

    #[test]
    fn entity_ref_reports_kind_and_display() {
        let uuid = Uuid::parse_str("11111111-2222-4333-8444-555555555555").unwrap();
        let reference = EntityRef::Magazine(MagazineId::from_uuid(uuid));
        assert_eq!(reference.kind(), EntityKind::Magazine);
        assert_eq!(
            reference.to_string(),
            "magazine 11111111-2222-4333-8444-555555555555"
        );
    }
}
