//! Directory: people records, filtering, favorites and table helpers.
//!
//! DESIGN
//! ======
//! The people list is read-only input. Every view over it (filtered rows,
//! sorted page, favorites) is recomputed from scratch by plain functions, so
//! there is no cached state to invalidate when a filter input changes.
//! Favorites are the only mutable data and live behind [`FavoritesStore`],
//! which is read whole and replaced whole.

pub mod favorites;
pub mod filter;
pub mod happiness;
pub mod source;
pub mod table;

pub use favorites::{FavoritesSet, FavoritesStore, JsonFavorites, MemoryFavorites};
pub use filter::PersonFilter;
pub use happiness::HappinessBand;

use serde::{Deserialize, Serialize};

use crate::error::ErrorCode;

/// Highest valid `levelOfHappiness`.
pub const MAX_HAPPINESS: u8 = 10;

// =============================================================================
// ERROR
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    #[error("failed to read {path}: {source}")]
    Io { path: String, source: std::io::Error },

    #[error("failed to parse {path}: {source}")]
    Parse { path: String, source: serde_json::Error },

    #[error("person {id}: levelOfHappiness {level} is outside 0..=10")]
    HappinessOutOfRange { id: PersonId, level: u8 },

    #[error("duplicate person id {0}")]
    DuplicateId(PersonId),

    #[error("no person with id {0}")]
    UnknownPerson(PersonId),
}

impl ErrorCode for DirectoryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Io { .. } => "E_IO",
            Self::Parse { .. } => "E_PARSE",
            Self::HappinessOutOfRange { .. } => "E_HAPPINESS_RANGE",
            Self::DuplicateId(_) => "E_DUPLICATE_ID",
            Self::UnknownPerson(_) => "E_UNKNOWN_PERSON",
        }
    }
}

// =============================================================================
// PERSON
// =============================================================================

/// Person identifier. Sources may send numbers or strings; both compare as
/// their decimal/string form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "RawPersonId")]
pub struct PersonId(String);

impl PersonId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for PersonId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPersonId {
    Number(u64),
    Text(String),
}

impl From<RawPersonId> for PersonId {
    fn from(raw: RawPersonId) -> Self {
        match raw {
            RawPersonId::Number(n) => Self(n.to_string()),
            RawPersonId::Text(s) => Self(s),
        }
    }
}

/// One directory record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    pub level_of_happiness: u8,
}

impl Person {
    #[must_use]
    pub fn happiness(&self) -> HappinessBand {
        HappinessBand::for_level(self.level_of_happiness)
    }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
