//! Favorites set and the stores that hold it.
//!
//! Membership is keyed by [`PersonId`], never by full value equality. Stores
//! are read whole and replaced whole; the toggle logic never mutates a store
//! in place.

use std::path::{Path, PathBuf};

use tracing::debug;

use super::{DirectoryError, Person, PersonId};

// =============================================================================
// SET
// =============================================================================

/// People marked as favorites, at most once per id, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FavoritesSet {
    people: Vec<Person>,
}

impl FavoritesSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a list, keeping the first record seen for each id.
    #[must_use]
    pub fn from_people(people: impl IntoIterator<Item = Person>) -> Self {
        let mut set = Self::new();
        for person in people {
            if !set.contains(&person.id) {
                set.people.push(person);
            }
        }
        set
    }

    #[must_use]
    pub fn contains(&self, id: &PersonId) -> bool {
        self.people.iter().any(|p| &p.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.people.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Person> {
        self.people.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Person] {
        &self.people
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<Person> {
        self.people
    }

    /// Flip membership of `person`; returns `true` when it is now a favorite.
    pub fn toggle(&mut self, person: &Person) -> bool {
        if self.remove(&person.id) {
            false
        } else {
            self.people.push(person.clone());
            true
        }
    }

    /// New set with `person`'s membership flipped.
    #[must_use]
    pub fn toggled(&self, person: &Person) -> Self {
        let mut next = self.clone();
        next.toggle(person);
        next
    }

    /// Remove by id; returns whether anything was removed.
    pub fn remove(&mut self, id: &PersonId) -> bool {
        let before = self.people.len();
        self.people.retain(|p| &p.id != id);
        self.people.len() != before
    }
}

// =============================================================================
// STORES
// =============================================================================

/// Holder of the favorites list. The directory only reads the list and asks
/// for full replacements.
pub trait FavoritesStore {
    fn favorites(&self) -> &[Person];

    /// Replace the whole list.
    ///
    /// # Errors
    ///
    /// Returns an error if a persistent store cannot write the new list.
    fn replace(&mut self, people: Vec<Person>) -> Result<(), DirectoryError>;
}

#[derive(Debug, Default)]
pub struct MemoryFavorites {
    people: Vec<Person>,
}

impl MemoryFavorites {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl FavoritesStore for MemoryFavorites {
    fn favorites(&self) -> &[Person] {
        &self.people
    }

    fn replace(&mut self, people: Vec<Person>) -> Result<(), DirectoryError> {
        self.people = people;
        Ok(())
    }
}

/// Favorites persisted as a JSON array, rewritten on every replace.
#[derive(Debug)]
pub struct JsonFavorites {
    path: PathBuf,
    people: Vec<Person>,
}

impl JsonFavorites {
    /// Open the store at `path`. A missing file is an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, DirectoryError> {
        let path = path.as_ref().to_path_buf();
        let people = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str(&text)
                .map_err(|source| DirectoryError::Parse { path: path.display().to_string(), source })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(source) => return Err(DirectoryError::Io { path: path.display().to_string(), source }),
        };
        Ok(Self { path, people })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FavoritesStore for JsonFavorites {
    fn favorites(&self) -> &[Person] {
        &self.people
    }

    fn replace(&mut self, people: Vec<Person>) -> Result<(), DirectoryError> {
        let text = serde_json::to_string_pretty(&people)
            .map_err(|source| DirectoryError::Parse { path: self.path.display().to_string(), source })?;
        std::fs::write(&self.path, text)
            .map_err(|source| DirectoryError::Io { path: self.path.display().to_string(), source })?;
        debug!(path = %self.path.display(), count = people.len(), "favorites written");
        self.people = people;
        Ok(())
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Flip `person`'s membership in `store`; returns `true` when now a favorite.
///
/// # Errors
///
/// Returns an error if the store rejects the replacement.
pub fn toggle_favorite(store: &mut impl FavoritesStore, person: &Person) -> Result<bool, DirectoryError> {
    let mut set = FavoritesSet::from_people(store.favorites().iter().cloned());
    let added = set.toggle(person);
    store.replace(set.into_vec())?;
    Ok(added)
}

/// Remove `id` from `store`.
///
/// # Errors
///
/// [`DirectoryError::UnknownPerson`] when `id` is not a favorite, or a store
/// write error.
pub fn remove_favorite(store: &mut impl FavoritesStore, id: &PersonId) -> Result<(), DirectoryError> {
    let mut set = FavoritesSet::from_people(store.favorites().iter().cloned());
    if !set.remove(id) {
        return Err(DirectoryError::UnknownPerson(id.clone()));
    }
    store.replace(set.into_vec())
}

#[cfg(test)]
#[path = "favorites_test.rs"]
mod tests;
