//! People source: a JSON array of [`Person`] records on disk.

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use super::{DirectoryError, MAX_HAPPINESS, Person};

/// Load and validate the people list at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, a happiness level
/// is above 10, or two records share an id.
pub fn load_people(path: impl AsRef<Path>) -> Result<Vec<Person>, DirectoryError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|source| DirectoryError::Io { path: path.display().to_string(), source })?;
    let people = parse_people(&text).map_err(|e| match e {
        DirectoryError::Parse { source, .. } => DirectoryError::Parse { path: path.display().to_string(), source },
        other => other,
    })?;
    info!(path = %path.display(), count = people.len(), "people loaded");
    Ok(people)
}

/// Parse and validate a JSON people list.
///
/// # Errors
///
/// Same as [`load_people`], minus I/O.
pub fn parse_people(text: &str) -> Result<Vec<Person>, DirectoryError> {
    let people: Vec<Person> =
        serde_json::from_str(text).map_err(|source| DirectoryError::Parse { path: "<input>".into(), source })?;
    validate(&people)?;
    Ok(people)
}

fn validate(people: &[Person]) -> Result<(), DirectoryError> {
    let mut seen = HashSet::with_capacity(people.len());
    for person in people {
        if person.level_of_happiness > MAX_HAPPINESS {
            return Err(DirectoryError::HappinessOutOfRange {
                id: person.id.clone(),
                level: person.level_of_happiness,
            });
        }
        if !seen.insert(&person.id) {
            return Err(DirectoryError::DuplicateId(person.id.clone()));
        }
    }
    Ok(())
}
