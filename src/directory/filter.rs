//! Multi-field person filter.
//!
//! Free-text search is a case-insensitive substring match against name,
//! category and company (any of them). Category and company are exact
//! matches. An empty value places no constraint; active predicates AND
//! together and the input order is preserved.

use super::Person;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonFilter {
    pub search: String,
    pub category: String,
    pub company: String,
}

impl PersonFilter {
    /// Filter with only the free-text predicate, as the favorites table uses.
    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self { search: term.into(), ..Self::default() }
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search.is_empty() || !self.category.is_empty() || !self.company.is_empty()
    }

    pub fn clear(&mut self) {
        self.search.clear();
        self.category.clear();
        self.company.clear();
    }

    #[must_use]
    pub fn matches(&self, person: &Person) -> bool {
        self.matches_search(person)
            && equals_if_set(&self.category, person.category.as_deref())
            && equals_if_set(&self.company, person.company.as_deref())
    }

    fn matches_search(&self, person: &Person) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        let contains = |field: &str| field.to_lowercase().contains(&needle);
        contains(&person.name)
            || person.category.as_deref().is_some_and(contains)
            || person.company.as_deref().is_some_and(contains)
    }

    /// Rows of `people` that satisfy every active predicate, in input order.
    #[must_use]
    pub fn apply<'a>(&self, people: &'a [Person]) -> Vec<&'a Person> {
        people.iter().filter(|p| self.matches(p)).collect()
    }
}

fn equals_if_set(wanted: &str, actual: Option<&str>) -> bool {
    wanted.is_empty() || actual == Some(wanted)
}

/// Distinct non-empty categories, first-seen order.
#[must_use]
pub fn unique_categories(people: &[Person]) -> Vec<&str> {
    unique(people.iter().filter_map(|p| p.category.as_deref()))
}

/// Distinct non-empty companies, first-seen order.
#[must_use]
pub fn unique_companies(people: &[Person]) -> Vec<&str> {
    unique(people.iter().filter_map(|p| p.company.as_deref()))
}

fn unique<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut out: Vec<&str> = Vec::new();
    for value in values {
        if !value.is_empty() && !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// `"Showing 3 of 10 people"`.
#[must_use]
pub fn summary(shown: usize, total: usize, noun: &str) -> String {
    format!("Showing {shown} of {total} {noun}")
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod tests;
