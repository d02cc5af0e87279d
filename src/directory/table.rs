//! Table helpers: column sorting and pagination over filtered rows.

use std::cmp::Ordering;

use super::Person;

pub const PAGE_SIZE_OPTIONS: [usize; 3] = [5, 10, 20];
pub const DEFAULT_PAGE_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    Category,
    Company,
    Happiness,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Stable sort of `rows` by `key`. Missing category/company sort first when
/// ascending.
pub fn sort_rows(rows: &mut [&Person], key: SortKey, direction: SortDirection) {
    rows.sort_by(|a, b| {
        let ord = compare(a, b, key);
        match direction {
            SortDirection::Ascending => ord,
            SortDirection::Descending => ord.reverse(),
        }
    });
}

fn compare(a: &Person, b: &Person, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortKey::Category => a.category.cmp(&b.category),
        SortKey::Company => a.company.cmp(&b.company),
        SortKey::Happiness => a.level_of_happiness.cmp(&b.level_of_happiness),
    }
}

/// One page of rows plus the numbers a footer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<'a> {
    pub rows: Vec<&'a Person>,
    /// 1-based.
    pub number: usize,
    pub page_count: usize,
    pub total: usize,
}

/// Slice `rows` into page `number` (1-based) of `page_size`.
///
/// Page numbers past the end clamp to the last page; page 0 is page 1. An
/// empty input yields a single empty page. A `page_size` of 0 falls back to
/// [`DEFAULT_PAGE_SIZE`].
#[must_use]
pub fn paginate<'a>(rows: &[&'a Person], number: usize, page_size: usize) -> Page<'a> {
    let page_size = if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size };
    let total = rows.len();
    let page_count = total.div_ceil(page_size).max(1);
    let number = number.clamp(1, page_count);
    let start = (number - 1) * page_size;
    let end = (start + page_size).min(total);
    Page { rows: rows[start..end].to_vec(), number, page_count, total }
}

#[cfg(test)]
#[path = "table_test.rs"]
mod tests;
