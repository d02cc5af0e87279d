use super::*;
use crate::directory::PersonId;

fn person(id: usize, name: &str, category: Option<&str>, happiness: u8) -> Person {
    Person {
        id: PersonId::new(id.to_string()),
        name: name.into(),
        category: category.map(str::to_owned),
        company: None,
        level_of_happiness: happiness,
    }
}

fn names(rows: &[&Person]) -> Vec<String> {
    rows.iter().map(|p| p.name.clone()).collect()
}

#[test]
fn sort_by_name_ignores_case() {
    let list = vec![person(1, "carl", None, 1), person(2, "Ann", None, 2), person(3, "bob", None, 3)];
    let mut rows: Vec<&Person> = list.iter().collect();
    sort_rows(&mut rows, SortKey::Name, SortDirection::Ascending);
    assert_eq!(names(&rows), vec!["Ann", "bob", "carl"]);
}

#[test]
fn sort_by_happiness_descending() {
    let list = vec![person(1, "A", None, 3), person(2, "B", None, 9), person(3, "C", None, 6)];
    let mut rows: Vec<&Person> = list.iter().collect();
    sort_rows(&mut rows, SortKey::Happiness, SortDirection::Descending);
    assert_eq!(names(&rows), vec!["B", "C", "A"]);
}

#[test]
fn missing_category_sorts_first_and_sort_is_stable() {
    let list = vec![
        person(1, "A", Some("Y"), 1),
        person(2, "B", None, 1),
        person(3, "C", Some("X"), 1),
        person(4, "D", Some("X"), 1),
    ];
    let mut rows: Vec<&Person> = list.iter().collect();
    sort_rows(&mut rows, SortKey::Category, SortDirection::Ascending);
    assert_eq!(names(&rows), vec!["B", "C", "D", "A"]);
}

#[test]
fn paginate_splits_pages() {
    let list: Vec<Person> = (1..=12).map(|i| person(i, &format!("P{i}"), None, 5)).collect();
    let rows: Vec<&Person> = list.iter().collect();

    let first = paginate(&rows, 1, 5);
    assert_eq!(first.rows.len(), 5);
    assert_eq!(first.page_count, 3);
    assert_eq!(first.total, 12);

    let last = paginate(&rows, 3, 5);
    assert_eq!(names(&last.rows), vec!["P11", "P12"]);
}

#[test]
fn paginate_clamps_out_of_range_pages() {
    let list: Vec<Person> = (1..=3).map(|i| person(i, &format!("P{i}"), None, 5)).collect();
    let rows: Vec<&Person> = list.iter().collect();

    assert_eq!(paginate(&rows, 9, 2).number, 2);
    assert_eq!(paginate(&rows, 0, 2).number, 1);
}

#[test]
fn paginate_empty_input_is_one_empty_page() {
    let page = paginate(&[], 4, DEFAULT_PAGE_SIZE);
    assert!(page.rows.is_empty());
    assert_eq!(page.number, 1);
    assert_eq!(page.page_count, 1);
}

#[test]
fn zero_page_size_uses_default() {
    let list: Vec<Person> = (1..=15).map(|i| person(i, &format!("P{i}"), None, 5)).collect();
    let rows: Vec<&Person> = list.iter().collect();
    assert_eq!(paginate(&rows, 1, 0).rows.len(), DEFAULT_PAGE_SIZE);
    assert!(PAGE_SIZE_OPTIONS.contains(&DEFAULT_PAGE_SIZE));
}
